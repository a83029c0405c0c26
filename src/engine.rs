use crate::{demo::ZeppelinDemo, render_surface::RenderSurface};

/// Draws one frame: camera, then the zeppelin placed by the current pose.
pub fn render_frame<S: RenderSurface>(
    demo: &mut ZeppelinDemo,
    surface: &mut S,
) -> Result<(), S::Error> {
    let ZeppelinDemo {
        camera,
        projection,
        world,
        dimensions,
        scene,
        stack,
        ..
    } = demo;

    stack.reset();

    surface.clear_frame();
    surface.set_projection(projection);
    surface.set_camera(camera.eye, camera.target, camera.up);

    {
        let mut root = stack.scope(world.pose.root_transform(dimensions.body_length));
        scene.render(&mut root, &world.animation, surface);
    }

    surface.present_frame()
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3, Vec4Swizzles};

    use super::*;
    use crate::{
        config::AppConfig,
        render_surface::recording::{RecordingSurface, SurfaceCall},
        world::Command,
    };

    fn render(demo: &mut ZeppelinDemo) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        render_frame(demo, &mut surface).unwrap();
        surface
    }

    #[test]
    fn frame_emits_every_part_between_clear_and_present() {
        let mut demo = ZeppelinDemo::new(AppConfig::default());
        let surface = render(&mut demo);

        assert_eq!(surface.calls.first(), Some(&SurfaceCall::Clear));
        assert_eq!(surface.calls.last(), Some(&SurfaceCall::Present));
        assert_eq!(
            surface.calls[2],
            SurfaceCall::Camera {
                eye: Vec3::new(0.0, 6.0, 22.0),
                target: Vec3::ZERO,
                up: Vec3::Y,
            }
        );

        let count = |f: fn(&SurfaceCall) -> bool| surface.count(f);
        assert_eq!(count(|c| matches!(c, SurfaceCall::Cylinder { .. })), 3);
        assert_eq!(count(|c| matches!(c, SurfaceCall::Sphere { .. })), 5);
        assert_eq!(count(|c| matches!(c, SurfaceCall::Cone { .. })), 1);
        assert_eq!(count(|c| matches!(c, SurfaceCall::Quad { .. })), 18);
        assert_eq!(count(|c| matches!(c, SurfaceCall::Triangle { .. })), 6);
    }

    #[test]
    fn frame_passes_the_current_aspect() {
        let mut demo = ZeppelinDemo::new(AppConfig::default());
        demo.resize(800, 600);
        let surface = render(&mut demo);

        let Some(SurfaceCall::Projection { aspect }) = surface.calls.get(1) else {
            panic!("projection is not set right after clearing");
        };
        assert!((aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn stack_is_balanced_after_every_frame() {
        let mut demo = ZeppelinDemo::new(AppConfig::default());
        render(&mut demo);
        demo.handle_command(Command::Forward);
        render(&mut demo);

        assert_eq!(demo.stack.depth(), 0);
        assert_eq!(demo.stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn turning_is_unaffected_by_frames_in_between() {
        let mut rendered = ZeppelinDemo::new(AppConfig::default());
        let mut unrendered = ZeppelinDemo::new(AppConfig::default());

        for _ in 0..10 {
            render(&mut rendered);
            rendered.handle_command(Command::TurnLeft);
            unrendered.handle_command(Command::TurnLeft);
        }
        render(&mut rendered);

        assert_eq!(rendered.world.pose.heading, 20.0);
        assert_eq!(rendered.world.pose, unrendered.world.pose);
        assert_eq!(rendered.world.animation, unrendered.world.animation);
    }

    #[test]
    fn body_follows_the_pose() {
        let mut demo = ZeppelinDemo::new(AppConfig::default());
        demo.world.pose.position = Vec3::new(1.0, 2.0, 3.0);
        let surface = render(&mut demo);

        let body_origin = surface
            .calls
            .iter()
            .find_map(|call| match call {
                SurfaceCall::Cylinder { transform, .. } => Some(transform.w_axis.xyz()),
                _ => None,
            })
            .unwrap();

        // At heading 0 both half-length offsets point down -X.
        assert!(body_origin.abs_diff_eq(Vec3::new(1.0 - 3.0, 2.0, 3.0), 1e-5));
    }

    #[test]
    fn spinning_the_propeller_only_moves_the_blades() {
        let mut demo = ZeppelinDemo::new(AppConfig::default());
        let still = render(&mut demo);
        demo.world.animation.advance_spin(90.0);
        let spun = render(&mut demo);

        let sphere_origins = |surface: &RecordingSurface| -> Vec<Vec3> {
            surface
                .calls
                .iter()
                .filter_map(|call| match call {
                    SurfaceCall::Sphere { transform, .. } => Some(transform.w_axis.xyz()),
                    _ => None,
                })
                .collect()
        };

        let before = sphere_origins(&still);
        let after = sphere_origins(&spun);

        // front_end and back_end stay put, the blades move.
        assert!(before[0].abs_diff_eq(after[0], 1e-5));
        assert!(before[1].abs_diff_eq(after[1], 1e-5));
        for (blade_before, blade_after) in before[2..].iter().zip(&after[2..]) {
            assert!(!blade_before.abs_diff_eq(*blade_after, 1e-3));
        }
    }
}
