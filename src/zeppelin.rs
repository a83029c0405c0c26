//! The airship model: dimensions derived from one base length and the
//! fixed part tree built from them.

use glam::Vec3;

use crate::scene_graph::{LocalTransform, PartNode, Primitive, Scene, Shape};

const QUADRIC_SLICES: u32 = 20;
const QUADRIC_STACKS: u32 = 10;
const SPHERE_RESOLUTION: u32 = 30;
const CONE_RESOLUTION: u32 = 10;

/// Blade angles about the drive shaft, in degrees.
pub const BLADE_ANGLES: [f32; 3] = [60.0, 180.0, 300.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeppelinDimensions {
    pub body_length: f32,
    pub body_radius: f32,
    pub front_end_radius: f32,
    pub back_end_radius: f32,
    pub drive_shaft_length: f32,
    pub drive_shaft_radius: f32,
    pub propeller_cap_length: f32,
    pub propeller_cap_radius: f32,
    pub blade_length: f32,
    pub blade_width: f32,
    pub blade_thickness: f32,
    pub cabin_length: f32,
    pub cabin_width: f32,
    pub cabin_height: f32,
    pub fin_length: f32,
    pub fin_thickness: f32,
    pub fin_width: f32,
}

impl ZeppelinDimensions {
    pub fn from_body_length(body_length: f32) -> Self {
        let body_radius = body_length * 0.3;
        let front_end_radius = body_radius;
        let back_end_radius = body_radius;
        let drive_shaft_radius = back_end_radius * 0.1;

        Self {
            body_length,
            body_radius,
            front_end_radius,
            back_end_radius,
            drive_shaft_length: back_end_radius * 1.1,
            drive_shaft_radius,
            propeller_cap_length: drive_shaft_radius * 0.7,
            propeller_cap_radius: drive_shaft_radius * 1.2,
            blade_length: back_end_radius * 0.25,
            blade_width: back_end_radius * 0.075,
            blade_thickness: back_end_radius * 0.05,
            cabin_length: body_length * 0.3,
            cabin_width: body_radius * 0.5,
            cabin_height: body_radius * 0.8,
            fin_length: body_length * 0.5,
            fin_thickness: body_radius * 0.1,
            fin_width: body_radius / 3.0,
        }
    }
}

impl Default for ZeppelinDimensions {
    fn default() -> Self {
        Self::from_body_length(3.0)
    }
}

fn unit_cylinder() -> Shape {
    Shape::Cylinder {
        top_radius: 1.0,
        bottom_radius: 1.0,
        height: 1.0,
        slices: QUADRIC_SLICES,
        stacks: QUADRIC_STACKS,
    }
}

fn sphere(radius: f32) -> Shape {
    Shape::Sphere {
        radius,
        slices: SPHERE_RESOLUTION,
        stacks: SPHERE_RESOLUTION,
    }
}

/// Wedge-shaped tail fin in unit space: x in [0, 3], y in [0, 1], z in [0, 0.2].
pub fn fin_shape() -> Shape {
    let v = Vec3::new;

    let quads = vec![
        // top face
        [v(0.0, 0.0, 0.0), v(2.0, 0.0, 0.0), v(2.0, 1.0, 0.0), v(0.0, 1.0, 0.0)],
        // bottom face
        [v(0.0, 0.0, 0.2), v(2.0, 0.0, 0.2), v(2.0, 1.0, 0.2), v(0.0, 1.0, 0.2)],
        // inside edge
        [v(0.0, 0.0, 0.0), v(3.0, 0.0, 0.0), v(3.0, 0.0, 0.2), v(0.0, 0.0, 0.2)],
        // back edge
        [v(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(0.0, 1.0, 0.2), v(0.0, 0.0, 0.2)],
        // straight outside edge
        [v(0.0, 1.0, 0.0), v(2.0, 1.0, 0.0), v(2.0, 1.0, 0.2), v(0.0, 1.0, 0.2)],
        // angled outside edge
        [v(2.0, 1.0, 0.0), v(3.0, 0.0, 0.0), v(3.0, 0.0, 0.2), v(2.0, 1.0, 0.2)],
    ];

    let triangles = vec![
        [v(2.0, 0.0, 0.0), v(3.0, 0.0, 0.0), v(2.0, 1.0, 0.0)],
        [v(2.0, 0.0, 0.2), v(3.0, 0.0, 0.2), v(2.0, 1.0, 0.2)],
    ];

    Shape::Polygons { quads, triangles }
}

/// Builds the part tree. Dimensions are baked in; only the pose and the
/// propeller spin change afterwards.
pub fn build_scene(dims: &ZeppelinDimensions) -> Scene {
    let mut scene = Scene::new(PartNode::new("zeppelin"));
    let root = scene.root_id();

    // Body runs along the parent's X axis after the quarter turn.
    let body = scene.add_child(
        root,
        PartNode::new("body")
            .with_transform(LocalTransform::identity().rotate(90.0, Vec3::Y))
            .with_primitive(Primitive::new(unit_cylinder()).scaled(Vec3::new(
                dims.body_radius,
                dims.body_radius,
                dims.body_length,
            ))),
    );

    scene.add_child(
        body,
        PartNode::new("cabin")
            .with_transform(
                LocalTransform::identity()
                    .translate(Vec3::new(
                        0.0,
                        -dims.body_radius / 2.0,
                        dims.body_length / 3.0,
                    ))
                    .rotate(90.0, Vec3::X),
            )
            .with_primitive(Primitive::new(unit_cylinder()).scaled(Vec3::new(
                dims.cabin_width,
                dims.cabin_length,
                dims.cabin_height,
            ))),
    );

    let fins = scene.add_child(
        body,
        PartNode::new("fins").with_transform(
            LocalTransform::identity().translate(Vec3::new(0.0, 0.0, dims.body_length)),
        ),
    );

    let fin_scale = Vec3::new(dims.fin_width, dims.fin_length, dims.fin_thickness);
    let fin_offset = Vec3::new(dims.body_radius / 2.0, 0.0, 0.0);
    for (name, yaw) in [("fin_upper", 0.0), ("fin_side", -90.0), ("fin_lower", -180.0)] {
        let mut transform = LocalTransform::identity().rotate(-90.0, Vec3::X);
        if yaw != 0.0 {
            transform = transform.rotate(yaw, Vec3::Y);
        }

        scene.add_child(
            fins,
            PartNode::new(name)
                .with_transform(transform.translate(fin_offset))
                .with_primitive(Primitive::new(fin_shape()).scaled(fin_scale)),
        );
    }

    scene.add_child(
        root,
        PartNode::new("front_end").with_primitive(Primitive::new(sphere(dims.front_end_radius))),
    );

    let back_end = scene.add_child(
        root,
        PartNode::new("back_end")
            .with_transform(LocalTransform::identity().translate(Vec3::new(
                dims.body_length,
                0.0,
                0.0,
            )))
            .with_primitive(Primitive::new(sphere(dims.back_end_radius))),
    );

    let drive_shaft = scene.add_child(
        back_end,
        PartNode::new("drive_shaft")
            .with_transform(
                LocalTransform::identity()
                    .rotate(90.0, Vec3::Y)
                    .spin(Vec3::Z),
            )
            .with_primitive(Primitive::new(unit_cylinder()).scaled(Vec3::new(
                dims.drive_shaft_radius,
                dims.drive_shaft_radius,
                dims.drive_shaft_length,
            ))),
    );

    scene.add_child(
        drive_shaft,
        PartNode::new("propeller_cap")
            .with_transform(
                LocalTransform::identity().translate(Vec3::new(0.0, 0.0, dims.drive_shaft_length)),
            )
            .with_primitive(
                Primitive::new(Shape::Cone {
                    base_radius: 1.0,
                    height: 1.0,
                    slices: CONE_RESOLUTION,
                    stacks: CONE_RESOLUTION,
                })
                .scaled(Vec3::new(
                    dims.propeller_cap_radius,
                    dims.propeller_cap_radius,
                    dims.propeller_cap_length,
                )),
            ),
    );

    let propeller = scene.add_child(
        drive_shaft,
        PartNode::new("propeller").with_transform(LocalTransform::identity().translate(
            Vec3::new(
                0.0,
                0.0,
                dims.drive_shaft_length + 0.5 * dims.propeller_cap_length,
            ),
        )),
    );

    // Each blade is pushed out along the up axis of its own rotated frame.
    let blade_scale = Vec3::new(dims.blade_width, dims.blade_length, dims.blade_thickness);
    for (index, angle) in BLADE_ANGLES.iter().enumerate() {
        scene.add_child(
            propeller,
            PartNode::new(format!("blade_{}", index + 1))
                .with_transform(
                    LocalTransform::identity()
                        .rotate(*angle, Vec3::Z)
                        .translate(Vec3::new(0.0, dims.blade_length, 0.0)),
                )
                .with_primitive(Primitive::new(sphere(1.0)).scaled(blade_scale)),
        );
    }

    log::debug!(
        "Built zeppelin scene: {} parts, depth {}",
        scene.len(),
        scene.depth()
    );

    scene
}
