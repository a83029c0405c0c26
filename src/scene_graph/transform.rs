use glam::{Mat4, Vec3};

use crate::world::AnimationState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translate(Vec3),
    /// Rotation by a fixed angle (degrees) about a unit axis.
    Rotate { degrees: f32, axis: Vec3 },
    Scale(Vec3),
    /// Rotation about a unit axis by the propeller spin angle of the frame.
    Spin { axis: Vec3 },
}

impl TransformOp {
    pub fn to_matrix(&self, animation: &AnimationState) -> Mat4 {
        match *self {
            TransformOp::Translate(translation) => Mat4::from_translation(translation),
            TransformOp::Rotate { degrees, axis } => {
                Mat4::from_axis_angle(axis, degrees.to_radians())
            }
            TransformOp::Scale(scale) => Mat4::from_scale(scale),
            TransformOp::Spin { axis } => {
                Mat4::from_axis_angle(axis, animation.spin_degrees().to_radians())
            }
        }
    }
}

/// Ordered list of operations placing a part in its parent's frame.
///
/// Operations compose left to right the way nested calls on a matrix stack
/// do: the first op is outermost, the last one is applied to the geometry
/// first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalTransform {
    ops: Vec<TransformOp>,
}

impl LocalTransform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn translate(mut self, translation: Vec3) -> Self {
        self.ops.push(TransformOp::Translate(translation));
        self
    }

    pub fn rotate(mut self, degrees: f32, axis: Vec3) -> Self {
        self.ops.push(TransformOp::Rotate {
            degrees,
            axis: axis.normalize(),
        });
        self
    }

    #[allow(dead_code)]
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.ops.push(TransformOp::Scale(scale));
        self
    }

    pub fn spin(mut self, axis: Vec3) -> Self {
        self.ops.push(TransformOp::Spin {
            axis: axis.normalize(),
        });
        self
    }

    pub fn is_animated(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, TransformOp::Spin { .. }))
    }

    pub fn to_matrix(&self, animation: &AnimationState) -> Mat4 {
        self.ops
            .iter()
            .fold(Mat4::IDENTITY, |matrix, op| matrix * op.to_matrix(animation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_no_ops() {
        let transform = LocalTransform::identity();
        assert!(transform.ops.is_empty());
        assert!(!transform.is_animated());
        assert_eq!(
            transform.to_matrix(&AnimationState::default()),
            Mat4::IDENTITY
        );
    }

    #[test]
    fn ops_apply_in_nested_order() {
        // Translate, then rotate: the rotation happens about the translated origin.
        let transform = LocalTransform::identity()
            .translate(Vec3::new(0.0, 0.0, 5.0))
            .rotate(90.0, Vec3::Z);
        let matrix = transform.to_matrix(&AnimationState::default());

        let point = matrix.transform_point3(Vec3::X);
        assert!(point.abs_diff_eq(Vec3::new(0.0, 1.0, 5.0), 1e-5));
    }

    #[test]
    fn scale_is_applied_to_geometry_first() {
        let transform = LocalTransform::identity()
            .translate(Vec3::X)
            .scale(Vec3::new(2.0, 3.0, 4.0));
        let matrix = transform.to_matrix(&AnimationState::default());

        let point = matrix.transform_point3(Vec3::ONE);
        assert!(point.abs_diff_eq(Vec3::new(3.0, 3.0, 4.0), 1e-5));
    }

    #[test]
    fn spin_reads_the_animation_angle() {
        let transform = LocalTransform::identity().spin(Vec3::Z);
        assert!(transform.is_animated());

        let mut animation = AnimationState::default();
        animation.advance_spin(90.0);

        let point = transform.to_matrix(&animation).transform_point3(Vec3::X);
        assert!(point.abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn rotation_axis_is_normalized() {
        let transform = LocalTransform::identity().rotate(180.0, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(
            transform.ops[0],
            TransformOp::Rotate {
                degrees: 180.0,
                axis: Vec3::Y
            }
        );
    }
}
