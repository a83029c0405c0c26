use std::ops::{Deref, DerefMut};

use glam::Mat4;

/// LIFO stack of composed model matrices.
///
/// The bottom entry is always the identity and can never be popped, so
/// `current()` is defined at every point of a traversal.
#[derive(Debug, Clone)]
pub struct TransformStack {
    stack: Vec<Mat4>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut stack = Vec::with_capacity(capacity.max(1));
        stack.push(Mat4::IDENTITY);
        Self { stack }
    }

    /// Composes `transform` onto the current top and pushes the result.
    ///
    /// The new matrix is `current * transform`, so `transform` is expressed
    /// in the local frame of whatever is already on the stack.
    pub fn push(&mut self, transform: Mat4) {
        let top = self.current();
        self.stack.push(top * transform);
    }

    /// Discards the top matrix. Returns `None` when only the base remains.
    pub fn pop(&mut self) -> Option<Mat4> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> Mat4 {
        self.stack[self.stack.len() - 1]
    }

    /// Number of entries pushed on top of the identity base.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    pub fn reset(&mut self) {
        self.stack.truncate(1);
    }

    /// Pushes `transform` and returns a guard that restores the stack when
    /// dropped, whichever way the enclosing scope is left.
    pub fn scope(&mut self, transform: Mat4) -> TransformScope<'_> {
        let restore_len = self.stack.len();
        self.push(transform);
        TransformScope {
            stack: self,
            restore_len,
        }
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TransformScope<'a> {
    stack: &'a mut TransformStack,
    restore_len: usize,
}

impl Deref for TransformScope<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &Self::Target {
        self.stack
    }
}

impl DerefMut for TransformScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stack
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        while self.stack.stack.len() > self.restore_len {
            self.stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec3, Vec4Swizzles};

    use super::*;

    #[test]
    fn starts_at_identity() {
        let stack = TransformStack::new();
        assert_eq!(stack.current(), Mat4::IDENTITY);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn push_right_multiplies_in_local_frame() {
        let mut stack = TransformStack::new();
        stack.push(Mat4::from_translation(Vec3::X * 2.0));
        stack.push(Mat4::from_rotation_y(90f32.to_radians()));
        stack.push(Mat4::from_translation(Vec3::X));

        // The last translation runs along the rotated X axis, which is world -Z.
        let origin = stack.current().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(2.0, 0.0, -1.0), 1e-5));
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn matched_push_pop_restores_current() {
        let mut stack = TransformStack::new();
        stack.push(Mat4::from_scale(Vec3::splat(3.0)));
        let before = stack.current();

        stack.push(Mat4::from_rotation_z(1.0));
        stack.push(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        stack.pop();
        stack.push(Mat4::from_rotation_x(0.5));
        stack.pop();
        stack.pop();

        assert_eq!(stack.current(), before);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn base_entry_cannot_be_popped() {
        let mut stack = TransformStack::new();
        assert!(stack.pop().is_none());
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn scope_pops_on_early_return() {
        fn place(stack: &mut TransformStack, bail: bool) -> Option<Vec3> {
            let scope = stack.scope(Mat4::from_translation(Vec3::Y));
            if bail {
                return None;
            }
            Some(scope.current().w_axis.xyz())
        }

        let mut stack = TransformStack::new();
        assert_eq!(place(&mut stack, true), None);
        assert_eq!(stack.depth(), 0);
        assert_eq!(place(&mut stack, false), Some(Vec3::Y));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        let mut stack = TransformStack::new();
        {
            let mut outer = stack.scope(Mat4::from_translation(Vec3::X));
            {
                let inner = outer.scope(Mat4::from_translation(Vec3::X));
                assert_eq!(inner.depth(), 2);
                assert_eq!(inner.current().w_axis.xyz(), Vec3::new(2.0, 0.0, 0.0));
            }
            assert_eq!(outer.depth(), 1);
            // Unbalanced pushes inside a scope are discarded with it.
            outer.push(Mat4::IDENTITY);
        }
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut stack = TransformStack::new();
        stack.push(Mat4::from_scale(Vec3::splat(2.0)));
        stack.push(Mat4::from_scale(Vec3::splat(2.0)));
        stack.reset();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }
}
