use id_arena::Arena;

use crate::math::TransformStack;
use crate::render_surface::RenderSurface;
use crate::scene_graph::part::{PartId, PartNode};
use crate::world::AnimationState;

/// A fixed tree of parts stored in an arena.
///
/// Parts are only added while the scene is being built; there is no removal
/// or reparenting, so the tree keeps its shape for its whole lifetime.
pub struct Scene {
    parts: Arena<PartNode>,
    root_id: PartId,
}

impl Scene {
    pub fn new(root: PartNode) -> Self {
        let mut parts = Arena::new();
        let root_id = parts.alloc(root);
        Self { parts, root_id }
    }

    pub fn root_id(&self) -> PartId {
        self.root_id
    }

    /// Appends `part` as the last child of `parent_id`.
    pub fn add_child(&mut self, parent_id: PartId, part: PartNode) -> PartId {
        let part_id = self.parts.alloc(part);

        if let Some(parent) = self.parts.get_mut(parent_id) {
            parent.child_ids.push(part_id);
        }

        part_id
    }

    pub fn get_part(&self, id: PartId) -> Option<&PartNode> {
        self.parts.get(id)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Depth of the deepest part, counting the root as 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        self.traverse(
            &mut TransformStack::new(),
            &AnimationState::default(),
            &mut |_, depth, _| deepest = deepest.max(depth + 1),
        );
        deepest
    }

    /// Depth-first pre-order walk from the root.
    ///
    /// Each part's local transform is pushed before `visit` sees it and popped
    /// after all of its children have been visited. `visit` receives the part,
    /// its depth below the root and the stack positioned for that part.
    pub fn traverse<F>(&self, stack: &mut TransformStack, animation: &AnimationState, visit: &mut F)
    where
        F: FnMut(&PartNode, usize, &TransformStack),
    {
        self.traverse_part(self.root_id, stack, animation, 0, visit);
    }

    fn traverse_part<F>(
        &self,
        part_id: PartId,
        stack: &mut TransformStack,
        animation: &AnimationState,
        depth: usize,
        visit: &mut F,
    ) where
        F: FnMut(&PartNode, usize, &TransformStack),
    {
        let Some(part) = self.get_part(part_id) else {
            return;
        };

        let mut scope = stack.scope(part.transform.to_matrix(animation));
        visit(part, depth, &scope);

        for &child_id in &part.child_ids {
            self.traverse_part(child_id, &mut scope, animation, depth + 1, visit);
        }
    }

    /// Emits every primitive of the subtree rooted at `part_id`.
    pub fn render_part<S: RenderSurface>(
        &self,
        part_id: PartId,
        stack: &mut TransformStack,
        animation: &AnimationState,
        surface: &mut S,
    ) {
        self.traverse_part(part_id, stack, animation, 0, &mut |part, _, stack| {
            if let Some(primitive) = &part.primitive {
                primitive.emit(&mut *surface, &stack.current());
            }
        });
    }

    pub fn render<S: RenderSurface>(
        &self,
        stack: &mut TransformStack,
        animation: &AnimationState,
        surface: &mut S,
    ) {
        self.render_part(self.root_id, stack, animation, surface);
    }
}
