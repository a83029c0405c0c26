use id_arena::Id;

use crate::scene_graph::primitive::Primitive;
use crate::scene_graph::transform::LocalTransform;

pub type PartId = Id<PartNode>;

pub struct PartNode {
    pub name: String,
    pub transform: LocalTransform,
    pub primitive: Option<Primitive>,
    pub child_ids: Vec<PartId>,
}

impl PartNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: LocalTransform::identity(),
            primitive: None,
            child_ids: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: LocalTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitive = Some(primitive);
        self
    }
}
