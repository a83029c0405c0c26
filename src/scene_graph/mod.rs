pub mod part;
pub mod primitive;
pub mod scene;
pub mod transform;

pub use part::PartNode;
pub use primitive::{Primitive, Shape};
pub use scene::Scene;
pub use transform::LocalTransform;
