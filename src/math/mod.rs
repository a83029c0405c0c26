pub mod transform_stack;

pub use transform_stack::TransformStack;
