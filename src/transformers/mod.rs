/*! Record transformers.

Transforms records by rewriting their content.

!*/

mod normalize;
mod transform;

pub use normalize::{normalize, Normalizer};
pub use transform::Transform;
