mod color;
mod ray;

pub use color::{to_rgba8, Color};
pub use ray::{box_normal, intersect_aabb, intersect_sphere};
