//! Scene model: objects, the dynamic registry, static composition and the stage

mod composition;
mod object;
mod registry;
mod stage;

pub use composition::{ground_plane, AmbientLight, Fog, SceneComposition, SpotLight};
pub use object::{Geometry, Material, SceneObject, Shading, Transform};
pub use registry::{ObjectId, ObjectRegistry, ObjectSnapshot, SpawnArea};
pub use stage::{Bouncer, Stage};
