mod scene;

pub use scene::{Badge, ItemView, Scene, project};
