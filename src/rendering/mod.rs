//! # Rendering Support Module
//!
//! The engine core does not own a rendering backend; this module holds
//! the two pieces the backend consumes: texture-atlas UV bookkeeping
//! for the mesher and the view-frustum culler for the render step.

pub mod atlas;
pub mod frustum;

pub use atlas::TextureAtlas;
pub use frustum::Frustum;
