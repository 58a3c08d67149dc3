//! Core components for the OpenGL side of the demo: application setup,
//! shader management and mesh handling.

pub mod app;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use mesh::*;
pub use shader::*;
