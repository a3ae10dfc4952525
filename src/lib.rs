//! Transform math and scene state for small OpenGL-style viewers
//!
//! Everything here produces plain data (row-major matrices, vertex and
//! index buffers, RGBA texels) for a renderer to upload.

pub mod alg;
pub mod camera;
pub mod config;
pub mod error;
pub mod frame;
pub mod graphics;
pub mod input;
pub mod lighting;
pub mod mesh;
pub mod obj_loader;
pub mod texture;

pub use error::{Error, Result};
