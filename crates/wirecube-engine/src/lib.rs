//! Wirecube engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the viewer binary:
//! the window/event loop, wgpu device plumbing, the wireframe renderer,
//! and the column-major matrix math fed to the vertex shader.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod math;
pub mod camera;
pub mod scene;
pub mod render;
