//! CPU-side drawable data.
//!
//! Meshes here are plain vertex/index arrays; the render module turns them
//! into GPU-resident objects.

mod wire_mesh;

pub use wire_mesh::WireMesh;
