//! Transform math.
//!
//! Column-major 4x4 matrices plus the 3D vector support they need.
//! Storage matches both the classic OpenGL convention and WGSL
//! `mat4x4<f32>` memory layout, so matrices upload to uniform buffers as
//! raw bytes.

mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;
