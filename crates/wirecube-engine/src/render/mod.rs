//! GPU rendering subsystem.
//!
//! The wire renderer consumes [`scene`] meshes and issues GPU commands via
//! wgpu, owning its own resources (pipeline, buffers).
//!
//! Convention:
//! - CPU geometry is in world units.
//! - The vertex shader applies one combined clip-space transform from a
//!   uniform; the host recomputes it per frame.
//!
//! [`scene`]: crate::scene

mod ctx;
mod wire;

pub use ctx::{RenderCtx, RenderTarget, Viewport};
pub use wire::{WireObject, WireRenderer};
