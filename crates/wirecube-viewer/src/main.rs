//! Wireframe cube viewer.
//!
//! A fixed camera looks at a cube drawn as 12 line segments. The view
//! matrix is computed once per session; the projection is rebuilt every
//! frame from the live window aspect ratio, so resizing keeps the cube
//! undistorted.

use anyhow::Result;

use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use wirecube_engine::camera::Camera;
use wirecube_engine::core::{App, AppControl, FrameCtx};
use wirecube_engine::device::GpuInit;
use wirecube_engine::logging::{LoggingConfig, init_logging};
use wirecube_engine::math::{Mat4, Vec3};
use wirecube_engine::render::{WireObject, WireRenderer};
use wirecube_engine::scene::WireMesh;
use wirecube_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

const LINE_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

/// Frames between frame-time log lines.
const LOG_INTERVAL: u64 = 600;

struct Viewer {
    camera: Camera,

    /// Computed once; the camera does not move during the session.
    view: Mat4,

    mesh: WireMesh,
    renderer: WireRenderer,

    /// GPU-resident cube, uploaded on the first frame.
    object: Option<WireObject>,
}

impl Viewer {
    fn new(camera: Camera) -> Self {
        Self {
            view: camera.view_matrix(),
            camera,
            mesh: WireMesh::cube(0.9),
            renderer: WireRenderer::new(),
            object: None,
        }
    }
}

impl App for Viewer {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } = event
        {
            return AppControl::Exit;
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let aspect = ctx.window.aspect_ratio();
        let combined = self.camera.projection_matrix(aspect) * self.view;

        if ctx.time.frame_index % LOG_INTERVAL == 0 {
            log::debug!(
                "frame {}: dt {:.2} ms, aspect {:.3}",
                ctx.time.frame_index,
                ctx.time.dt * 1000.0,
                aspect,
            );
        }

        let Viewer {
            mesh,
            renderer,
            object,
            ..
        } = self;

        ctx.render(CLEAR_COLOR, |rctx, target| {
            let object = object.get_or_insert_with(|| renderer.upload(rctx, mesh));
            renderer.render(rctx, target, object, combined, LINE_COLOR);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let camera = Camera {
        eye: Vec3::new(3.0, 4.0, 5.0),
        target: Vec3::zero(),
        up: Vec3::new(0.0, 1.0, 0.0),
        fovy: 0.5,
        z_near: 1.0,
        z_far: 15.0,
    };

    Runtime::run(
        RuntimeConfig {
            title: "wirecube".to_string(),
            initial_size: LogicalSize::new(960.0, 720.0),
        },
        GpuInit::default(),
        Viewer::new(camera),
    )
}
