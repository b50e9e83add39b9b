use std::{sync::Arc, time::Duration};

use pixels::{wgpu::TextureFormat, Pixels, PixelsBuilder, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

use super::{frame::RenderFrame, pacer::FramePacer};

pub(super) struct GolWindow {
    config: WindowConfig,
    resumed_window: Option<ResumedWindow>,
    pacer: FramePacer,
}

pub(super) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl GolWindow {
    pub fn new(config: WindowConfig) -> Self {
        let pacer = {
            let target_frame_time = Duration::from_micros(1_000_000 / config.target_fps);
            FramePacer::new(target_frame_time)
        };

        Self {
            config,
            resumed_window: None,
            pacer,
        }
    }
}

impl ApplicationHandler for GolWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width as f64, self.config.height as f64);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .expect("Creating window")
        });

        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(window_size.width, window_size.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .expect("Creating pixels buffer")
        };

        window.request_redraw();

        self.resumed_window = Some(ResumedWindow { window, pixels });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        // Winit delivers window events only after resumed() ran.
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                let PhysicalSize { width, height } = window.inner_size();

                let next_frame = RenderFrame {
                    width,
                    height,
                    buffer: pixels.frame_mut(),
                };

                (self.config.draw_callback)(next_frame);

                pixels.render().expect("Rendering with pixels");

                // Throttle the redraw loop to the target frame rate before
                // asking for the next frame.
                self.pacer.pace();
                window.request_redraw();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                pixels
                    .resize_surface(width, height)
                    .expect("Resizing surface");
                pixels
                    .resize_buffer(width, height)
                    .expect("Resizing buffer");
                window.request_redraw();
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            _ => {}
        }
    }
}
