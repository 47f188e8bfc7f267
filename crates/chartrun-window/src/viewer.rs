// File: crates/chartrun-window/src/viewer.rs
// Summary: Blocking chart viewer: one window per chart, one event loop per process.

use std::num::NonZeroU32;

use chartrun_core::{Presenter, RgbaFrame};
use tracing::debug;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

use crate::blit::blit_scaled;
use crate::error::WindowError;

/// Shows each frame in its own window and returns once that window is closed
/// (close button, Escape or Q). The event loop is created once and reused.
pub struct Viewer {
    event_loop: EventLoop<()>,
}

impl Viewer {
    /// Must be called on the main thread; winit aborts without a display server.
    pub fn new() -> Self {
        Self { event_loop: EventLoop::new() }
    }

    pub fn show(&mut self, frame: &RgbaFrame, title: &str) -> Result<(), WindowError> {
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(frame.width, frame.height))
            .build(&self.event_loop)?;
        let context = unsafe { softbuffer::Context::new(&window) }?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }?;
        debug!(title, "window opened");

        let id = window.id();
        let mut failure = None;
        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { window_id, event } if window_id == id => match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape | VirtualKeyCode::Q),
                                ..
                            },
                        ..
                    } => *control_flow = ControlFlow::Exit,
                    WindowEvent::Resized(_) => window.request_redraw(),
                    _ => {}
                },
                Event::RedrawRequested(window_id) if window_id == id => {
                    if let Err(e) = redraw(&mut surface, &window, frame) {
                        failure = Some(e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });
        drop(surface);
        drop(window);
        debug!(title, "window closed");
        failure.map_or(Ok(()), Err)
    }
}

impl Default for Viewer {
    fn default() -> Self { Self::new() }
}

impl Presenter for Viewer {
    fn present(&mut self, frame: &RgbaFrame, title: &str) -> chartrun_core::Result<()> {
        Ok(self.show(frame, title)?)
    }
}

fn redraw(surface: &mut softbuffer::Surface, window: &Window, frame: &RgbaFrame) -> Result<(), WindowError> {
    let size = window.inner_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h)?;
    let mut buffer = surface.buffer_mut()?;
    blit_scaled(&mut buffer, size.width, size.height, frame);
    buffer.present()?;
    Ok(())
}
