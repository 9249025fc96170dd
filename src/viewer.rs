//! On-screen display of a [`PixelBuffer`].
//!
//! The window's client area is exactly `width × height`, not resizable, and
//! shows the packed words as-is at the origin (the backend ignores the alpha
//! byte). Closing the window ends [`Viewer::wait_for_close`] / [`show`]; the
//! host process keeps running.
//!
//! The viewer borrows the buffer for its whole lifetime, so the buffer cannot
//! be mutated while it is on screen.
use crate::error::ViewerError;
use crate::image::{ImageView, PixelBuffer};
use log::info;
use minifb::{Window, WindowOptions};

pub const DEFAULT_TITLE: &str = "pixel_util";

/// Event polling rate while the window is idle.
const POLL_FPS: usize = 30;

pub struct Viewer<'a> {
    window: Window,
    buffer: &'a PixelBuffer,
}

impl<'a> Viewer<'a> {
    /// Open a window sized to `buffer`. Nothing is drawn until the first
    /// [`pump`](Self::pump).
    pub fn open(buffer: &'a PixelBuffer, title: &str) -> Result<Self, ViewerError> {
        let (width, height) = buffer.dimensions();
        if width == 0 || height == 0 {
            return Err(ViewerError::EmptyImage);
        }
        let options = WindowOptions {
            resize: false,
            ..WindowOptions::default()
        };
        let mut window = Window::new(title, width as usize, height as usize, options)?;
        window.set_target_fps(POLL_FPS);
        info!("Opened viewer {title:?} ({width}x{height})");
        Ok(Self { window, buffer })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Present the buffer and process pending window events.
    ///
    /// The frame is handed to the backend on every call so that covered or
    /// exposed regions are repainted. Returns whether the window is still open.
    pub fn pump(&mut self) -> Result<bool, ViewerError> {
        if !self.is_open() {
            return Ok(false);
        }
        let (words, width, height) = frame(self.buffer);
        self.window.update_with_buffer(words, width, height)?;
        Ok(self.is_open())
    }

    /// Block until the user closes the window.
    pub fn wait_for_close(mut self) -> Result<(), ViewerError> {
        while self.pump()? {}
        info!("Viewer closed");
        Ok(())
    }
}

/// The words and size handed to the backend for every redraw.
fn frame(buffer: &PixelBuffer) -> (&[u32], usize, usize) {
    let (width, height) = buffer.dimensions();
    (buffer.as_slice(), width as usize, height as usize)
}

/// Display `buffer` and return once its window has been closed.
pub fn show(buffer: &PixelBuffer) -> Result<(), ViewerError> {
    Viewer::open(buffer, DEFAULT_TITLE)?.wait_for_close()
}
