//! # Host Window
//!
//! Bridges the core window sizing policy to the native desktop window.

use buddy_core::{HostWindow, Point, WindowSize};
use dioxus::desktop::{DesktopContext, LogicalSize};

/// The Dioxus desktop window as a [`HostWindow`].
#[derive(Clone)]
pub struct DesktopHost {
    context: DesktopContext,
}

impl DesktopHost {
    /// Wraps the current desktop window.
    pub fn new(context: DesktopContext) -> Self {
        Self { context }
    }

    /// Display scale factor of the monitor the window is on.
    pub fn scale_factor(&self) -> f64 {
        self.context.window.scale_factor()
    }

    /// Current inner size in logical pixels.
    pub fn inner_size(&self) -> WindowSize {
        let size = self
            .context
            .window
            .inner_size()
            .to_logical::<f64>(self.scale_factor());
        WindowSize {
            width: size.width,
            height: size.height,
        }
    }

    /// Current inner size as a viewport for positioning chat windows.
    pub fn viewport(&self) -> Point {
        let size = self.inner_size();
        Point::new(size.width, size.height)
    }
}

impl HostWindow for DesktopHost {
    fn set_content_size(&self, width: f64, height: f64) -> Result<(), String> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(format!("invalid window size {width}x{height}"));
        }
        self.context
            .window
            .set_inner_size(LogicalSize::new(width, height));
        Ok(())
    }
}
