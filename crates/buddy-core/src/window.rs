//! Host window sizing.
//!
//! The app window is held at a fixed content size. The size is applied
//! once at startup and re-applied on every resize event the host
//! reports, which in practice locks the window to that size.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::{BuddyError, Result};

/// Ideal content width in logical pixels.
pub const IDEAL_CONTENT_WIDTH: f64 = 400.0;

/// Ideal content height in logical pixels.
pub const IDEAL_CONTENT_HEIGHT: f64 = 600.0;

/// The native window the shell runs in.
pub trait HostWindow {
    /// Requests a content size in logical pixels.
    ///
    /// # Errors
    ///
    /// Returns a description of why the host refused.
    fn set_content_size(&self, width: f64, height: f64) -> std::result::Result<(), String>;
}

/// A size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: IDEAL_CONTENT_WIDTH,
            height: IDEAL_CONTENT_HEIGHT,
        }
    }
}

/// Applies the fixed content size to a [`HostWindow`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowSizer {
    ideal: WindowSize,
}

impl WindowSizer {
    /// A sizer targeting `ideal`.
    pub fn new(ideal: WindowSize) -> Self {
        Self { ideal }
    }

    /// The target size.
    pub fn ideal(&self) -> WindowSize {
        self.ideal
    }

    /// Absolute deviation of `current` from the target size.
    pub fn deviation(&self, current: WindowSize) -> WindowSize {
        WindowSize {
            width: (current.width - self.ideal.width).abs(),
            height: (current.height - self.ideal.height).abs(),
        }
    }

    /// Asks the host to apply the target size.
    ///
    /// # Errors
    ///
    /// Returns [`BuddyError::HostCommandFailed`]. The failure is also
    /// logged; callers may ignore it and carry on unsized.
    pub fn adjust(&self, host: &dyn HostWindow) -> Result<()> {
        match host.set_content_size(self.ideal.width, self.ideal.height) {
            Ok(()) => {
                info!(
                    width = self.ideal.width,
                    height = self.ideal.height,
                    "Window size adjusted to content dimensions"
                );
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to resize window");
                Err(BuddyError::HostCommandFailed(e))
            }
        }
    }

    /// Handles a host resize event.
    ///
    /// Logs the reported size against the target and re-applies the
    /// target size regardless of how far it deviates.
    ///
    /// # Errors
    ///
    /// Same as [`WindowSizer::adjust`].
    pub fn on_resized(&self, host: &dyn HostWindow, current: WindowSize) -> Result<()> {
        let diff = self.deviation(current);
        debug!(
            current_width = current.width,
            current_height = current.height,
            ideal_width = self.ideal.width,
            ideal_height = self.ideal.height,
            diff_width = diff.width,
            diff_height = diff.height,
            "Window resized"
        );
        self.adjust(host)
    }

    /// Logs the display scale factor and passes it through.
    pub fn log_scale_factor(&self, factor: f64) -> f64 {
        info!(factor, "Display scaling factor");
        factor
    }
}
