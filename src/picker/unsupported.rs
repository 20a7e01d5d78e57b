//! Eyedropper on platforms without a native backend
//!
//! Capture and overlay creation both report `Unsupported`, so `pick` logs the
//! failure and returns `None`, the same outcome as a cancelled pick.

use crate::color::Rgb;
use crate::config::PickerConfig;
use crate::error::{CaptureError, OverlayError};

use super::layout::{ScreenPoint, Size};
use super::overlay::{Overlay, OverlayEvent, OverlaySetup};
use super::session::PreviewState;
use super::snapshot::DesktopSnapshot;
use super::{Eyedropper, PixelProbe, ScreenCapture};

pub struct NoCapture;

impl ScreenCapture for NoCapture {
    fn screen_size(&self) -> Option<Size> {
        None
    }

    fn capture(&self) -> Result<DesktopSnapshot, CaptureError> {
        Err(CaptureError::Unsupported)
    }
}

pub struct NoProbe;

impl PixelProbe for NoProbe {
    fn pixel_at(&self, _at: ScreenPoint) -> Option<Rgb> {
        None
    }
}

/// Overlay that can never be opened
pub enum NoOverlay {}

impl NoOverlay {
    pub fn open(_setup: &OverlaySetup) -> Result<Self, OverlayError> {
        Err(OverlayError::Unsupported)
    }
}

impl Overlay for NoOverlay {
    type Error = OverlayError;

    fn show(&mut self) -> Result<(), OverlayError> {
        match *self {}
    }

    fn next_event(&mut self) -> OverlayEvent {
        match *self {}
    }

    fn cursor_position(&self) -> Option<ScreenPoint> {
        match *self {}
    }

    fn move_cursor(&mut self, _dx: i32, _dy: i32) -> Option<ScreenPoint> {
        match *self {}
    }

    fn present(&mut self, _preview: &PreviewState) {
        match *self {}
    }

    fn stop_ticks(&mut self) {
        match *self {}
    }

    fn dispose(self) {
        match self {}
    }
}

pub fn pick(config: &PickerConfig) -> Option<Rgb> {
    Eyedropper::new(NoCapture, NoProbe, config.clone()).pick(NoOverlay::open)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_returns_none() {
        assert_eq!(pick(&PickerConfig::default()), None);
    }
}
