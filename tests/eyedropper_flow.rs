//! End-to-end eyedropper sessions against scripted capture, probe and overlay.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::time::Duration;

use pretty_assertions::assert_eq;

use swatch_picker::error::{CaptureError, OverlayError};
use swatch_picker::picker::layout::{ScreenPoint, Size};
use swatch_picker::picker::overlay::{Overlay, OverlayEvent, OverlaySetup};
use swatch_picker::picker::session::{PickerMode, PreviewState};
use swatch_picker::picker::snapshot::{DesktopSnapshot, PixelLayout};
use swatch_picker::picker::{Eyedropper, PixelProbe, ScreenCapture};
use swatch_picker::{PickerConfig, Rgb};

const SCREEN: Size = Size::new(1920, 1080);
const FILL: Rgb = Rgb::new(10, 20, 30);

// =============================================================================
// FAKES
// =============================================================================

#[derive(Clone, Copy)]
enum Desktop {
    Solid(Rgb),
    Gradient,
    Broken,
}

fn gradient(x: u32, y: u32) -> Rgb {
    Rgb::new((x % 256) as u8, (y % 256) as u8, 99)
}

struct FakeCapture(Desktop);

impl ScreenCapture for FakeCapture {
    fn screen_size(&self) -> Option<Size> {
        Some(SCREEN)
    }

    fn capture(&self) -> Result<DesktopSnapshot, CaptureError> {
        match self.0 {
            Desktop::Solid(color) => DesktopSnapshot::solid(SCREEN, color),
            Desktop::Gradient => {
                let layout = PixelLayout::bgra_bottom_up(SCREEN.width);
                DesktopSnapshot::from_fn(SCREEN, layout, gradient)
            }
            Desktop::Broken => Err(CaptureError::ScreenDc),
        }
    }
}

/// Live screen showing FILL everywhere, counting queries
struct CountingProbe(Rc<Cell<u32>>);

impl PixelProbe for CountingProbe {
    fn pixel_at(&self, _at: ScreenPoint) -> Option<Rgb> {
        self.0.set(self.0.get() + 1);
        Some(FILL)
    }
}

#[derive(Default)]
struct Recorder {
    mode: Option<PickerMode>,
    tick: Option<Duration>,
    backdrop: Option<Weak<DesktopSnapshot>>,
    presented: Vec<PreviewState>,
    calls: Vec<&'static str>,
}

struct FakeOverlay {
    events: VecDeque<OverlayEvent>,
    cursor: ScreenPoint,
    log: Rc<RefCell<Recorder>>,
}

impl Overlay for FakeOverlay {
    type Error = OverlayError;

    fn show(&mut self) -> Result<(), OverlayError> {
        self.log.borrow_mut().calls.push("show");
        Ok(())
    }

    fn next_event(&mut self) -> OverlayEvent {
        self.events.pop_front().unwrap_or(OverlayEvent::Closed)
    }

    fn cursor_position(&self) -> Option<ScreenPoint> {
        Some(self.cursor)
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) -> Option<ScreenPoint> {
        self.cursor = self.cursor.offset(dx, dy);
        Some(self.cursor)
    }

    fn present(&mut self, preview: &PreviewState) {
        let mut log = self.log.borrow_mut();
        assert!(!log.calls.contains(&"dispose"), "presented after dispose");
        log.presented.push(preview.clone());
    }

    fn stop_ticks(&mut self) {
        self.log.borrow_mut().calls.push("stop_ticks");
    }

    fn dispose(self) {
        self.log.borrow_mut().calls.push("dispose");
    }
}

struct Outcome {
    picked: Option<Rgb>,
    log: Rc<RefCell<Recorder>>,
    probe_calls: u32,
}

fn run(desktop: Desktop, cursor: ScreenPoint, events: Vec<OverlayEvent>) -> Outcome {
    let log = Rc::new(RefCell::new(Recorder::default()));
    let probe_calls = Rc::new(Cell::new(0));

    let eyedropper = Eyedropper::new(
        FakeCapture(desktop),
        CountingProbe(Rc::clone(&probe_calls)),
        PickerConfig::default(),
    );
    let opener_log = Rc::clone(&log);
    let picked = eyedropper.pick(move |setup: &OverlaySetup| {
        {
            let mut rec = opener_log.borrow_mut();
            rec.mode = Some(setup.mode);
            rec.tick = Some(setup.tick_interval);
            rec.backdrop = setup.backdrop.as_ref().map(Rc::downgrade);
        }
        Ok::<_, OverlayError>(FakeOverlay {
            events: events.into(),
            cursor,
            log: opener_log,
        })
    });

    Outcome {
        picked,
        log,
        probe_calls: probe_calls.get(),
    }
}

// =============================================================================
// SNAPSHOT SESSIONS
// =============================================================================

#[test]
fn snapshot_sampling_clamps_far_outside_the_screen() {
    let snapshot = DesktopSnapshot::solid(SCREEN, FILL).unwrap();
    assert_eq!(snapshot.sample(5000, 5000), FILL);
}

#[test]
fn snapshot_click_picks_the_desktop_color() {
    let out = run(
        Desktop::Solid(FILL),
        ScreenPoint::new(5000, 5000),
        vec![OverlayEvent::Tick, OverlayEvent::PrimaryDown(ScreenPoint::new(100, 100))],
    );
    assert_eq!(out.picked, Some(FILL));

    let log = out.log.borrow();
    assert_eq!(log.mode, Some(PickerMode::Snapshot));
    assert_eq!(log.tick, Some(Duration::from_millis(16)));
    assert_eq!(log.presented.len(), 2);
    for preview in &log.presented {
        assert_eq!(preview.color, FILL);
        assert_eq!(preview.label, "#0A141E\nRGB(10, 20, 30)");
        let image = preview.image.as_ref().expect("magnified view");
        assert_eq!(image.image.dimensions(), (152, 152));
        let ScreenPoint { x, y } = preview.position;
        assert!(x >= 0 && x + preview.size.width as i32 <= 1920);
        assert!(y >= 0 && y + preview.size.height as i32 <= 1080);
    }
    assert_eq!(out.probe_calls, 0);
}

#[test]
fn escape_cancels_without_a_color() {
    let out = run(
        Desktop::Solid(FILL),
        ScreenPoint::new(400, 300),
        vec![OverlayEvent::Tick, OverlayEvent::Escape],
    );
    assert_eq!(out.picked, None);
    assert_eq!(out.log.borrow().calls, ["show", "stop_ticks", "dispose"]);
}

#[test]
fn commit_samples_the_click_point_not_the_last_tick() {
    let out = run(
        Desktop::Gradient,
        ScreenPoint::new(1, 1),
        vec![OverlayEvent::Tick, OverlayEvent::PrimaryDown(ScreenPoint::new(100, 300))],
    );
    assert_eq!(out.picked, Some(gradient(100, 300)));
    assert_eq!(out.log.borrow().presented.last().unwrap().color, gradient(1, 1));
}

#[test]
fn shift_nudge_then_enter() {
    let out = run(
        Desktop::Gradient,
        ScreenPoint::new(10, 10),
        vec![OverlayEvent::Nudge { dx: 50, dy: 0 }, OverlayEvent::Confirm],
    );
    assert_eq!(out.picked, Some(gradient(60, 10)));
}

#[test]
fn snapshot_is_released_when_the_session_ends() {
    let out = run(Desktop::Solid(FILL), ScreenPoint::ORIGIN, vec![OverlayEvent::Escape]);
    let log = out.log.borrow();
    let weak = log.backdrop.as_ref().expect("snapshot backdrop");
    assert!(weak.upgrade().is_none());
}

#[test]
fn ticks_stop_before_the_overlay_is_disposed() {
    // No scripted events: the overlay reports Closed
    let out = run(Desktop::Solid(FILL), ScreenPoint::new(5, 5), Vec::new());
    assert_eq!(out.picked, None);
    assert_eq!(out.log.borrow().calls, ["show", "stop_ticks", "dispose"]);
}

// =============================================================================
// FALLBACK SESSIONS
// =============================================================================

#[test]
fn capture_failure_routes_every_tick_through_live_queries() {
    let out = run(
        Desktop::Broken,
        ScreenPoint::new(300, 300),
        vec![OverlayEvent::Tick, OverlayEvent::Tick, OverlayEvent::Confirm],
    );
    assert_eq!(out.picked, Some(FILL));

    let log = out.log.borrow();
    assert_eq!(log.mode, Some(PickerMode::Live));
    assert_eq!(log.tick, Some(Duration::from_millis(50)));
    assert!(log.backdrop.is_none());
    assert_eq!(log.presented.len(), 3);
    assert!(log.presented.iter().all(|p| p.image.is_none() && p.mode == PickerMode::Live));
    assert_eq!(log.presented[0].position, ScreenPoint::new(320, 320));
    // Three ticks plus the commit
    assert_eq!(out.probe_calls, 4);
}

#[test]
fn overlay_creation_failure_returns_none() {
    let eyedropper = Eyedropper::new(
        FakeCapture(Desktop::Solid(FILL)),
        CountingProbe(Rc::new(Cell::new(0))),
        PickerConfig::default(),
    );
    let picked = eyedropper.pick(|_: &OverlaySetup| {
        Err::<FakeOverlay, _>(OverlayError::CreateWindow("denied".to_string()))
    });
    assert_eq!(picked, None);
}

/// Capture that records whether it was asked for a frame
struct WatchedCapture(Rc<Cell<bool>>);

impl ScreenCapture for WatchedCapture {
    fn screen_size(&self) -> Option<Size> {
        Some(SCREEN)
    }

    fn capture(&self) -> Result<DesktopSnapshot, CaptureError> {
        self.0.set(true);
        DesktopSnapshot::solid(SCREEN, FILL)
    }
}

#[test]
fn oversized_config_is_rejected_before_capture() {
    let captured = Rc::new(Cell::new(false));
    let opened = Cell::new(false);
    let config = PickerConfig {
        magnification: 300_000_000,
        ..Default::default()
    };

    let eyedropper = Eyedropper::new(
        WatchedCapture(Rc::clone(&captured)),
        CountingProbe(Rc::new(Cell::new(0))),
        config,
    );
    let picked = eyedropper.pick(|_: &OverlaySetup| {
        opened.set(true);
        Err::<FakeOverlay, _>(OverlayError::Unsupported)
    });

    assert_eq!(picked, None);
    assert!(!captured.get());
    assert!(!opened.get());
}
