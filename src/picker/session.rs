// =============================================================================
// picker/session.rs - Machine à états de l'eyedropper
// picker/session.rs - Eyedropper state machine
// =============================================================================
//
// Idle -> Active -> { Committed | Cancelled }
//
// La session ne connaît ni les fenêtres ni le timer : elle reçoit une
// position de curseur à chaque tick et produit un `PreviewState`. La source
// de couleur décide si l'on lit une capture figée ou l'écran en direct.
// The session knows nothing about windows or timers: it receives a cursor
// position on each tick and produces a `PreviewState`. The color source
// decides whether a frozen snapshot or the live screen is read.

use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use crate::color::Rgb;
use crate::config::{PickerConfig, LABEL_MIN_WIDTH};

use super::layout::{place_preview, ScreenPoint, Size};
use super::magnifier::{Magnified, Magnifier};
use super::snapshot::DesktopSnapshot;
use super::PixelProbe;

/// Chemin de capture utilisé par une session
/// Capture path used by a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerMode {
    /// Frozen full-desktop snapshot with a magnified preview
    Snapshot,
    /// Per-pixel queries against the live screen, swatch only
    Live,
}

/// Fournit la couleur (et éventuellement la loupe) en un point de l'écran
/// Supplies the color (and optionally the magnified view) at a screen point
pub trait ColorSource {
    fn mode(&self) -> PickerMode;

    /// Couleur du pixel écran `at`. Ne doit jamais échouer.
    /// Color of screen pixel `at`. Must never fail.
    fn sample(&self, at: ScreenPoint) -> Rgb;

    /// Vue agrandie autour de `at`, si la source en produit une
    /// Magnified view around `at`, when the source produces one
    fn preview(&self, at: ScreenPoint) -> Option<Magnified>;
}

// =============================================================================
// SOURCES
// =============================================================================

/// Source adossée à une capture figée du bureau
/// Source backed by a frozen desktop capture
pub struct SnapshotSource {
    snapshot: Rc<DesktopSnapshot>,
    magnifier: Magnifier,
}

impl SnapshotSource {
    pub fn new(snapshot: Rc<DesktopSnapshot>, magnifier: Magnifier) -> Self {
        Self { snapshot, magnifier }
    }
}

impl ColorSource for SnapshotSource {
    fn mode(&self) -> PickerMode {
        PickerMode::Snapshot
    }

    fn sample(&self, at: ScreenPoint) -> Rgb {
        self.snapshot.sample_at(self.snapshot.to_local(at))
    }

    fn preview(&self, at: ScreenPoint) -> Option<Magnified> {
        match self.magnifier.magnify(&self.snapshot, self.snapshot.to_local(at)) {
            Ok(view) => Some(view),
            Err(e) => {
                debug!(
                    x = at.x,
                    y = at.y,
                    error = %e,
                    "Magnification failed, no preview this tick"
                );
                None
            }
        }
    }
}

/// Source de secours : une requête pixel par échantillon
/// Fallback source: one pixel query per sample
pub struct LiveSource<P: PixelProbe> {
    probe: P,
}

impl<P: PixelProbe> LiveSource<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }
}

impl<P: PixelProbe> ColorSource for LiveSource<P> {
    fn mode(&self) -> PickerMode {
        PickerMode::Live
    }

    fn sample(&self, at: ScreenPoint) -> Rgb {
        self.probe.pixel_at(at).unwrap_or_else(|| {
            debug!(x = at.x, y = at.y, "Live pixel query failed, using neutral color");
            Rgb::NEUTRAL
        })
    }

    fn preview(&self, _at: ScreenPoint) -> Option<Magnified> {
        None
    }
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
    Committed(Rgb),
    Cancelled,
}

/// Tout ce que l'overlay doit dessiner pour un tick
/// Everything the overlay draws for one tick
#[derive(Clone, Debug)]
pub struct PreviewState {
    pub mode: PickerMode,
    pub cursor: ScreenPoint,
    pub color: Rgb,
    /// Absent in live mode and when magnification failed for this tick
    pub image: Option<Magnified>,
    /// "#RRGGBB\nRGB(r, g, b)"
    pub label: String,
    /// Top-left corner of the preview window on screen
    pub position: ScreenPoint,
    pub size: Size,
}

pub struct Session<S: ColorSource> {
    source: S,
    screen: Size,
    config: PickerConfig,
    state: SessionState,
    preview: Option<PreviewState>,
}

impl<S: ColorSource> Session<S> {
    pub fn new(source: S, screen: Size, config: PickerConfig) -> Self {
        Self {
            source,
            screen,
            config,
            state: SessionState::Idle,
            preview: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> PickerMode {
        self.source.mode()
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    #[inline]
    pub fn screen(&self) -> Size {
        self.screen
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Dernier aperçu calculé
    /// Most recently computed preview
    pub fn preview(&self) -> Option<&PreviewState> {
        self.preview.as_ref()
    }

    pub fn tick_interval(&self) -> Duration {
        match self.mode() {
            PickerMode::Snapshot => self.config.snapshot_tick(),
            PickerMode::Live => self.config.live_tick(),
        }
    }

    fn margin(&self) -> i32 {
        match self.mode() {
            PickerMode::Snapshot => self.config.snapshot_margin,
            PickerMode::Live => self.config.live_margin,
        }
    }

    /// Taille de la fenêtre d'aperçu : image (ou pastille) + cadre + étiquette
    /// Preview window size: image (or swatch) + frame + label
    pub fn preview_size(&self) -> Size {
        let c = &self.config;
        let frame = c.border.saturating_mul(2);
        match self.mode() {
            PickerMode::Snapshot => {
                let edge = c.magnified_edge().saturating_add(frame);
                Size::new(edge, edge.saturating_add(c.label_height))
            }
            PickerMode::Live => Size::new(
                c.swatch_width.saturating_add(frame).max(LABEL_MIN_WIDTH),
                c.swatch_height.saturating_add(frame).saturating_add(c.label_height),
            ),
        }
    }

    /// Idle -> Active
    pub fn start(&mut self) {
        if self.state == SessionState::Idle {
            info!(mode = ?self.mode(), "Eyedropper session started");
            self.state = SessionState::Active;
        }
    }

    /// Recalcule l'aperçu pour la position du curseur. Sans effet hors de
    /// l'état Active.
    /// Recomputes the preview for the cursor position. No-op outside the
    /// Active state.
    pub fn tick(&mut self, cursor: ScreenPoint) -> Option<&PreviewState> {
        if !self.is_active() {
            return None;
        }

        let color = self.source.sample(cursor);
        let image = self.source.preview(cursor);
        let size = self.preview_size();
        let position = place_preview(cursor, size, self.screen, self.margin());

        self.preview = Some(PreviewState {
            mode: self.mode(),
            cursor,
            color,
            image,
            label: color.preview_label(),
            position,
            size,
        });
        self.preview.as_ref()
    }

    /// Active -> Committed, avec un échantillon frais au point du clic
    /// Active -> Committed, with a fresh sample at the click point
    pub fn commit(&mut self, at: ScreenPoint) -> Option<Rgb> {
        if !self.is_active() {
            return None;
        }
        let color = self.source.sample(at);
        info!(color = %color, x = at.x, y = at.y, "Color picked");
        self.state = SessionState::Committed(color);
        Some(color)
    }

    /// Active -> Cancelled
    pub fn cancel(&mut self) {
        if self.is_active() {
            info!("Eyedropper cancelled");
            self.state = SessionState::Cancelled;
        }
    }

    /// Couleur choisie, `None` si annulée ou pas encore terminée
    /// Picked color, `None` when cancelled or not finished
    pub fn outcome(&self) -> Option<Rgb> {
        match self.state {
            SessionState::Committed(color) => Some(color),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::snapshot::PixelLayout;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    const SCREEN: Size = Size::new(1920, 1080);

    fn gradient_source() -> SnapshotSource {
        let layout = PixelLayout::bgra_bottom_up(SCREEN.width);
        let snap = DesktopSnapshot::from_fn(SCREEN, layout, |x, y| {
            Rgb::new((x % 256) as u8, (y % 256) as u8, 7)
        })
        .unwrap();
        let magnifier = Magnifier::from_config(&PickerConfig::default()).unwrap();
        SnapshotSource::new(Rc::new(snap), magnifier)
    }

    /// Sonde qui échoue une fois sur deux
    /// Probe that fails every other call
    struct FlakyProbe {
        calls: Cell<u32>,
    }

    impl PixelProbe for FlakyProbe {
        fn pixel_at(&self, at: ScreenPoint) -> Option<Rgb> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            (n % 2 == 0).then(|| Rgb::new(at.x as u8, at.y as u8, 0))
        }
    }

    #[test]
    fn test_tick_requires_active() {
        let mut session = Session::new(gradient_source(), SCREEN, PickerConfig::default());
        assert!(session.tick(ScreenPoint::new(10, 10)).is_none());
        assert_eq!(session.commit(ScreenPoint::new(10, 10)), None);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_snapshot_tick_builds_full_preview() {
        let mut session = Session::new(gradient_source(), SCREEN, PickerConfig::default());
        session.start();

        let preview = session.tick(ScreenPoint::new(300, 20)).unwrap();
        assert_eq!(preview.mode, PickerMode::Snapshot);
        assert_eq!(preview.color, Rgb::new(44, 20, 7));
        assert_eq!(preview.label, "#2C1407\nRGB(44, 20, 7)");
        assert_eq!(preview.size, Size::new(158, 198));
        assert_eq!(preview.position, ScreenPoint::new(330, 50));
        assert!(preview.image.is_some());
    }

    #[test]
    fn test_commit_samples_fresh_point() {
        let mut session = Session::new(gradient_source(), SCREEN, PickerConfig::default());
        session.start();
        session.tick(ScreenPoint::new(1, 1));

        assert_eq!(session.commit(ScreenPoint::new(5, 6)), Some(Rgb::new(5, 6, 7)));
        assert_eq!(session.outcome(), Some(Rgb::new(5, 6, 7)));
        // Terminal: later events change nothing
        session.cancel();
        assert!(session.tick(ScreenPoint::new(9, 9)).is_none());
        assert_eq!(session.state(), SessionState::Committed(Rgb::new(5, 6, 7)));
    }

    #[test]
    fn test_cancel_yields_none() {
        let mut session = Session::new(gradient_source(), SCREEN, PickerConfig::default());
        session.start();
        session.cancel();
        assert_eq!(session.state(), SessionState::Cancelled);
        assert_eq!(session.outcome(), None);
        assert_eq!(session.commit(ScreenPoint::ORIGIN), None);
    }

    #[test]
    fn test_live_source_falls_back_to_neutral() {
        let source = LiveSource::new(FlakyProbe { calls: Cell::new(0) });
        let mut session = Session::new(source, SCREEN, PickerConfig::default());
        session.start();

        assert_eq!(session.tick_interval(), Duration::from_millis(50));
        assert_eq!(session.tick(ScreenPoint::new(3, 4)).unwrap().color, Rgb::new(3, 4, 0));

        let preview = session.tick(ScreenPoint::new(3, 4)).unwrap();
        assert_eq!(preview.color, Rgb::NEUTRAL);
        assert_eq!(preview.label, "#808080\nRGB(128, 128, 128)");
        assert!(preview.image.is_none());
    }

    #[test]
    fn test_live_preview_geometry() {
        let source = LiveSource::new(FlakyProbe { calls: Cell::new(0) });
        let mut session = Session::new(source, SCREEN, PickerConfig::default());
        session.start();

        assert_eq!(session.preview_size(), Size::new(150, 96));
        let preview = session.tick(ScreenPoint::new(100, 100)).unwrap();
        assert_eq!(preview.position, ScreenPoint::new(120, 120));

        let preview = session.tick(ScreenPoint::new(1900, 1070)).unwrap();
        assert_eq!(preview.position, ScreenPoint::new(1900 - 150 - 20, 1070 - 96 - 20));
    }

    #[test]
    fn test_preview_size_saturates_on_unchecked_config() {
        let config = PickerConfig {
            magnification: 300_000_000,
            label_height: u32::MAX,
            ..Default::default()
        };
        let session = Session::new(gradient_source(), SCREEN, config);
        assert_eq!(session.preview_size(), Size::new(u32::MAX, u32::MAX));
    }

    #[test]
    fn test_failed_magnification_drops_image_only() {
        let tiny = DesktopSnapshot::solid(Size::new(8, 8), Rgb::new(1, 2, 3)).unwrap();
        let source = SnapshotSource::new(Rc::new(tiny), Magnifier::new(19, 8).unwrap());
        let mut session = Session::new(source, Size::new(8, 8), PickerConfig::default());
        session.start();

        let preview = session.tick(ScreenPoint::new(4, 4)).unwrap();
        assert!(preview.image.is_none());
        assert_eq!(preview.color, Rgb::new(1, 2, 3));
    }
}
