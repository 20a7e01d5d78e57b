// =============================================================================
// picker/mod.rs - Screen eyedropper module
// =============================================================================

/// Géométrie écran et placement de l'aperçu
/// Screen geometry and preview placement
pub mod layout;

/// Capture figée et échantillonneur
/// Frozen capture and sampler
pub mod snapshot;

pub mod magnifier;

/// Machine à états et sources de couleur
/// State machine and color sources
pub mod session;

/// Interface de l'overlay et boucle d'événements
/// Overlay seam and event loop
pub mod overlay;

/// Implémentation Windows (GDI)
/// Windows implementation (GDI)
#[cfg(target_os = "windows")]
pub mod windows;

/// Autres plateformes (non implémentées)
/// Other platforms (not implemented)
#[cfg(not(target_os = "windows"))]
pub mod unsupported;

use std::rc::Rc;

use tracing::{error, info, warn};

use crate::color::Rgb;
use crate::config::PickerConfig;
use crate::error::CaptureError;

use self::layout::{ScreenPoint, Size};
use self::magnifier::Magnifier;
use self::overlay::{run_session, Overlay, OverlaySetup};
use self::session::{ColorSource, LiveSource, Session, SnapshotSource};
use self::snapshot::DesktopSnapshot;

// =============================================================================
// SEAMS PLATEFORME
// PLATFORM SEAMS
// =============================================================================

/// Capture du framebuffer de l'écran principal
/// Primary display framebuffer capture
pub trait ScreenCapture {
    /// Résolution native de l'écran principal
    /// Native resolution of the primary display
    fn screen_size(&self) -> Option<Size>;

    fn capture(&self) -> Result<DesktopSnapshot, CaptureError>;
}

/// Requête d'un seul pixel sur l'écran en direct
/// Single-pixel query against the live screen
pub trait PixelProbe {
    fn pixel_at(&self, at: ScreenPoint) -> Option<Rgb>;
}

// =============================================================================
// EYEDROPPER
// =============================================================================

/// Assemble capture, sonde et overlay pour une session de sélection
/// Wires capture, probe and overlay together for one picking session
pub struct Eyedropper<C, P> {
    capture: C,
    probe: P,
    config: PickerConfig,
}

impl<C: ScreenCapture, P: PixelProbe> Eyedropper<C, P> {
    pub fn new(capture: C, probe: P, config: PickerConfig) -> Self {
        Self { capture, probe, config }
    }

    /// Capture l'écran puis lance la session ; bascule sur la sonde en
    /// direct si la capture échoue. `open` crée l'overlay de la plateforme.
    /// Captures the screen then runs the session; falls back to the live
    /// probe when the capture fails. `open` creates the platform overlay.
    ///
    /// # Returns
    /// `Some(color)` si validé, `None` si annulé ou si aucun overlay n'a pu
    /// être créé / `Some(color)` when committed, `None` when cancelled or
    /// when no overlay could be created. Une configuration invalide est
    /// refusée avant la capture / An invalid configuration is rejected
    /// before the capture.
    pub fn pick<O, F>(self, open: F) -> Option<Rgb>
    where
        O: Overlay,
        F: FnOnce(&OverlaySetup) -> Result<O, O::Error>,
    {
        let Eyedropper { capture, probe, config } = self;

        if let Err(e) = config.validate() {
            error!(error = %e, "Invalid eyedropper configuration");
            return None;
        }

        let frozen = match (capture.capture(), Magnifier::from_config(&config)) {
            (Ok(snapshot), Ok(magnifier)) => Some((snapshot, magnifier)),
            (Err(e), _) => {
                warn!(error = %e, "Screen capture failed, falling back to live pixel queries");
                None
            }
            (Ok(_), Err(e)) => {
                warn!(error = %e, "Magnifier unavailable, falling back to live pixel queries");
                None
            }
        };

        if let Some((snapshot, magnifier)) = frozen {
            info!(width = snapshot.width(), height = snapshot.height(), "Desktop captured");
            let screen = snapshot.size();
            let snapshot = Rc::new(snapshot);
            let source = SnapshotSource::new(Rc::clone(&snapshot), magnifier);
            return drive(Session::new(source, screen, config), Some(snapshot), open);
        }

        let Some(screen) = capture.screen_size().filter(|s| !s.is_empty()) else {
            error!("Screen size unavailable, eyedropper aborted");
            return None;
        };
        drive(Session::new(LiveSource::new(probe), screen, config), None, open)
    }
}

fn drive<S, O, F>(
    session: Session<S>,
    backdrop: Option<Rc<DesktopSnapshot>>,
    open: F,
) -> Option<Rgb>
where
    S: ColorSource,
    O: Overlay,
    F: FnOnce(&OverlaySetup) -> Result<O, O::Error>,
{
    let setup = OverlaySetup {
        mode: session.mode(),
        screen: session.screen(),
        preview_size: session.preview_size(),
        tick_interval: session.tick_interval(),
        border: session.config().border,
        label_height: session.config().label_height,
        backdrop,
    };

    let overlay = match open(&setup) {
        Ok(overlay) => overlay,
        Err(e) => {
            error!(error = %e, "Could not create the eyedropper overlay");
            return None;
        }
    };
    // The overlay keeps its own handle on the backdrop
    drop(setup);

    match run_session(session, overlay) {
        Ok(picked) => picked,
        Err(e) => {
            error!(error = %e, "Eyedropper overlay failed to start");
            None
        }
    }
}

// =============================================================================
// FONCTION PUBLIQUE
// PUBLIC FUNCTION
// =============================================================================

/// Lance l'eyedropper natif selon la plateforme
/// Launches the native eyedropper based on the platform
pub fn run(config: &PickerConfig) -> Option<Rgb> {
    #[cfg(target_os = "windows")]
    {
        windows::pick(config)
    }

    #[cfg(not(target_os = "windows"))]
    {
        unsupported::pick(config)
    }
}
