// =============================================================================
// picker/overlay.rs - Interface de l'overlay et boucle d'événements
// picker/overlay.rs - Overlay seam and event loop
// =============================================================================

use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::color::Rgb;

use super::layout::{ScreenPoint, Size};
use super::session::{ColorSource, PickerMode, PreviewState, Session};
use super::snapshot::DesktopSnapshot;

/// Événement d'entrée traduit depuis la plateforme
/// Input event translated from the platform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Refresh timer fired
    Tick,
    /// Primary button pressed at a screen point
    PrimaryDown(ScreenPoint),
    SecondaryDown,
    Escape,
    /// Enter or Space
    Confirm,
    /// Arrow key, already scaled by the Shift modifier
    Nudge { dx: i32, dy: i32 },
    /// Window closed from outside, or the message loop ended
    Closed,
}

/// Ce dont l'overlay a besoin pour se créer
/// What the overlay needs to create itself
#[derive(Clone, Debug)]
pub struct OverlaySetup {
    pub mode: PickerMode,
    pub screen: Size,
    pub preview_size: Size,
    pub tick_interval: Duration,
    pub border: u32,
    pub label_height: u32,
    /// Frozen desktop repainted under the overlay (snapshot mode only)
    pub backdrop: Option<Rc<DesktopSnapshot>>,
}

/// Surface plein écran qui capture l'entrée et affiche l'aperçu
/// Full-screen surface that captures input and shows the preview
pub trait Overlay {
    type Error: std::fmt::Display;

    /// Affiche l'overlay et démarre le timer de rafraîchissement
    /// Shows the overlay and starts the refresh timer
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Bloque jusqu'au prochain événement utile
    /// Blocks until the next relevant event
    fn next_event(&mut self) -> OverlayEvent;

    fn cursor_position(&self) -> Option<ScreenPoint>;

    /// Déplace le curseur système, renvoie la nouvelle position
    /// Moves the system cursor, returns the new position
    fn move_cursor(&mut self, dx: i32, dy: i32) -> Option<ScreenPoint>;

    fn present(&mut self, preview: &PreviewState);

    /// Arrête le timer. Doit précéder `dispose`.
    /// Stops the timer. Must come before `dispose`.
    fn stop_ticks(&mut self);

    /// Détruit les fenêtres ; l'overlay n'est plus utilisable ensuite
    /// Destroys the windows; the overlay cannot be used afterwards
    fn dispose(self);
}

/// Fait tourner une session jusqu'à validation ou annulation, puis ferme
/// l'overlay (timer d'abord, fenêtres ensuite)
/// Drives a session until commit or cancel, then closes the overlay (timer
/// first, windows second)
pub fn run_session<S, O>(mut session: Session<S>, mut overlay: O) -> Result<Option<Rgb>, O::Error>
where
    S: ColorSource,
    O: Overlay,
{
    session.start();
    if let Err(e) = overlay.show() {
        close(overlay);
        return Err(e);
    }

    // First frame without waiting for the timer
    refresh(&mut session, &mut overlay, None);

    while session.is_active() {
        match overlay.next_event() {
            OverlayEvent::Tick => refresh(&mut session, &mut overlay, None),
            OverlayEvent::Nudge { dx, dy } => {
                let moved = overlay.move_cursor(dx, dy);
                refresh(&mut session, &mut overlay, moved);
            }
            OverlayEvent::PrimaryDown(at) => {
                session.commit(at);
            }
            OverlayEvent::Confirm => match overlay.cursor_position() {
                Some(at) => {
                    session.commit(at);
                }
                None => debug!("Cursor position unavailable, confirm ignored"),
            },
            OverlayEvent::SecondaryDown | OverlayEvent::Escape | OverlayEvent::Closed => {
                session.cancel()
            }
        }
    }

    close(overlay);
    Ok(session.outcome())
}

fn refresh<S: ColorSource, O: Overlay>(
    session: &mut Session<S>,
    overlay: &mut O,
    at: Option<ScreenPoint>,
) {
    let Some(cursor) = at.or_else(|| overlay.cursor_position()) else {
        debug!("Cursor position unavailable, tick skipped");
        return;
    };
    if let Some(preview) = session.tick(cursor) {
        overlay.present(preview);
    }
}

fn close<O: Overlay>(mut overlay: O) {
    overlay.stop_ticks();
    overlay.dispose();
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use crate::picker::magnifier::Magnifier;
    use crate::picker::session::SnapshotSource;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Script {
        events: VecDeque<OverlayEvent>,
        cursor: ScreenPoint,
        presented: Vec<PreviewState>,
        log: Vec<&'static str>,
        fail_show: bool,
    }

    struct ScriptedOverlay<'a>(&'a mut Script);

    impl Overlay for ScriptedOverlay<'_> {
        type Error = &'static str;

        fn show(&mut self) -> Result<(), Self::Error> {
            self.0.log.push("show");
            if self.0.fail_show {
                Err("no window")
            } else {
                Ok(())
            }
        }

        fn next_event(&mut self) -> OverlayEvent {
            self.0.events.pop_front().unwrap_or(OverlayEvent::Closed)
        }

        fn cursor_position(&self) -> Option<ScreenPoint> {
            Some(self.0.cursor)
        }

        fn move_cursor(&mut self, dx: i32, dy: i32) -> Option<ScreenPoint> {
            self.0.cursor = self.0.cursor.offset(dx, dy);
            Some(self.0.cursor)
        }

        fn present(&mut self, preview: &PreviewState) {
            self.0.presented.push(preview.clone());
        }

        fn stop_ticks(&mut self) {
            self.0.log.push("stop_ticks");
        }

        fn dispose(self) {
            self.0.log.push("dispose");
        }
    }

    fn session() -> Session<SnapshotSource> {
        let screen = Size::new(64, 48);
        let snap = DesktopSnapshot::from_fn(
            screen,
            crate::picker::snapshot::PixelLayout::bgra_bottom_up(64),
            |x, y| Rgb::new(x as u8, y as u8, 0),
        )
        .unwrap();
        let source = SnapshotSource::new(Rc::new(snap), Magnifier::new(19, 8).unwrap());
        Session::new(source, screen, PickerConfig::default())
    }

    #[test]
    fn test_nudge_then_confirm() {
        let mut script = Script {
            events: VecDeque::from([OverlayEvent::Nudge { dx: 1, dy: 0 }, OverlayEvent::Confirm]),
            cursor: ScreenPoint::new(10, 10),
            ..Default::default()
        };
        let picked = run_session(session(), ScriptedOverlay(&mut script)).unwrap();

        assert_eq!(picked, Some(Rgb::new(11, 10, 0)));
        assert_eq!(script.presented.len(), 2);
        assert_eq!(script.presented[1].cursor, ScreenPoint::new(11, 10));
        assert_eq!(script.log, ["show", "stop_ticks", "dispose"]);
    }

    #[test]
    fn test_secondary_button_cancels() {
        let mut script = Script {
            events: VecDeque::from([
                OverlayEvent::Tick,
                OverlayEvent::SecondaryDown,
                OverlayEvent::PrimaryDown(ScreenPoint::ORIGIN),
            ]),
            ..Default::default()
        };
        assert_eq!(run_session(session(), ScriptedOverlay(&mut script)), Ok(None));
        // The click queued after cancel is never consumed
        assert_eq!(script.events.len(), 1);
    }

    #[test]
    fn test_show_failure_still_disposes() {
        let mut script = Script {
            fail_show: true,
            ..Default::default()
        };
        assert_eq!(run_session(session(), ScriptedOverlay(&mut script)), Err("no window"));
        assert_eq!(script.log, ["show", "stop_ticks", "dispose"]);
        assert!(script.presented.is_empty());
    }
}
