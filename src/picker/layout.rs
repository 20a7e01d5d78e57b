// =============================================================================
// picker/layout.rs - Géométrie écran et placement de l'aperçu
// picker/layout.rs - Screen geometry and preview placement
// =============================================================================

use serde::{Deserialize, Serialize};

/// Coordonnée de pixel en espace écran
/// Pixel coordinate in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const ORIGIN: ScreenPoint = ScreenPoint { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Largeur x hauteur en pixels (écran, aperçu, image)
/// Width x height in pixels (screen, preview, image)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// =============================================================================
// PLACEMENT
// =============================================================================

/// Place l'aperçu en bas à droite du curseur, décalé de `margin`.
/// Bascule de l'autre côté du curseur si l'aperçu dépasse le bord droit
/// ou le bord bas, puis contraint la position dans l'écran.
///
/// Places the preview below-right of the cursor, `margin` pixels away.
/// Flips to the other side of the cursor when the preview would pass the
/// right or bottom edge, then clamps the position into the screen.
pub fn place_preview(cursor: ScreenPoint, preview: Size, screen: Size, margin: i32) -> ScreenPoint {
    let x = flip_axis(cursor.x, preview.width, screen.width, margin);
    let y = flip_axis(cursor.y, preview.height, screen.height, margin);
    ScreenPoint::new(x, y)
}

fn flip_axis(cursor: i32, extent: u32, screen: u32, margin: i32) -> i32 {
    let extent = extent.min(i32::MAX as u32) as i32;
    let screen = screen.min(i32::MAX as u32) as i32;

    let mut pos = cursor.saturating_add(margin);
    if pos.saturating_add(extent) > screen {
        pos = cursor.saturating_sub(extent).saturating_sub(margin);
    }

    // Preview larger than the screen: pin it to the leading edge
    let max = (screen - extent).max(0);
    pos.clamp(0, max)
}

// =============================================================================
// TESTS
// =============================================================================
