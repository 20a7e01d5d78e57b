// =============================================================================
// picker/magnifier.rs - Loupe au plus proche voisin
// picker/magnifier.rs - Nearest-neighbor magnifier
// =============================================================================

use image::{Rgb as Pixel, RgbImage};

use crate::config::{PickerConfig, MAX_CAPTURE_SIZE, MAX_MAGNIFICATION};
use crate::error::MagnifyError;

use super::layout::{ScreenPoint, Size};
use super::snapshot::DesktopSnapshot;

/// Image agrandie prête à être affichée
/// Magnified image ready to be displayed
#[derive(Clone, Debug)]
pub struct Magnified {
    /// (capture_size * factor) pixels on each side
    pub image: RgbImage,
    /// Grid cell holding the pixel under the cursor (column, row).
    /// Off-center when the capture window is pushed against a screen edge.
    pub focus: ScreenPoint,
    /// Edge of one magnified cell in output pixels
    pub cell: u32,
}

impl Magnified {
    /// Rectangle (x, y, edge) du réticule dans l'image de sortie
    /// Reticle rectangle (x, y, edge) in output image coordinates
    pub fn reticle(&self) -> (u32, u32, u32) {
        (
            self.focus.x as u32 * self.cell,
            self.focus.y as u32 * self.cell,
            self.cell,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Magnifier {
    capture_size: u32,
    factor: u32,
}

impl Magnifier {
    /// Fenêtre impaire, facteur non nul, les deux bornés
    /// Odd window, non-zero factor, both bounded
    pub fn new(capture_size: u32, factor: u32) -> Result<Self, MagnifyError> {
        if capture_size == 0 || capture_size % 2 == 0 || factor == 0 {
            return Err(MagnifyError::InvalidWindow);
        }
        // Keeps capture_size * factor far from u32::MAX
        if capture_size > MAX_CAPTURE_SIZE || factor > MAX_MAGNIFICATION {
            return Err(MagnifyError::InvalidWindow);
        }
        Ok(Self { capture_size, factor })
    }

    pub fn from_config(config: &PickerConfig) -> Result<Self, MagnifyError> {
        Self::new(config.capture_size, config.magnification)
    }

    /// Côté de l'image produite
    /// Edge of the produced image
    #[inline]
    pub fn output_edge(&self) -> u32 {
        self.capture_size * self.factor
    }

    /// Coin haut-gauche de la fenêtre de capture, centrée sur `center`
    /// puis poussée à l'intérieur de la capture près des bords
    /// Top-left corner of the capture window, centered on `center` and then
    /// pushed inside the snapshot near the edges
    pub fn crop_origin(&self, size: Size, center: ScreenPoint) -> Result<(u32, u32), MagnifyError> {
        if size.width < self.capture_size || size.height < self.capture_size {
            return Err(MagnifyError::SnapshotTooSmall {
                width: size.width,
                height: size.height,
                size: self.capture_size,
            });
        }
        let half = (self.capture_size / 2) as i64;
        let axis = |c: i32, extent: u32| -> u32 {
            let max = (extent - self.capture_size) as i64;
            (c as i64 - half).clamp(0, max) as u32
        };
        Ok((axis(center.x, size.width), axis(center.y, size.height)))
    }

    /// Agrandit la zone `capture_size` x `capture_size` autour de `center`
    /// (coordonnées locales à la capture). Chaque pixel source devient un
    /// bloc uni de `factor` x `factor`, sans lissage.
    /// Magnifies the `capture_size` x `capture_size` area around `center`
    /// (snapshot-local coordinates). Every source pixel becomes a solid
    /// `factor` x `factor` block, without smoothing.
    pub fn magnify(
        &self,
        snapshot: &DesktopSnapshot,
        center: ScreenPoint,
    ) -> Result<Magnified, MagnifyError> {
        let (left, top) = self.crop_origin(snapshot.size(), center)?;

        let n = self.capture_size;
        let grid: Vec<Pixel<u8>> = (0..n * n)
            .map(|i| {
                let c = snapshot.sample((left + i % n) as i32, (top + i / n) as i32);
                Pixel([c.r, c.g, c.b])
            })
            .collect();

        let edge = self.output_edge();
        let f = self.factor;
        let image = RgbImage::from_fn(edge, edge, |x, y| grid[((y / f) * n + x / f) as usize]);

        let clamp_center = |c: i32, extent: u32| c.clamp(0, extent as i32 - 1);
        let focus = ScreenPoint::new(
            clamp_center(center.x, snapshot.width()) - left as i32,
            clamp_center(center.y, snapshot.height()) - top as i32,
        );

        Ok(Magnified { image, focus, cell: f })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::picker::snapshot::PixelLayout;
    use proptest::prelude::*;

    fn checker(size: Size) -> DesktopSnapshot {
        DesktopSnapshot::from_fn(size, PixelLayout::bgra_bottom_up(size.width), |x, y| {
            Rgb::new(x as u8, y as u8, ((x ^ y) & 1) as u8 * 255)
        })
        .unwrap()
    }

    #[test]
    fn test_default_output_is_152px() {
        let m = Magnifier::from_config(&PickerConfig::default()).unwrap();
        let snap = checker(Size::new(200, 100));
        let out = m.magnify(&snap, ScreenPoint::new(100, 50)).unwrap();
        assert_eq!(out.image.dimensions(), (152, 152));
        assert_eq!(out.focus, ScreenPoint::new(9, 9));
        assert_eq!(out.reticle(), (72, 72, 8));
    }

    #[test]
    fn test_center_cell_is_cursor_pixel() {
        let m = Magnifier::new(19, 8).unwrap();
        let snap = checker(Size::new(200, 100));
        let out = m.magnify(&snap, ScreenPoint::new(42, 17)).unwrap();
        let px = out.image.get_pixel(9 * 8 + 3, 9 * 8 + 5);
        assert_eq!(px.0, [42, 17, 255]);
    }

    #[test]
    fn test_corner_pushes_window_inside() {
        let m = Magnifier::new(19, 8).unwrap();
        let snap = checker(Size::new(200, 100));

        assert_eq!(m.crop_origin(snap.size(), ScreenPoint::new(0, 0)), Ok((0, 0)));
        assert_eq!(m.crop_origin(snap.size(), ScreenPoint::new(199, 99)), Ok((181, 81)));

        let out = m.magnify(&snap, ScreenPoint::new(199, 99)).unwrap();
        assert_eq!(out.image.dimensions(), (152, 152));
        assert_eq!(out.focus, ScreenPoint::new(18, 18));
    }

    #[test]
    fn test_cursor_outside_snapshot() {
        let m = Magnifier::new(19, 8).unwrap();
        let snap = checker(Size::new(200, 100));
        let out = m.magnify(&snap, ScreenPoint::new(-40, 5000)).unwrap();
        assert_eq!(out.focus, ScreenPoint::new(0, 18));
    }

    #[test]
    fn test_snapshot_smaller_than_window() {
        let m = Magnifier::new(19, 8).unwrap();
        let snap = checker(Size::new(10, 100));
        assert_eq!(
            m.magnify(&snap, ScreenPoint::ORIGIN).unwrap_err(),
            MagnifyError::SnapshotTooSmall { width: 10, height: 100, size: 19 }
        );
    }

    #[test]
    fn test_invalid_window() {
        assert_eq!(Magnifier::new(18, 8), Err(MagnifyError::InvalidWindow));
        assert_eq!(Magnifier::new(19, 0), Err(MagnifyError::InvalidWindow));
        assert_eq!(Magnifier::new(19, 300_000_000), Err(MagnifyError::InvalidWindow));
        assert_eq!(Magnifier::new(103, 8), Err(MagnifyError::InvalidWindow));
        assert!(Magnifier::new(MAX_CAPTURE_SIZE, MAX_MAGNIFICATION).is_ok());
    }

    proptest! {
        #[test]
        fn output_size_is_constant(x in -300i32..600, y in -300i32..600) {
            let m = Magnifier::new(19, 8).unwrap();
            let snap = checker(Size::new(120, 80));
            let out = m.magnify(&snap, ScreenPoint::new(x, y)).unwrap();
            prop_assert_eq!(out.image.dimensions(), (152, 152));
            prop_assert!(out.focus.x >= 0 && out.focus.x < 19);
            prop_assert!(out.focus.y >= 0 && out.focus.y < 19);
        }

        #[test]
        fn blocks_repeat_their_source_pixel(
            x in 0i32..120,
            y in 0i32..80,
            col in 0u32..19,
            row in 0u32..19,
        ) {
            let m = Magnifier::new(19, 8).unwrap();
            let snap = checker(Size::new(120, 80));
            let center = ScreenPoint::new(x, y);
            let out = m.magnify(&snap, center).unwrap();

            let (left, top) = m.crop_origin(snap.size(), center).unwrap();
            let c = snap.sample((left + col) as i32, (top + row) as i32);
            for dy in 0..8 {
                for dx in 0..8 {
                    let px = out.image.get_pixel(col * 8 + dx, row * 8 + dy);
                    prop_assert_eq!(px.0, [c.r, c.g, c.b]);
                }
            }
        }
    }
}
