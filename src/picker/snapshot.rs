// =============================================================================
// picker/snapshot.rs - Capture figée du bureau et échantillonnage
// picker/snapshot.rs - Frozen desktop capture and pixel sampling
// =============================================================================
//
// Le buffer est conservé tel que le système l'a produit (BGRA, lignes de bas
// en haut pour un DIB GDI). `sample` est le seul endroit qui remet les canaux
// et les lignes dans l'ordre : tous les consommateurs voient du vrai RGB.
// The buffer is kept exactly as the OS produced it (BGRA, bottom-up rows for
// a GDI DIB). `sample` is the single place that reorders channels and rows:
// every consumer sees true RGB.

use crate::color::Rgb;
use crate::error::CaptureError;

use super::layout::{ScreenPoint, Size};

/// Octets par pixel (alpha ou padding ignoré)
/// Bytes per pixel (alpha or padding ignored)
pub const BYTES_PER_PIXEL: usize = 4;

/// Ordre des canaux dans chaque pixel de 4 octets
/// Channel order inside each 4-byte pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Blue, green, red, unused (GDI DIB, CoreGraphics)
    Bgra,
    Rgba,
}

/// Ordre des lignes dans le buffer
/// Row order inside the buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOrder {
    /// First row in memory is the top of the screen
    TopDown,
    /// First row in memory is the bottom of the screen (positive DIB height)
    BottomUp,
}

/// Disposition mémoire d'un buffer de pixels
/// Memory layout of a pixel buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelLayout {
    pub channels: ChannelOrder,
    pub rows: RowOrder,
    /// Bytes between the starts of two consecutive rows
    pub stride: usize,
}

impl PixelLayout {
    /// Disposition native d'un DIB 32 bits GDI
    /// Native layout of a 32-bit GDI DIB
    pub fn bgra_bottom_up(width: u32) -> Self {
        Self {
            channels: ChannelOrder::Bgra,
            rows: RowOrder::BottomUp,
            stride: width as usize * BYTES_PER_PIXEL,
        }
    }

    #[cfg(test)]
    pub fn rgba_top_down(width: u32) -> Self {
        Self {
            channels: ChannelOrder::Rgba,
            rows: RowOrder::TopDown,
            stride: width as usize * BYTES_PER_PIXEL,
        }
    }
}

// =============================================================================
// DESKTOP SNAPSHOT
// =============================================================================

/// Capture immuable de l'écran principal pour une session d'eyedropper
/// Immutable capture of the primary display for one eyedropper session
#[derive(Debug)]
pub struct DesktopSnapshot {
    size: Size,
    /// Screen position of the snapshot's top-left pixel
    origin: ScreenPoint,
    layout: PixelLayout,
    data: Box<[u8]>,
}

impl DesktopSnapshot {
    /// Enveloppe un buffer brut après avoir vérifié sa taille
    /// Wraps a raw buffer after checking its size
    pub fn from_raw(
        size: Size,
        origin: ScreenPoint,
        layout: PixelLayout,
        data: Vec<u8>,
    ) -> Result<Self, CaptureError> {
        if size.is_empty() || size.width > i32::MAX as u32 || size.height > i32::MAX as u32 {
            return Err(CaptureError::ScreenMetrics);
        }
        let row_bytes = size.width as usize * BYTES_PER_PIXEL;
        let expected = layout.stride.max(row_bytes) * size.height as usize;
        if layout.stride < row_bytes || data.len() < expected {
            return Err(CaptureError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            size,
            origin,
            layout,
            data: data.into_boxed_slice(),
        })
    }

    /// Construit une capture en appelant `pixel(x, y)` pour chaque pixel
    /// (coordonnées haut-gauche), encodée selon `layout`
    /// Builds a snapshot by calling `pixel(x, y)` for every pixel (top-left
    /// coordinates), encoded according to `layout`
    pub fn from_fn(
        size: Size,
        layout: PixelLayout,
        mut pixel: impl FnMut(u32, u32) -> Rgb,
    ) -> Result<Self, CaptureError> {
        let row_bytes = size.width as usize * BYTES_PER_PIXEL;
        if layout.stride < row_bytes {
            return Err(CaptureError::BufferSize {
                expected: row_bytes * size.height as usize,
                actual: layout.stride * size.height as usize,
            });
        }
        let mut data = vec![0u8; layout.stride * size.height as usize];
        for y in 0..size.height {
            let row = match layout.rows {
                RowOrder::TopDown => y,
                RowOrder::BottomUp => size.height - 1 - y,
            } as usize;
            for x in 0..size.width {
                let c = pixel(x, y);
                let i = row * layout.stride + x as usize * BYTES_PER_PIXEL;
                let bytes = match layout.channels {
                    ChannelOrder::Bgra => [c.b, c.g, c.r, 0xFF],
                    ChannelOrder::Rgba => [c.r, c.g, c.b, 0xFF],
                };
                data[i..i + BYTES_PER_PIXEL].copy_from_slice(&bytes);
            }
        }
        Self::from_raw(size, ScreenPoint::ORIGIN, layout, data)
    }

    /// Capture d'une seule couleur (GDI natif)
    /// Single-color snapshot (native GDI layout)
    pub fn solid(size: Size, color: Rgb) -> Result<Self, CaptureError> {
        Self::from_fn(size, PixelLayout::bgra_bottom_up(size.width), |_, _| color)
    }

    #[cfg(test)]
    pub fn with_origin(mut self, origin: ScreenPoint) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn origin(&self) -> ScreenPoint {
        self.origin
    }

    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Octets bruts, pour reblitter la capture en fond d'overlay
    /// Raw bytes, used to blit the capture back as the overlay backdrop
    #[inline]
    pub fn raw(&self) -> &[u8] {
        &self.data
    }

    /// Convertit une coordonnée écran en coordonnée locale à la capture
    /// Converts a screen coordinate into snapshot-local coordinates
    #[inline]
    pub fn to_local(&self, screen: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            screen.x.saturating_sub(self.origin.x),
            screen.y.saturating_sub(self.origin.y),
        )
    }

    /// Lit la couleur du pixel (x, y), coordonnées contraintes dans
    /// `[0, width-1] x [0, height-1]`. N'échoue jamais.
    /// Reads the color of pixel (x, y), coordinates clamped into
    /// `[0, width-1] x [0, height-1]`. Never fails.
    pub fn sample(&self, x: i32, y: i32) -> Rgb {
        let x = x.clamp(0, self.size.width as i32 - 1) as usize;
        let y = y.clamp(0, self.size.height as i32 - 1) as u32;

        let row = match self.layout.rows {
            RowOrder::TopDown => y,
            RowOrder::BottomUp => self.size.height - 1 - y,
        } as usize;
        let i = row * self.layout.stride + x * BYTES_PER_PIXEL;
        let px = &self.data[i..i + 3];

        match self.layout.channels {
            ChannelOrder::Bgra => Rgb::new(px[2], px[1], px[0]),
            ChannelOrder::Rgba => Rgb::new(px[0], px[1], px[2]),
        }
    }

    #[inline]
    pub fn sample_at(&self, local: ScreenPoint) -> Rgb {
        self.sample(local.x, local.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Motif où chaque pixel encode sa propre position
    /// Pattern where every pixel encodes its own position
    fn coordinate_color(x: u32, y: u32) -> Rgb {
        Rgb::new(x as u8, y as u8, (x + y) as u8)
    }

    #[test]
    fn test_bottom_up_bgra_is_unswizzled() {
        let size = Size::new(4, 3);
        let layout = PixelLayout::bgra_bottom_up(4);
        let snap = DesktopSnapshot::from_fn(size, layout, coordinate_color).unwrap();

        // First bytes in memory belong to the bottom-left pixel, blue first
        assert_eq!(&snap.raw()[0..4], &[2, 2, 0, 0xFF]);
        assert_eq!(snap.sample(0, 0), Rgb::new(0, 0, 0));
        assert_eq!(snap.sample(3, 2), Rgb::new(3, 2, 5));
    }

    #[test]
    fn test_top_down_rgba() {
        let size = Size::new(4, 3);
        let layout = PixelLayout::rgba_top_down(4);
        let snap = DesktopSnapshot::from_fn(size, layout, coordinate_color).unwrap();
        assert_eq!(&snap.raw()[0..4], &[0, 0, 0, 0xFF]);
        assert_eq!(snap.sample(1, 2), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_padded_stride() {
        let layout = PixelLayout {
            channels: ChannelOrder::Bgra,
            rows: RowOrder::TopDown,
            stride: 4 * 4 + 8,
        };
        let snap = DesktopSnapshot::from_fn(Size::new(4, 2), layout, coordinate_color).unwrap();
        assert_eq!(snap.sample(3, 1), Rgb::new(3, 1, 4));
    }

    #[test]
    fn test_narrow_stride_is_an_error() {
        let layout = PixelLayout {
            channels: ChannelOrder::Bgra,
            rows: RowOrder::BottomUp,
            stride: 4 * 4 - 1,
        };
        let result = DesktopSnapshot::from_fn(Size::new(4, 2), layout, coordinate_color);
        assert!(matches!(
            result,
            Err(CaptureError::BufferSize { expected: 32, actual: 30 })
        ));
    }

    #[test]
    fn test_short_buffer_rejected() {
        let err = DesktopSnapshot::from_raw(
            Size::new(2, 2),
            ScreenPoint::ORIGIN,
            PixelLayout::bgra_bottom_up(2),
            vec![0; 15],
        )
        .unwrap_err();
        assert!(matches!(err, CaptureError::BufferSize { expected: 16, actual: 15 }));
    }

    #[test]
    fn test_empty_size_rejected() {
        let err = DesktopSnapshot::from_raw(
            Size::new(0, 10),
            ScreenPoint::ORIGIN,
            PixelLayout::bgra_bottom_up(0),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CaptureError::ScreenMetrics));
    }

    #[test]
    fn test_to_local_subtracts_origin() {
        let snap = DesktopSnapshot::solid(Size::new(2, 2), Rgb::WHITE)
            .unwrap()
            .with_origin(ScreenPoint::new(-1920, 0));
        assert_eq!(snap.to_local(ScreenPoint::new(-1900, 5)), ScreenPoint::new(20, 5));
    }

    proptest! {
        #[test]
        fn out_of_bounds_clamps_to_nearest_pixel(x in -5000i32..5000, y in -5000i32..5000) {
            let size = Size::new(40, 30);
            let layout = PixelLayout::bgra_bottom_up(40);
            let snap = DesktopSnapshot::from_fn(size, layout, coordinate_color).unwrap();
            let cx = x.clamp(0, 39) as u32;
            let cy = y.clamp(0, 29) as u32;
            prop_assert_eq!(snap.sample(x, y), coordinate_color(cx, cy));
        }

        #[test]
        fn extreme_coordinates_never_fault(x: i32, y: i32) {
            let snap = DesktopSnapshot::solid(Size::new(3, 3), Rgb::new(7, 8, 9)).unwrap();
            prop_assert_eq!(snap.sample(x, y), Rgb::new(7, 8, 9));
        }
    }
}
