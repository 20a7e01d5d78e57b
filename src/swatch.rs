//! Solid-color PNG swatches
//!
//! The exporter writes a single flat color at the requested size; there is
//! no border or label baked into the image.

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use image::{ImageFormat, Rgb as Pixel, RgbImage};
use tracing::info;

use crate::color::Rgb;
use crate::config::MAX_SWATCH_EDGE;
use crate::error::ExportError;

/// Vérifie les dimensions demandées (1 à MAX_SWATCH_EDGE)
/// Checks the requested dimensions (1 to MAX_SWATCH_EDGE)
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ExportError> {
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidDimensions);
    }
    if width > MAX_SWATCH_EDGE || height > MAX_SWATCH_EDGE {
        return Err(ExportError::TooLarge { max: MAX_SWATCH_EDGE });
    }
    Ok(())
}

pub fn render(color: Rgb, width: u32, height: u32) -> Result<RgbImage, ExportError> {
    validate_dimensions(width, height)?;
    Ok(RgbImage::from_pixel(width, height, Pixel([color.r, color.g, color.b])))
}

/// Écrit la pastille au format PNG
/// Writes the swatch as a PNG file
pub fn export_png(color: Rgb, width: u32, height: u32, path: &Path) -> Result<(), ExportError> {
    let image = render(color, width, height)?;
    image.save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), color = %color, width, height, "Swatch written");
    Ok(())
}

/// "Color_RRGGBB_WxH_yyyyMMdd_HHmmss.png"
pub fn file_name_at(color: Rgb, width: u32, height: u32, at: NaiveDateTime) -> String {
    format!(
        "Color_{}_{}x{}_{}.png",
        color.hex_digits(),
        width,
        height,
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Nom de fichier par défaut, horodaté à l'heure locale
/// Default file name, stamped with the local time
pub fn default_file_name(color: Rgb, width: u32, height: u32) -> String {
    file_name_at(color, width, height, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_file_name_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap();
        assert_eq!(
            file_name_at(Rgb::new(10, 20, 30), 100, 50, at),
            "Color_0A141E_100x50_20240309_070501.png"
        );
    }

    #[test]
    fn test_dimension_limits() {
        assert!(matches!(validate_dimensions(0, 10), Err(ExportError::InvalidDimensions)));
        assert!(matches!(validate_dimensions(5001, 10), Err(ExportError::TooLarge { max: 5000 })));
        assert!(validate_dimensions(5000, 1).is_ok());
    }

    #[test]
    fn test_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatch.png");
        export_png(Rgb::new(200, 100, 50), 7, 3, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (7, 3));
        assert!(decoded.pixels().all(|p| p.0 == [200, 100, 50]));
    }

    #[test]
    fn test_too_large_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        assert!(export_png(Rgb::WHITE, 6000, 10, &path).is_err());
        assert!(!path.exists());
    }
}
