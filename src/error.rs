// =============================================================================
// error.rs - Types d'erreurs / Error types
// =============================================================================
//
// Aucune de ces erreurs ne traverse `pick_color` : la capture bascule sur le
// mode de secours, la loupe renvoie un aperçu vide pour la frame en cours.
// None of these errors crosses `pick_color`: capture falls back to live
// sampling, the magnifier yields an empty preview for the current tick.

use std::path::PathBuf;

use thiserror::Error;

/// Échec de la capture plein écran
/// Full-screen capture failure
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("display reported an empty resolution")]
    ScreenMetrics,

    #[error("could not acquire the screen device context")]
    ScreenDc,

    #[error("could not create a compatible memory device context")]
    MemoryDc,

    #[error("could not create a {width}x{height} compatible bitmap")]
    Bitmap { width: i32, height: i32 },

    #[error("block transfer from the screen failed: {0}")]
    Transfer(String),

    #[error("bitmap readback copied {copied} of {expected} scan lines")]
    Readback { copied: i32, expected: i32 },

    #[error("pixel buffer holds {actual} bytes, layout needs {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("screen capture is not supported on this platform")]
    Unsupported,
}

/// Échec de création de la fenêtre d'overlay
/// Overlay window creation failure
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("module handle unavailable: {0}")]
    ModuleHandle(String),

    #[error("could not register window class {0}")]
    RegisterClass(&'static str),

    #[error("could not create overlay window: {0}")]
    CreateWindow(String),

    #[error("could not start the {0} ms refresh timer")]
    Timer(u32),

    #[error("overlay windows are not supported on this platform")]
    Unsupported,
}

/// Échec de la loupe (récupéré frame par frame)
/// Magnifier failure (recovered per tick)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MagnifyError {
    #[error("capture window must be odd and non-zero, factor non-zero")]
    InvalidWindow,

    #[error("snapshot {width}x{height} is smaller than the {size}px capture window")]
    SnapshotTooSmall { width: u32, height: u32, size: u32 },
}

/// Saisie de couleur invalide
/// Invalid color input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("empty color input")]
    Empty,

    #[error("invalid hex color '{0}', expected #RGB, #ARGB, #RRGGBB or #AARRGGBB")]
    InvalidHex(String),

    #[error("invalid color '{0}', expected #RRGGBB or R, G, B")]
    InvalidRgb(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("capture size must be odd and non-zero, got {0}")]
    EvenCaptureSize(u32),

    #[error("magnification factor must be at least 1")]
    ZeroFactor,

    #[error("tick intervals must be at least 1 ms")]
    ZeroInterval,

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Échec de l'export PNG
/// PNG export failure
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("width and height must be greater than 0")]
    InvalidDimensions,

    #[error("maximum dimension is {max} pixels")]
    TooLarge { max: u32 },

    #[error("png encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
