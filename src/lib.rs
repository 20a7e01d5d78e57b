//! =============================================================================
//! swatch-picker - Sélecteur de couleurs de bureau
//! swatch-picker - Desktop color picker
//! =============================================================================
//!
//! Pipette plein écran (capture figée + loupe, ou lecture pixel par pixel en
//! secours), catalogue de couleurs nommées, extraits de code et export PNG.
//!
//! Full-screen eyedropper (frozen capture + magnifier, or per-pixel queries
//! as a fallback), named color catalog, code snippets and PNG export.
//!
//! # Contrôles de la pipette / Eyedropper controls
//! - Clic gauche / Left click: valider / pick
//! - Entrée, Espace / Enter, Space: valider sous le curseur / pick under the cursor
//! - Flèches / Arrow keys: déplacement fin (1 pixel) / fine movement (1 pixel)
//! - Shift + Flèches / Shift + Arrows: déplacement rapide (50 pixels) / fast movement
//! - ESC, clic droit / ESC, right click: annuler / cancel

// =============================================================================
// MODULES
// =============================================================================

/// Configuration partagée (constantes et `PickerConfig`)
/// Shared configuration (constants and `PickerConfig`)
pub mod config;

pub mod error;

/// Type couleur, formatage et saisie
/// Color type, formatting and input
pub mod color;

/// Pipette : capture, échantillonnage, loupe, session, overlay
/// Eyedropper: capture, sampling, magnifier, session, overlay
pub mod picker;

/// Catalogue de couleurs nommées
/// Named color catalog
pub mod catalog;

pub mod snippets;

/// Export PNG d'une pastille unie
/// Solid swatch PNG export
pub mod swatch;

pub use catalog::{ColorCatalog, Match, NamedColor};
pub use color::Rgb;
pub use config::PickerConfig;
pub use snippets::SnippetTable;

// =============================================================================
// API PUBLIQUE
// PUBLIC API
// =============================================================================

/// Lance la pipette avec la configuration par défaut.
/// L'hôte doit masquer sa propre fenêtre avant l'appel.
/// Runs the eyedropper with the default configuration.
/// The host must hide its own window before calling.
///
/// # Returns
/// `Some(color)` si une couleur a été choisie, `None` si annulé ou si
/// aucun overlay n'a pu être créé
/// `Some(color)` when a color was picked, `None` when cancelled or when no
/// overlay could be created
pub fn pick_color() -> Option<Rgb> {
    pick_color_with(&PickerConfig::default())
}

/// Lance la pipette avec une configuration donnée (refusée si invalide)
/// Runs the eyedropper with the given configuration (rejected when invalid)
pub fn pick_color_with(config: &PickerConfig) -> Option<Rgb> {
    picker::run(config)
}
