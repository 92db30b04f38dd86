//! Palette resolution
//!
//! The concrete palette is a pure function of the stored [`ThemeMode`] and the
//! host's current light/dark signal. Nothing here is cached: the host can flip
//! between day and night without any store mutation.

mod appearance;

pub use appearance::{FixedAppearance, OsAppearance, SystemAppearance};

use crate::models::{ColorScheme, ThemeMode};

/// Named color tokens consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub sub_text: &'static str,
    pub card_background: &'static str,
    pub primary: &'static str,
    pub border: &'static str,
    pub placeholder: &'static str,
    pub input_background: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: Palette = Palette {
    background: "#FDFBF7",
    text: "#1F2937",
    sub_text: "#6B7280",
    card_background: "#FFFFFF",
    primary: "#4E7C64",
    border: "#E5E7EB",
    placeholder: "#9CA3AF",
    input_background: "#FFFFFF",
};

/// Dark theme colors
pub const DARK_PALETTE: Palette = Palette {
    background: "#111827",
    text: "#F9FAFB",
    sub_text: "#9CA3AF",
    card_background: "#1F2937",
    primary: "#5F8D76",
    border: "#374151",
    placeholder: "#4B5563",
    input_background: "#374151",
};

/// Resolve a theme mode to a concrete scheme
///
/// `Auto` defers to `system`; an unknown system preference resolves to light.
#[must_use]
pub fn resolve_scheme(mode: ThemeMode, system: Option<ColorScheme>) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::Light,
        ThemeMode::Dark => ColorScheme::Dark,
        ThemeMode::Auto => system.unwrap_or(ColorScheme::Light),
    }
}

/// Resolve a theme mode to one of the two fixed palettes
#[must_use]
pub fn resolve_palette(mode: ThemeMode, system: Option<ColorScheme>) -> &'static Palette {
    palette_for(resolve_scheme(mode, system))
}

/// Get the color palette for a concrete scheme
#[must_use]
pub const fn palette_for(scheme: ColorScheme) -> &'static Palette {
    match scheme {
        ColorScheme::Light => &LIGHT_PALETTE,
        ColorScheme::Dark => &DARK_PALETTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNALS: [Option<ColorScheme>; 3] =
        [None, Some(ColorScheme::Light), Some(ColorScheme::Dark)];

    #[test]
    fn explicit_modes_ignore_the_system() {
        for signal in SIGNALS {
            assert_eq!(resolve_palette(ThemeMode::Light, signal), &LIGHT_PALETTE);
            assert_eq!(resolve_palette(ThemeMode::Dark, signal), &DARK_PALETTE);
        }
    }

    #[test]
    fn auto_follows_the_system() {
        assert_eq!(
            resolve_palette(ThemeMode::Auto, Some(ColorScheme::Dark)),
            &DARK_PALETTE
        );
        assert_eq!(
            resolve_palette(ThemeMode::Auto, Some(ColorScheme::Light)),
            &LIGHT_PALETTE
        );
    }

    #[test]
    fn auto_with_unknown_system_is_light() {
        assert_eq!(resolve_scheme(ThemeMode::Auto, None), ColorScheme::Light);
    }

    #[test]
    fn palettes_are_distinct() {
        assert_ne!(LIGHT_PALETTE, DARK_PALETTE);
        assert_eq!(DARK_PALETTE.primary, "#5F8D76");
    }
}
