//! Theme slice

use serde::{Deserialize, Serialize};

use super::Dispatched;
use crate::models::ThemeMode;
use crate::theme::{resolve_palette, Palette, SystemAppearance};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    #[serde(default)]
    pub mode: ThemeMode,
}

impl ThemeState {
    pub fn set_theme(&mut self, mode: ThemeMode) -> Dispatched {
        self.mode = mode;
        Dispatched::Applied
    }

    /// Resolve the palette against the host's current preference.
    ///
    /// Evaluated on every call; the result is never stored.
    pub fn palette(&self, appearance: &impl SystemAppearance) -> &'static Palette {
        resolve_palette(self.mode, appearance.color_scheme())
    }
}
