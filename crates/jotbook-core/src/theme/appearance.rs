//! Host light/dark preference signal

use std::sync::atomic::{AtomicU8, Ordering};

use crate::models::ColorScheme;

/// Synchronous, read-only query for the host's color scheme
///
/// `None` means the host does not say.
pub trait SystemAppearance {
    fn color_scheme(&self) -> Option<ColorScheme>;
}

/// Queries the operating system on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct OsAppearance;

impl SystemAppearance for OsAppearance {
    fn color_scheme(&self) -> Option<ColorScheme> {
        detect_color_scheme()
    }
}

const UNKNOWN: u8 = 0;
const LIGHT: u8 = 1;
const DARK: u8 = 2;

/// A preference set by the host shell (or a test) instead of probed
///
/// Interior-mutable so a shell can forward OS day/night notifications
/// through a shared reference.
#[derive(Debug, Default)]
pub struct FixedAppearance {
    scheme: AtomicU8,
}

impl FixedAppearance {
    pub const fn new(scheme: Option<ColorScheme>) -> Self {
        Self {
            scheme: AtomicU8::new(encode(scheme)),
        }
    }

    pub fn set(&self, scheme: Option<ColorScheme>) {
        self.scheme.store(encode(scheme), Ordering::Relaxed);
    }
}

impl SystemAppearance for FixedAppearance {
    fn color_scheme(&self) -> Option<ColorScheme> {
        match self.scheme.load(Ordering::Relaxed) {
            LIGHT => Some(ColorScheme::Light),
            DARK => Some(ColorScheme::Dark),
            _ => None,
        }
    }
}

const fn encode(scheme: Option<ColorScheme>) -> u8 {
    match scheme {
        Some(ColorScheme::Light) => LIGHT,
        Some(ColorScheme::Dark) => DARK,
        None => UNKNOWN,
    }
}

#[cfg(target_os = "windows")]
fn detect_color_scheme() -> Option<ColorScheme> {
    use std::process::Command;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if stdout.contains("0x0") {
                Some(ColorScheme::Dark)
            } else if stdout.contains("0x1") {
                Some(ColorScheme::Light)
            } else {
                None
            }
        }
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}", e);
            None
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_color_scheme() -> Option<ColorScheme> {
    use std::process::Command;
    // The key is absent entirely while the system is in light mode
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if stdout.trim().eq_ignore_ascii_case("dark") {
                Some(ColorScheme::Dark)
            } else {
                Some(ColorScheme::Light)
            }
        }
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}", e);
            None
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_color_scheme() -> Option<ColorScheme> {
    if let Ok(theme) = std::env::var("GTK_THEME") {
        return Some(scheme_from_gtk_theme(&theme));
    }
    if let Ok(colors) = std::env::var("COLORFGBG") {
        return scheme_from_colorfgbg(&colors);
    }
    tracing::debug!("No GTK_THEME or COLORFGBG, system theme unknown");
    None
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_color_scheme() -> Option<ColorScheme> {
    tracing::debug!("Unsupported platform for system theme detection");
    None
}

#[cfg_attr(not(any(target_os = "linux", test)), allow(dead_code))]
fn scheme_from_gtk_theme(theme: &str) -> ColorScheme {
    if theme.to_lowercase().contains("dark") {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    }
}

/// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"); ANSI 0-6 and 8 are dark
#[cfg_attr(not(any(target_os = "linux", test)), allow(dead_code))]
fn scheme_from_colorfgbg(value: &str) -> Option<ColorScheme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    if background <= 6 || background == 8 {
        Some(ColorScheme::Dark)
    } else {
        Some(ColorScheme::Light)
    }
}
