//! Monokai Pro colors for the employee directory window

use gpui::Hsla;

/// Monokai Pro color palette
pub mod colors {
    use gpui::{rgb, Hsla};

    pub fn bg_dark() -> Hsla { rgb(0x19181a).into() }
    pub fn bg_base() -> Hsla { rgb(0x2d2a2e).into() }
    pub fn bg_light() -> Hsla { rgb(0x403e41).into() }
    pub fn bg_highlight() -> Hsla { rgb(0x5b595c).into() }

    pub fn fg_base() -> Hsla { rgb(0xfcfcfa).into() }
    pub fn fg_dim() -> Hsla { rgb(0x939293).into() }
    pub fn fg_muted() -> Hsla { rgb(0x727072).into() }

    pub fn red() -> Hsla { rgb(0xff6188).into() }
    pub fn yellow() -> Hsla { rgb(0xffd866).into() }
    pub fn green() -> Hsla { rgb(0xa9dc76).into() }
    pub fn cyan() -> Hsla { rgb(0x78dce8).into() }
    pub fn purple() -> Hsla { rgb(0xab9df2).into() }
}

/// Colors by role in the form and table
#[derive(Clone)]
pub struct DirectoryTheme {
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_raised: Hsla,
    pub row_hover: Hsla,

    pub foreground: Hsla,
    pub foreground_dim: Hsla,
    pub foreground_muted: Hsla,

    /// Submit button and selected department
    pub primary: Hsla,
    /// Edit button
    pub edit: Hsla,
    /// Delete button, error banner, field hints
    pub danger: Hsla,
    /// Success banner
    pub success: Hsla,
    /// Locked identifier input
    pub locked: Hsla,

    pub border: Hsla,
}

impl Default for DirectoryTheme {
    fn default() -> Self {
        Self {
            background: colors::bg_base(),
            surface: colors::bg_dark(),
            surface_raised: colors::bg_light(),
            row_hover: colors::bg_highlight(),

            foreground: colors::fg_base(),
            foreground_dim: colors::fg_dim(),
            foreground_muted: colors::fg_muted(),

            primary: colors::cyan(),
            edit: colors::yellow(),
            danger: colors::red(),
            success: colors::green(),
            locked: colors::purple(),

            border: colors::bg_light(),
        }
    }
}

impl DirectoryTheme {
    pub fn new() -> Self {
        Self::default()
    }
}
