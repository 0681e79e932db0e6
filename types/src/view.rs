//! UI configuration options derived from config/environment.

/// UI options (theme, motion, glyphs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and spinners.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Collapse animations to their end states.
    pub reduced_motion: bool,
}
