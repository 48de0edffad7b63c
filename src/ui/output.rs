//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show results, status lines and warnings.
    #[default]
    Normal,
    /// Show results and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status and warning lines.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
