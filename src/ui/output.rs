//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-dialect summaries.
    Verbose,
    /// Show differences and status.
    #[default]
    Normal,
    /// Show differences only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows summaries and other detail.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers and success messages.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
