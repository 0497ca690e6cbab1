//! Presentation configuration for the printed report.

/// Options that only affect how the report looks on a terminal.
///
/// Nothing here changes units, ordering or line layout; colour is purely
/// cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Whether ANSI colours are emitted for the `FILE`/`DIR` markers and the
    /// `GB` unit. `NO_COLOR` in the environment still disables them.
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

impl DisplayOptions {
    /// Apply these options to the global `colored` state.
    ///
    /// Only ever turns colour off; enabling is left to `colored`'s own
    /// terminal and `NO_COLOR` detection.
    pub fn apply(self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
