use crate::color::ColorSetting;

/// Configuration for a single run. Immutable for the run's lifetime.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Print one full line per test instead of the compact progress bar.
    pub verbose: bool,
    pub color: ColorSetting,
    /// Abort the run on the first genuine failure (not error, not skip).
    pub fail_fast: bool,
    /// Print failure detail immediately after the failing test instead of
    /// batched at the end of the run.
    pub output_inline: bool,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(self, verbose: bool) -> Self {
        Self { verbose, ..self }
    }

    pub fn with_color(self, color: impl Into<ColorSetting>) -> Self {
        Self {
            color: color.into(),
            ..self
        }
    }

    pub fn with_fail_fast(self, fail_fast: bool) -> Self {
        Self { fail_fast, ..self }
    }

    pub fn with_output_inline(self, output_inline: bool) -> Self {
        Self {
            output_inline,
            ..self
        }
    }
}
