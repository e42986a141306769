use thiserror::Error;

/// Errors raised when external input is turned into palette values.
///
/// Numeric values never produce errors; they are clamped where they enter the
/// model. Only input whose shape cannot be represented is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("unknown gradient mode `{0}` (expected noise, linear, radial or angular)")]
    UnknownMode(String),
    #[error("a palette needs between {min} and {max} stops, got {count}")]
    InvalidStopCount { count: usize, min: usize, max: usize },
}

/// Errors raised by the gradient synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    #[error("gradient synthesis needs at least 2 stops, got {count}")]
    TooFewStops { count: usize },
}
