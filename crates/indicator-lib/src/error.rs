//! Unified error type for the indicator-lib crate.
//!
//! [`IndicatorError`] covers the validation failures raised while building or
//! querying an [`Indicator`](crate::Indicator), plus the I/O and config errors
//! of the preset file. Every kind is local and final: nothing here is retried.

use std::fmt;

/// Unified error type for indicator-lib operations.
#[derive(Debug)]
pub enum IndicatorError {
    /// Unrecognized named construction option.
    InvalidOption(String),
    /// More than two positional construction values.
    InvalidArgumentCount(usize),
    /// Color name not present in the color table.
    UnknownColor {
        value: String,
        valid: Vec<&'static str>,
    },
    /// Wavelength given as a value that is neither a number nor a color name.
    InvalidWavelength(String),
    /// Current that is not numeric, or zero when sizing the resistor.
    InvalidCurrent(String),
    /// Forward voltage override that is not numeric.
    InvalidForwardVoltage(String),
    /// Supply voltage not strictly above the LED forward voltage.
    InsufficientSupplyVoltage {
        input_voltage: f64,
        forward_voltage: f64,
    },
    /// Standard I/O error (config file read/write).
    Io(std::io::Error),
    /// Configuration error (unknown preset, unusable defaults).
    Config(String),
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::InvalidOption(name) => write!(
                f,
                "Option {name} not recognized. Options are: {}",
                crate::options::OPTION_NAMES.join(", ")
            ),
            IndicatorError::InvalidArgumentCount(n) => {
                write!(f, "Expected at most 2 positional values, got {n}")
            }
            IndicatorError::UnknownColor { value, valid } => {
                write!(
                    f,
                    "Color {value} not understood. Options are: {}",
                    valid.join(", ")
                )
            }
            IndicatorError::InvalidWavelength(v) => {
                write!(f, "{v} is not convertible to a wavelength")
            }
            IndicatorError::InvalidCurrent(v) => write!(f, "Invalid LED current: {v}"),
            IndicatorError::InvalidForwardVoltage(v) => {
                write!(f, "Invalid LED forward voltage: {v}")
            }
            IndicatorError::InsufficientSupplyVoltage {
                input_voltage,
                forward_voltage,
            } => write!(
                f,
                "Input voltage {input_voltage}V must be greater than LED forward voltage {forward_voltage}V"
            ),
            IndicatorError::Io(e) => write!(f, "I/O error: {e}"),
            IndicatorError::Config(e) => write!(f, "Config error: {e}"),
        }
    }
}

impl std::error::Error for IndicatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndicatorError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IndicatorError {
    fn from(e: std::io::Error) -> Self {
        IndicatorError::Io(e)
    }
}

/// Crate-level Result alias using [`IndicatorError`].
pub type Result<T> = std::result::Result<T, IndicatorError>;
