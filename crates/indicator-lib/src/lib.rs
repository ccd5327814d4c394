//! Indicator: current-limiting resistor sizing for single-LED indicator circuits.

pub mod color;
pub mod config;
pub mod error;
pub mod estimate;
pub mod indicator;
pub mod options;
pub mod subcircuit;
pub mod value;

pub use error::IndicatorError;
pub use indicator::Indicator;
pub use options::IndicatorOptions;
pub use value::Value;
