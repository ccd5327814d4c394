//! Named construction options for an [`Indicator`](crate::Indicator).
//!
//! Each recognized field is an explicit `Option`. String-keyed entry points
//! ([`IndicatorOptions::set`], [`IndicatorOptions::from_named`]) exist for the
//! command line and TOML presets and are the only place an unknown option
//! name can be rejected.

use crate::error::Result;
use crate::value::Value;
use crate::IndicatorError;

/// Option names accepted by [`IndicatorOptions::set`].
pub const OPTION_NAMES: [&str; 4] = [
    "led_color",
    "led_wavelength",
    "led_current",
    "led_forward_voltage",
];

/// Unvalidated construction options. Unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorOptions {
    /// Color name or wavelength in meters (`led_color` / `led_wavelength`).
    pub led_wavelength: Option<Value>,
    /// LED current in amps.
    pub led_current: Option<Value>,
    /// Explicit forward voltage; when unset the voltage is estimated.
    pub led_forward_voltage: Option<f64>,
}

impl IndicatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wavelength(mut self, value: impl Into<Value>) -> Self {
        self.led_wavelength = Some(value.into());
        self
    }

    pub fn with_current(mut self, value: impl Into<Value>) -> Self {
        self.led_current = Some(value.into());
        self
    }

    pub fn with_forward_voltage(mut self, volts: f64) -> Self {
        self.led_forward_voltage = Some(volts);
        self
    }

    /// Set a field by option name.
    ///
    /// `led_color` and `led_wavelength` are aliases. The forward voltage must be
    /// numeric. Any other name fails with [`IndicatorError::InvalidOption`].
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "led_color" | "led_wavelength" => self.led_wavelength = Some(value),
            "led_current" => self.led_current = Some(value),
            "led_forward_voltage" => match value {
                Value::Number(v) => self.led_forward_voltage = Some(v),
                other => return Err(IndicatorError::InvalidForwardVoltage(other.to_string())),
            },
            _ => return Err(IndicatorError::InvalidOption(name.to_string())),
        }
        Ok(())
    }

    /// Options from up to two positional values: wavelength, then current.
    pub fn from_positional(args: &[Value]) -> Result<Self> {
        if args.len() > 2 {
            return Err(IndicatorError::InvalidArgumentCount(args.len()));
        }
        Ok(IndicatorOptions {
            led_wavelength: args.first().cloned(),
            led_current: args.get(1).cloned(),
            led_forward_voltage: None,
        })
    }

    /// Build options from `(name, value)` pairs, applied in order.
    pub fn from_named<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut options = Self::default();
        for (name, value) in pairs {
            options.set(name.as_ref(), value)?;
        }
        Ok(options)
    }

    /// Overwrite fields with those set in `other` (last assignment wins).
    pub fn overlay(&mut self, other: IndicatorOptions) {
        if other.led_wavelength.is_some() {
            self.led_wavelength = other.led_wavelength;
        }
        if other.led_current.is_some() {
            self.led_current = other.led_current;
        }
        if other.led_forward_voltage.is_some() {
            self.led_forward_voltage = other.led_forward_voltage;
        }
    }

    /// Fill fields still unset from `defaults`.
    pub fn fill_from(&mut self, defaults: &IndicatorOptions) {
        if self.led_wavelength.is_none() {
            self.led_wavelength = defaults.led_wavelength.clone();
        }
        if self.led_current.is_none() {
            self.led_current = defaults.led_current.clone();
        }
        if self.led_forward_voltage.is_none() {
            self.led_forward_voltage = defaults.led_forward_voltage;
        }
    }
}

/// Split a `key=value` assignment as given on the command line.
pub fn parse_assignment(s: &str) -> Result<(String, Value)> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), Value::parse(value)))
        }
        _ => Err(IndicatorError::InvalidOption(s.to_string())),
    }
}
