//! Preset file: fallbacks plus named indicators, stored as TOML under the
//! platform config directory.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color;
use crate::indicator::{DEFAULT_CURRENT, Indicator};
use crate::options::IndicatorOptions;
use crate::value::Value;

/// First lines of every saved config file.
const CONFIG_HEADER: &str =
    "# Indicator presets. `indicator save` rewrites this file; comments are not kept.\n\n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color name or wavelength in meters used when a request gives none. Default: "blue".
    #[serde(default = "default_color")]
    pub default_color: String,

    /// LED current in amps used when a request gives none. Default: 0.005.
    #[serde(default = "default_current")]
    pub default_current: f64,

    /// Named indicators. Example in TOML: `[presets.power]` / `input_voltage = 5` / `led_color = "green"`
    #[serde(default)]
    pub presets: BTreeMap<String, Preset>,
}

/// A saved indicator: a supply voltage plus named construction options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub input_voltage: f64,

    /// Option name → value, as accepted by [`IndicatorOptions::set`].
    #[serde(flatten)]
    pub options: BTreeMap<String, Value>,
}

fn default_color() -> String {
    color::DEFAULT_COLOR.into()
}

fn default_current() -> f64 {
    DEFAULT_CURRENT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_color: default_color(),
            default_current: default_current(),
            presets: BTreeMap::new(),
        }
    }
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `default_color` is neither a known color nor a number.
    InvalidDefaultColor(String),
    /// `default_current` is not a finite, positive number.
    InvalidDefaultCurrent(f64),
    /// A preset cannot be built or sized.
    InvalidPreset { name: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidDefaultColor(e) => write!(f, "Invalid default color: {e}"),
            ValidationError::InvalidDefaultCurrent(a) => {
                write!(f, "Invalid default current: {a}A (must be positive)")
            }
            ValidationError::InvalidPreset { name, reason } => {
                write!(f, "Invalid preset [{name}]: {reason}")
            }
        }
    }
}

impl Preset {
    pub fn new(input_voltage: f64) -> Self {
        Preset {
            input_voltage,
            options: BTreeMap::new(),
        }
    }

    /// Add a named option (builder style).
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.options.insert(name.to_string(), value.into());
        self
    }

    /// Record the fields set in `options`. A wavelength given as a color name
    /// is stored under `led_color`, a number under `led_wavelength`.
    pub fn from_options(input_voltage: f64, options: &IndicatorOptions) -> Self {
        let mut preset = Preset::new(input_voltage);
        if let Some(wavelength) = &options.led_wavelength {
            let key = match wavelength {
                Value::Text(_) => "led_color",
                _ => "led_wavelength",
            };
            preset = preset.with(key, wavelength.clone());
        }
        if let Some(current) = &options.led_current {
            preset = preset.with("led_current", current.clone());
        }
        if let Some(volts) = options.led_forward_voltage {
            preset = preset.with("led_forward_voltage", volts);
        }
        preset
    }

    /// Build the preset's indicator, filling unset fields from `defaults`.
    pub fn to_indicator(&self, defaults: &IndicatorOptions) -> crate::error::Result<Indicator> {
        let mut options = IndicatorOptions::from_named(
            self.options.iter().map(|(k, v)| (k.as_str(), v.clone())),
        )?;
        options.fill_from(defaults);
        Indicator::with_options(self.input_voltage, options)
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("indicator"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Write the config to `path`, creating missing parent directories.
    ///
    /// The TOML is staged in a sibling `.toml.tmp` file and renamed into
    /// place. If the rename is refused, `path` is written directly and the
    /// staged file removed.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let body = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        let contents = format!("{CONFIG_HEADER}{body}");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let staged = path.with_extension("toml.tmp");
        std::fs::write(&staged, &contents)?;
        if let Err(e) = std::fs::rename(&staged, path) {
            log::debug!("rename {} failed ({e}), writing in place", staged.display());
            let written = std::fs::write(path, &contents);
            let _ = std::fs::remove_file(&staged);
            return written;
        }
        log::debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Write the config to [`Config::path`].
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no platform config directory")
        })?;
        self.save_to(&path)
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, vec![]),
                Err(e) => {
                    let warning = format!(
                        "config parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Load config from the default path, returning the config and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// The configured fallbacks as construction options.
    ///
    /// `default_color` is read as a number when it parses as one, otherwise as
    /// a color name.
    pub fn defaults(&self) -> IndicatorOptions {
        IndicatorOptions::new()
            .with_wavelength(Value::parse(&self.default_color))
            .with_current(self.default_current)
    }

    /// Look up a preset and build its indicator.
    pub fn preset(&self, name: &str) -> crate::error::Result<Indicator> {
        let Some(preset) = self.presets.get(name) else {
            let known: Vec<&str> = self.presets.keys().map(String::as_str).collect();
            return Err(crate::IndicatorError::Config(if known.is_empty() {
                format!("No preset named {name} (no presets configured)")
            } else {
                format!("No preset named {name}. Presets: {}", known.join(", "))
            }));
        };
        preset.to_indicator(&self.defaults())
    }

    /// Add or replace a preset, returning the one it replaced.
    ///
    /// The preset must size cleanly against this config's defaults; on error
    /// the config is left untouched.
    pub fn insert_preset(
        &mut self,
        name: &str,
        preset: Preset,
    ) -> crate::error::Result<Option<Preset>> {
        if name.trim().is_empty() {
            return Err(crate::IndicatorError::Config(
                "preset name must not be empty".into(),
            ));
        }
        preset.to_indicator(&self.defaults())?.resistor_value()?;
        Ok(self.presets.insert(name.to_string(), preset))
    }

    /// Validate the entire config, collecting all errors.
    ///
    /// Presets must build and size cleanly. Returns `Ok(())` if valid, or
    /// `Err(Vec<ValidationError>)` with all problems found.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let mut scratch = Indicator::new(0.0);
        if let Err(e) = scratch.set_led_wavelength(Value::parse(&self.default_color)) {
            errors.push(ValidationError::InvalidDefaultColor(e.to_string()));
        }

        if !(self.default_current.is_finite() && self.default_current > 0.0) {
            errors.push(ValidationError::InvalidDefaultCurrent(self.default_current));
        }

        let defaults = self.defaults();
        for (name, preset) in &self.presets {
            if let Err(e) = preset
                .to_indicator(&defaults)
                .and_then(|ind| ind.resistor_value())
            {
                errors.push(ValidationError::InvalidPreset {
                    name: name.clone(),
                    reason: e.to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
