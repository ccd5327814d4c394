//! The LED + series resistor indicator and its derived quantities.

use std::fmt;

use crate::color;
use crate::error::Result;
use crate::estimate::estimate_forward_voltage;
use crate::options::IndicatorOptions;
use crate::value::Value;
use crate::IndicatorError;

/// LED current used when none is given (amps).
pub const DEFAULT_CURRENT: f64 = 5e-3;

/// Electrical configuration of one LED driven through a series resistor.
///
/// Fields are validated on every assignment. The supply voltage is only
/// checked against the forward voltage when the resistor is sized.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    input_voltage: f64,
    led_wavelength: f64,
    led_current: f64,
    led_forward_voltage: Option<f64>,
}

impl Indicator {
    /// A blue indicator at 5 mA on the given supply.
    pub fn new(input_voltage: f64) -> Self {
        Indicator {
            input_voltage,
            led_wavelength: color::DEFAULT_WAVELENGTH,
            led_current: DEFAULT_CURRENT,
            led_forward_voltage: None,
        }
    }

    /// Build from named options; unset fields take the defaults.
    pub fn with_options(input_voltage: f64, options: IndicatorOptions) -> Result<Self> {
        let mut indicator = Self::new(input_voltage);
        indicator.set_led_forward_voltage(options.led_forward_voltage);
        if let Some(current) = options.led_current {
            indicator.set_led_current(current)?;
        }
        if let Some(wavelength) = options.led_wavelength {
            indicator.set_led_wavelength(wavelength)?;
        }
        log::debug!(
            "indicator: VIN={}V λ={}m I={}A Vf override={:?}",
            indicator.input_voltage,
            indicator.led_wavelength,
            indicator.led_current,
            indicator.led_forward_voltage
        );
        Ok(indicator)
    }

    /// Build from up to two positional values with named options on top.
    ///
    /// One value is the color or wavelength; a second is the current. A field
    /// given both positionally and by name takes the named value.
    pub fn from_args(input_voltage: f64, args: &[Value], named: IndicatorOptions) -> Result<Self> {
        let mut options = IndicatorOptions::from_positional(args)?;
        options.overlay(named);
        Self::with_options(input_voltage, options)
    }

    /// Supply voltage in volts.
    pub fn input_voltage(&self) -> f64 {
        self.input_voltage
    }

    pub fn set_input_voltage(&mut self, volts: f64) {
        self.input_voltage = volts;
    }

    /// LED wavelength in meters.
    pub fn led_wavelength(&self) -> f64 {
        self.led_wavelength
    }

    /// Set the wavelength from meters or a color name.
    pub fn set_led_wavelength(&mut self, value: impl Into<Value>) -> Result<()> {
        self.led_wavelength = match value.into() {
            Value::Number(meters) => meters,
            Value::Text(name) => color::resolve(&name)?,
            other => return Err(IndicatorError::InvalidWavelength(other.to_string())),
        };
        Ok(())
    }

    /// LED current in amps.
    pub fn led_current(&self) -> f64 {
        self.led_current
    }

    pub fn set_led_current(&mut self, value: impl Into<Value>) -> Result<()> {
        match value.into() {
            Value::Number(amps) => {
                self.led_current = amps;
                Ok(())
            }
            other => Err(IndicatorError::InvalidCurrent(format!(
                "{other} (must be a number)"
            ))),
        }
    }

    /// The explicit forward voltage, if one was set.
    pub fn led_forward_voltage(&self) -> Option<f64> {
        self.led_forward_voltage
    }

    /// Set or clear the explicit forward voltage.
    pub fn set_led_forward_voltage(&mut self, volts: Option<f64>) {
        self.led_forward_voltage = volts;
    }

    /// Forward voltage used for sizing: the override, or the estimate for the
    /// current wavelength.
    pub fn effective_forward_voltage(&self) -> f64 {
        self.led_forward_voltage
            .unwrap_or_else(|| estimate_forward_voltage(self.led_wavelength))
    }

    /// Series resistance in ohms that sets the LED current.
    pub fn resistor_value(&self) -> Result<f64> {
        let forward_voltage = self.effective_forward_voltage();
        if !forward_voltage.is_finite() {
            return Err(match self.led_forward_voltage {
                Some(v) => IndicatorError::InvalidForwardVoltage(v.to_string()),
                None => IndicatorError::InvalidWavelength(format!(
                    "{} (no finite forward voltage estimate)",
                    self.led_wavelength
                )),
            });
        }
        if self.input_voltage.is_nan() || self.input_voltage <= forward_voltage {
            return Err(IndicatorError::InsufficientSupplyVoltage {
                input_voltage: self.input_voltage,
                forward_voltage,
            });
        }
        if self.led_current == 0.0 || !self.led_current.is_finite() {
            return Err(IndicatorError::InvalidCurrent(format!(
                "{} (cannot size a resistor for this current)",
                self.led_current
            )));
        }
        let ohms = (self.input_voltage - forward_voltage) / self.led_current;
        if !ohms.is_finite() {
            return Err(IndicatorError::InvalidCurrent(format!(
                "{} (resistance {ohms}Ω is not finite)",
                self.led_current
            )));
        }
        log::debug!(
            "resistor: ({}V - {}V) / {}A = {}Ω",
            self.input_voltage,
            forward_voltage,
            self.led_current,
            ohms
        );
        Ok(ohms)
    }

    /// Multi-line human-readable summary.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Indicator with:")?;
        writeln!(f, "  VIN: {}V", self.input_voltage)?;
        writeln!(f, "  I: {}A", self.led_current)?;
        write!(f, "  λ: {}nm", self.led_wavelength * 1e9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn green() -> Indicator {
        Indicator::from_args(3.0, &["green".into()], IndicatorOptions::new()).unwrap()
    }

    // ── construction ──

    #[test]
    fn new_defaults_blue_5ma() {
        let ind = Indicator::new(5.0);
        assert_eq!(ind.input_voltage(), 5.0);
        assert_eq!(ind.led_wavelength(), 470e-9);
        assert_eq!(ind.led_current(), 5e-3);
        assert_eq!(ind.led_forward_voltage(), None);
    }

    #[test]
    fn no_args_uses_defaults() {
        let ind = Indicator::from_args(5.0, &[], IndicatorOptions::new()).unwrap();
        assert_eq!(ind, Indicator::new(5.0));
    }

    #[test]
    fn one_arg_is_color() {
        assert_eq!(green().led_wavelength(), 530e-9);
        assert_eq!(green().led_current(), 5e-3);
    }

    #[test]
    fn two_args_are_color_and_current() {
        let ind =
            Indicator::from_args(5.0, &["red".into(), 0.02.into()], IndicatorOptions::new())
                .unwrap();
        assert_eq!(ind.led_wavelength(), 650e-9);
        assert_eq!(ind.led_current(), 0.02);
    }

    #[test]
    fn three_args_rejected() {
        let err = Indicator::from_args(
            5.0,
            &["red".into(), 0.02.into(), 1.0.into()],
            IndicatorOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidArgumentCount(3)));
    }

    #[test]
    fn named_overrides_positional() {
        let named = IndicatorOptions::new().with_wavelength("violet");
        let ind = Indicator::from_args(5.0, &["red".into(), 0.01.into()], named).unwrap();
        assert_eq!(ind.led_wavelength(), 400e-9);
        assert_eq!(ind.led_current(), 0.01);
    }

    #[test]
    fn named_current_overrides_positional() {
        let named = IndicatorOptions::new().with_current(0.02);
        let ind = Indicator::from_args(5.0, &["red".into(), 0.01.into()], named).unwrap();
        assert_eq!(ind.led_wavelength(), 650e-9);
        assert_eq!(ind.led_current(), 0.02);
    }

    #[test]
    fn with_options_forward_voltage() {
        let ind =
            Indicator::with_options(5.0, IndicatorOptions::new().with_forward_voltage(1.8))
                .unwrap();
        assert_eq!(ind.led_forward_voltage(), Some(1.8));
        assert_eq!(ind.led_wavelength(), 470e-9);
    }

    #[test]
    fn with_options_unknown_color() {
        let err = Indicator::with_options(5.0, IndicatorOptions::new().with_wavelength("ultraviolet"))
            .unwrap_err();
        assert!(matches!(err, IndicatorError::UnknownColor { .. }));
    }

    #[test]
    fn with_options_text_current() {
        let err = Indicator::with_options(5.0, IndicatorOptions::new().with_current("bright"))
            .unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidCurrent(_)));
    }

    // ── setters ──

    #[test]
    fn set_wavelength_number_passes_through() {
        let mut ind = Indicator::new(5.0);
        ind.set_led_wavelength(940e-9).unwrap();
        assert_eq!(ind.led_wavelength(), 940e-9);
    }

    #[test]
    fn set_wavelength_bool_rejected() {
        let mut ind = Indicator::new(5.0);
        let err = ind.set_led_wavelength(true).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidWavelength(_)));
        assert_eq!(ind.led_wavelength(), 470e-9, "failed set must not mutate");
    }

    #[test]
    fn set_wavelength_unknown_color_keeps_old_value() {
        let mut ind = green();
        assert!(ind.set_led_wavelength("ultraviolet").is_err());
        assert_eq!(ind.led_wavelength(), 530e-9);
    }

    #[test]
    fn set_current_bool_rejected() {
        let mut ind = Indicator::new(5.0);
        assert!(matches!(
            ind.set_led_current(false),
            Err(IndicatorError::InvalidCurrent(_))
        ));
        assert_eq!(ind.led_current(), 5e-3);
    }

    #[test]
    fn clear_forward_voltage_restores_estimate() {
        let mut ind = green();
        ind.set_led_forward_voltage(Some(2.0));
        assert_eq!(ind.effective_forward_voltage(), 2.0);
        ind.set_led_forward_voltage(None);
        assert_eq!(
            ind.effective_forward_voltage(),
            estimate_forward_voltage(530e-9)
        );
    }

    // ── derived values ──

    #[test]
    fn resistor_green_at_3v() {
        let expected = (3.0 - estimate_forward_voltage(530e-9)) / 5e-3;
        assert_eq!(green().resistor_value().unwrap(), expected);
    }

    #[test]
    fn resistor_blue_at_1v_insufficient() {
        let ind = Indicator::from_args(1.0, &["blue".into()], IndicatorOptions::new()).unwrap();
        match ind.resistor_value().unwrap_err() {
            IndicatorError::InsufficientSupplyVoltage {
                input_voltage,
                forward_voltage,
            } => {
                assert_eq!(input_voltage, 1.0);
                assert_eq!(forward_voltage, estimate_forward_voltage(470e-9));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resistor_equal_voltages_insufficient() {
        let mut ind = Indicator::new(2.0);
        ind.set_led_forward_voltage(Some(2.0));
        assert!(matches!(
            ind.resistor_value(),
            Err(IndicatorError::InsufficientSupplyVoltage { .. })
        ));
    }

    #[test]
    fn resistor_nan_current_rejected() {
        let mut ind = green();
        ind.set_led_current(f64::NAN).unwrap();
        assert!(matches!(
            ind.resistor_value(),
            Err(IndicatorError::InvalidCurrent(_))
        ));
    }

    #[test]
    fn resistor_infinite_current_rejected() {
        let ind = Indicator::from_args(
            3.0,
            &["green".into(), Value::parse("inf")],
            IndicatorOptions::new(),
        )
        .unwrap();
        assert!(matches!(
            ind.resistor_value(),
            Err(IndicatorError::InvalidCurrent(_))
        ));
    }

    #[test]
    fn resistor_subnormal_current_rejected() {
        let mut ind = green();
        ind.set_led_current(1e-320).unwrap();
        assert!(matches!(
            ind.resistor_value(),
            Err(IndicatorError::InvalidCurrent(_))
        ));
    }

    #[test]
    fn resistor_nan_wavelength_rejected() {
        let ind = Indicator::from_args(3.0, &[Value::parse("nan")], IndicatorOptions::new())
            .unwrap();
        assert!(matches!(
            ind.resistor_value(),
            Err(IndicatorError::InvalidWavelength(_))
        ));
    }

    #[test]
    fn resistor_nan_forward_voltage_rejected() {
        let mut ind = Indicator::new(5.0);
        ind.set_led_forward_voltage(Some(f64::NAN));
        assert!(matches!(
            ind.resistor_value(),
            Err(IndicatorError::InvalidForwardVoltage(_))
        ));
    }

    #[test]
    fn resistor_nan_supply_insufficient() {
        let ind = Indicator::new(f64::NAN);
        assert!(matches!(
            ind.resistor_value(),
            Err(IndicatorError::InsufficientSupplyVoltage { .. })
        ));
    }

    #[test]
    fn resistor_zero_current_rejected() {
        let mut ind = green();
        ind.set_led_current(0.0).unwrap();
        assert!(matches!(
            ind.resistor_value(),
            Err(IndicatorError::InvalidCurrent(_))
        ));
    }

    #[test]
    fn resistor_uses_override() {
        let mut ind = Indicator::new(5.0);
        ind.set_led_forward_voltage(Some(2.0));
        assert_eq!(ind.resistor_value().unwrap(), (5.0 - 2.0) / 5e-3);
    }

    #[test]
    fn resistor_tracks_supply_changes() {
        let mut ind = green();
        let before = ind.resistor_value().unwrap();
        ind.set_input_voltage(5.0);
        assert!(ind.resistor_value().unwrap() > before);
    }

    // ── describe ──

    #[test]
    fn describe_exact_format() {
        assert_eq!(
            green().describe(),
            "Indicator with:\n  VIN: 3V\n  I: 0.005A\n  λ: 530nm"
        );
    }

    #[test]
    fn describe_fractional_supply() {
        let ind = Indicator::new(3.3);
        assert!(ind.describe().contains("VIN: 3.3V"));
    }
}
