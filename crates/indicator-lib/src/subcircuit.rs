//! Two-part subcircuit for a sized indicator.
//!
//! `VIN` drives the LED anode, the LED cathode feeds the series resistor, and
//! the resistor returns to `VOUT`. Rendered one element per line as
//! `<designator> <net> <net> <value>`. The LED value carries the wavelength in
//! meters in exponent form, e.g. `LAM_5.3e-7`.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::indicator::Indicator;

pub const NET_IN: &str = "VIN";
pub const NET_MID: &str = "LED_K";
pub const NET_OUT: &str = "VOUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Led,
    Resistor,
}

/// One two-terminal part and the nets its pins land on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub designator: String,
    pub kind: PartKind,
    pub value: String,
    pub pins: [String; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subcircuit {
    pub nets: Vec<String>,
    pub parts: Vec<Part>,
}

impl Indicator {
    /// Describe the LED and its sized resistor as a subcircuit.
    ///
    /// Fails whenever [`Indicator::resistor_value`] fails.
    pub fn subcircuit(&self) -> Result<Subcircuit> {
        let ohms = self.resistor_value()?;
        let led = Part {
            designator: "D1".into(),
            kind: PartKind::Led,
            value: format!("LAM_{:e}", self.led_wavelength()),
            pins: [NET_IN.into(), NET_MID.into()],
        };
        let resistor = Part {
            designator: "R1".into(),
            kind: PartKind::Resistor,
            value: format!("{ohms}R"),
            pins: [NET_MID.into(), NET_OUT.into()],
        };
        Ok(Subcircuit {
            nets: vec![NET_IN.into(), NET_MID.into(), NET_OUT.into()],
            parts: vec![led, resistor],
        })
    }
}

impl fmt::Display for Subcircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{} {} {} {}",
                part.designator, part.pins[0], part.pins[1], part.value
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IndicatorError, IndicatorOptions};

    fn red_5v() -> Indicator {
        let mut ind = Indicator::new(5.0);
        ind.set_led_wavelength("red").unwrap();
        ind
    }

    #[test]
    fn led_then_resistor() {
        let sc = red_5v().subcircuit().unwrap();
        assert_eq!(sc.parts.len(), 2);
        assert_eq!(sc.parts[0].kind, PartKind::Led);
        assert_eq!(sc.parts[1].kind, PartKind::Resistor);
    }

    #[test]
    fn parts_share_middle_net() {
        let sc = red_5v().subcircuit().unwrap();
        assert_eq!(sc.parts[0].pins, [NET_IN.to_string(), NET_MID.to_string()]);
        assert_eq!(sc.parts[1].pins, [NET_MID.to_string(), NET_OUT.to_string()]);
        assert_eq!(sc.nets, vec!["VIN", "LED_K", "VOUT"]);
    }

    #[test]
    fn resistor_value_in_part() {
        let ind = red_5v();
        let sc = ind.subcircuit().unwrap();
        assert_eq!(sc.parts[1].value, format!("{}R", ind.resistor_value().unwrap()));
    }

    #[test]
    fn led_value_carries_wavelength() {
        let sc = red_5v().subcircuit().unwrap();
        assert_eq!(sc.parts[0].value, "LAM_6.5e-7");
    }

    #[test]
    fn fails_like_resistor_value() {
        let ind = Indicator::with_options(1.0, IndicatorOptions::new()).unwrap();
        assert!(matches!(
            ind.subcircuit(),
            Err(IndicatorError::InsufficientSupplyVoltage { .. })
        ));
    }

    #[test]
    fn display_one_line_per_part() {
        let mut ind = Indicator::new(5.0);
        ind.set_led_forward_voltage(Some(2.0));
        ind.set_led_current(0.01).unwrap();
        let text = ind.subcircuit().unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("D1 VIN LED_K LAM_"), "got: {}", lines[0]);
        assert_eq!(lines[1], format!("R1 LED_K VOUT {}R", (5.0 - 2.0) / 0.01));
    }

    #[test]
    fn serializes_kind_lowercase() {
        let sc = red_5v().subcircuit().unwrap();
        let json = serde_json::to_value(&sc).unwrap();
        assert_eq!(json["parts"][0]["kind"], "led");
        assert_eq!(json["parts"][1]["kind"], "resistor");
        assert_eq!(json["parts"][1]["designator"], "R1");
    }
}
