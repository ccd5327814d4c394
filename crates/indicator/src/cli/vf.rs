//! `vf` subcommand: estimate forward voltage for a color or wavelength.

use super::{Indicator, Result, Value, VfOutput, kv, kv_width, print_json};

pub(super) fn cmd_vf(wavelength: &str, json: bool) -> Result<()> {
    // Reuse the indicator's wavelength validation for color lookup.
    let mut ind = Indicator::new(0.0);
    ind.set_led_wavelength(Value::parse(wavelength))?;
    let output = VfOutput {
        wavelength: ind.led_wavelength(),
        wavelength_nm: ind.led_wavelength() * 1e9,
        forward_voltage: ind.effective_forward_voltage(),
    };

    if json {
        print_json(&output);
        return Ok(());
    }

    let w = kv_width(&["Wavelength:", "Forward voltage:"], &[]);
    kv("Wavelength:", format_args!("{}nm", output.wavelength_nm), w);
    kv(
        "Forward voltage:",
        format_args!("{}V (estimated)", output.forward_voltage),
        w,
    );
    Ok(())
}
