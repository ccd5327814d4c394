//! `colors` subcommand: list the color table.

use super::{ColorJson, ColorsOutput, Result, color, estimate, print_json};

pub(super) fn cmd_colors(json: bool) -> Result<()> {
    let colors: Vec<ColorJson> = color::COLOR_TABLE
        .iter()
        .map(|&(name, wavelength)| ColorJson {
            name: name.to_string(),
            wavelength_nm: wavelength * 1e9,
            forward_voltage: estimate::estimate_forward_voltage(wavelength),
        })
        .collect();

    if json {
        print_json(&ColorsOutput {
            count: colors.len(),
            colors,
        });
        return Ok(());
    }

    println!("  {:<8} {:>8}  {:>8}", "Color", "λ (nm)", "Vf (V)");
    for c in &colors {
        println!(
            "  {:<8} {:>8.0}  {:>8.3}",
            c.name, c.wavelength_nm, c.forward_voltage
        );
    }
    Ok(())
}
