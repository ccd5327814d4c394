//! `size` subcommand: size the series resistor from command-line values.

use super::{Config, Indicator, Result, Value, parse_opts, print_sizing};

pub(super) fn cmd_size(
    input_voltage: f64,
    args: &[String],
    opts: &[String],
    netlist: bool,
    config: &Config,
    json: bool,
) -> Result<()> {
    let positional: Vec<Value> = args.iter().map(|a| Value::parse(a)).collect();
    let mut named = parse_opts(opts)?;

    // Config defaults only fill what neither positional nor named values set.
    let mut defaults = config.defaults();
    if positional.first().is_some() || named.led_wavelength.is_some() {
        defaults.led_wavelength = None;
    }
    if positional.get(1).is_some() || named.led_current.is_some() {
        defaults.led_current = None;
    }
    named.fill_from(&defaults);

    let ind = Indicator::from_args(input_voltage, &positional, named)?;
    print_sizing(&ind, netlist, json)
}
