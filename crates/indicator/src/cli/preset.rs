//! `preset` subcommand: size an indicator saved in the config file.

use super::{Config, Result, print_sizing};

pub(super) fn cmd_preset(name: &str, netlist: bool, config: &Config, json: bool) -> Result<()> {
    let ind = config.preset(name)?;
    log::debug!("preset {name}: {ind:?}");
    print_sizing(&ind, netlist, json)
}
