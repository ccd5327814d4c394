//! CLI subcommands: resistor sizing, presets, color table, config.

mod colors;
mod config_cmd;
mod preset;
mod save;
mod size;
mod vf;

use std::path::Path;

use clap::Subcommand;
use serde::Serialize;

pub(super) use indicator_lib::color;
pub(super) use indicator_lib::config::{Config, Preset};
pub(super) use indicator_lib::error::Result;
pub(super) use indicator_lib::estimate;
pub(super) use indicator_lib::options;
pub(super) use indicator_lib::subcircuit::Subcircuit;
pub(super) use indicator_lib::{Indicator, IndicatorOptions, Value};

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2);
}

/// Print a JSON document, logging instead of panicking if serialization fails.
pub(super) fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("serializing output: {e}"),
    }
}

/// Load the config from `custom_path`, or the platform default.
pub(super) fn load_config(custom_path: Option<&Path>) -> Config {
    match custom_path {
        Some(path) => {
            let (config, warnings) = Config::load_from(path);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    }
}

/// Parse repeated `--opt KEY=VALUE` flags, later flags winning.
pub(super) fn parse_opts(opts: &[String]) -> Result<IndicatorOptions> {
    let mut named = IndicatorOptions::new();
    for opt in opts {
        let (key, value) = options::parse_assignment(opt)?;
        named.set(&key, value)?;
    }
    Ok(named)
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct SizingOutput {
    pub input_voltage: f64,
    pub led_wavelength: f64,
    pub led_wavelength_nm: f64,
    pub led_current: f64,
    pub forward_voltage: f64,
    pub forward_voltage_estimated: bool,
    pub resistor_ohms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcircuit: Option<Subcircuit>,
}

impl SizingOutput {
    pub(super) fn new(ind: &Indicator, subcircuit: Option<Subcircuit>) -> Result<Self> {
        Ok(SizingOutput {
            input_voltage: ind.input_voltage(),
            led_wavelength: ind.led_wavelength(),
            led_wavelength_nm: ind.led_wavelength() * 1e9,
            led_current: ind.led_current(),
            forward_voltage: ind.effective_forward_voltage(),
            forward_voltage_estimated: ind.led_forward_voltage().is_none(),
            resistor_ohms: ind.resistor_value()?,
            subcircuit,
        })
    }
}

#[derive(Serialize)]
pub(super) struct ColorJson {
    pub name: String,
    pub wavelength_nm: f64,
    pub forward_voltage: f64,
}

#[derive(Serialize)]
pub(super) struct ColorsOutput {
    pub count: usize,
    pub colors: Vec<ColorJson>,
}

#[derive(Serialize)]
pub(super) struct VfOutput {
    pub wavelength: f64,
    pub wavelength_nm: f64,
    pub forward_voltage: f64,
}

#[derive(Serialize)]
pub(super) struct SaveOutput {
    pub preset: String,
    pub config_file: Option<String>,
    pub replaced: bool,
    pub resistor_ohms: f64,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
}

#[derive(Subcommand)]
pub enum Command {
    /// Size the series resistor for an LED indicator
    Size {
        /// Supply voltage in volts
        #[arg(allow_negative_numbers = true)]
        input_voltage: f64,
        /// Color or wavelength in meters, then current in amps
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
        /// Named option (led_color, led_wavelength, led_current, led_forward_voltage)
        #[arg(long = "opt", value_name = "KEY=VALUE")]
        opts: Vec<String>,
        /// Also print the LED + resistor subcircuit
        #[arg(long)]
        netlist: bool,
    },

    /// Size a preset saved in the config file
    Preset {
        /// Preset name (a `[presets.<name>]` table)
        name: String,
        /// Also print the LED + resistor subcircuit
        #[arg(long)]
        netlist: bool,
    },

    /// Save an indicator as a preset in the config file
    Save {
        /// Preset name (stored as `[presets.<name>]`)
        name: String,
        /// Supply voltage in volts
        #[arg(allow_negative_numbers = true)]
        input_voltage: f64,
        /// Color or wavelength in meters, then current in amps
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
        /// Named option (led_color, led_wavelength, led_current, led_forward_voltage)
        #[arg(long = "opt", value_name = "KEY=VALUE")]
        opts: Vec<String>,
    },

    /// List known LED colors with wavelength and estimated forward voltage
    Colors,

    /// Estimate LED forward voltage from a color or wavelength
    Vf {
        /// Color name or wavelength in meters
        wavelength: String,
    },

    /// Show current configuration and file path
    Config,
}

pub fn run(cmd: Command, json: bool, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Command::Size {
            input_voltage,
            args,
            opts,
            netlist,
        } => {
            let config = load_config(config_path);
            size::cmd_size(input_voltage, &args, &opts, netlist, &config, json)
        }
        Command::Preset { name, netlist } => {
            let config = load_config(config_path);
            preset::cmd_preset(&name, netlist, &config, json)
        }
        Command::Save {
            name,
            input_voltage,
            args,
            opts,
        } => save::cmd_save(&name, input_voltage, &args, &opts, config_path, json),
        Command::Colors => colors::cmd_colors(json),
        Command::Vf { wavelength } => vf::cmd_vf(&wavelength, json),
        Command::Config => config_cmd::cmd_config(json, config_path),
    }
}

/// Print a sized indicator in human-readable or JSON form.
pub(super) fn print_sizing(ind: &Indicator, netlist: bool, json: bool) -> Result<()> {
    let subcircuit = if netlist {
        Some(ind.subcircuit()?)
    } else {
        None
    };

    if json {
        print_json(&SizingOutput::new(ind, subcircuit)?);
        return Ok(());
    }

    let ohms = ind.resistor_value()?;
    println!("{ind}");
    println!();
    let w = kv_width(&["Forward voltage:", "Resistor:"], &[]);
    let source = if ind.led_forward_voltage().is_some() {
        "given"
    } else {
        "estimated"
    };
    kv(
        "Forward voltage:",
        format_args!("{}V ({source})", ind.effective_forward_voltage()),
        w,
    );
    kv("Resistor:", format_args!("{ohms}Ω"), w);
    if let Some(sc) = subcircuit {
        println!();
        println!("Subcircuit:");
        for line in sc.to_string().lines() {
            println!("  {line}");
        }
    }
    Ok(())
}
