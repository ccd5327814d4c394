//! `save` subcommand: store an indicator as a named preset.

use std::path::Path;

use indicator_lib::IndicatorError;

use super::{
    Config, IndicatorOptions, Preset, Result, SaveOutput, Value, kv, kv_width, parse_opts,
    print_json,
};

pub(super) fn cmd_save(
    name: &str,
    input_voltage: f64,
    args: &[String],
    opts: &[String],
    custom_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (mut config, warnings) = match custom_path {
        Some(path) => Config::load_from(path),
        None => Config::load_with_warnings(),
    };
    // A file that failed to parse would be replaced by defaults on save.
    if let Some(warning) = warnings.into_iter().next() {
        return Err(IndicatorError::Config(format!(
            "not saving over an unreadable config: {warning}"
        )));
    }

    let positional: Vec<Value> = args.iter().map(|a| Value::parse(a)).collect();
    let mut options = IndicatorOptions::from_positional(&positional)?;
    options.overlay(parse_opts(opts)?);

    let preset = Preset::from_options(input_voltage, &options);
    let ohms = preset.to_indicator(&config.defaults())?.resistor_value()?;
    let replaced = config.insert_preset(name, preset)?.is_some();

    match custom_path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    let config_path = custom_path.map(|p| p.to_path_buf()).or_else(Config::path);
    log::debug!("saved preset {name} (replaced: {replaced})");

    if json {
        print_json(&SaveOutput {
            preset: name.to_string(),
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            replaced,
            resistor_ohms: ohms,
        });
        return Ok(());
    }

    let w = kv_width(&["Preset:", "Config file:", "Resistor:"], &[]);
    let status = if replaced { "replaced" } else { "added" };
    kv("Preset:", format_args!("{name} ({status})"), w);
    if let Some(p) = &config_path {
        kv("Config file:", p.display(), w);
    }
    kv("Resistor:", format_args!("{ohms}Ω"), w);
    Ok(())
}
