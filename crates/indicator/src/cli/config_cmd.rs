//! `config` subcommand: show current configuration and file path.

use std::path::Path;

use super::{Config, ConfigOutput, Result, kv, kv_indent, kv_width, load_config, print_json};

pub(super) fn cmd_config(json: bool, custom_path: Option<&Path>) -> Result<()> {
    let config = load_config(custom_path);
    let config_path = custom_path.map(|p| p.to_path_buf()).or_else(Config::path);
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());

    if json {
        print_json(&ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            settings: config,
        });
        return Ok(());
    }

    let w = kv_width(&["Config file:"], &["default_color:", "default_current:"]);

    match &config_path {
        Some(p) => {
            if config_exists {
                kv("Config file:", format_args!("{} (loaded)", p.display()), w);
            } else {
                kv(
                    "Config file:",
                    format_args!("{} (not found, using defaults)", p.display()),
                    w,
                );
            }
        }
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    kv_indent("default_color:", &config.default_color, w);
    kv_indent("default_current:", format_args!("{}A", config.default_current), w);
    println!();

    if config.presets.is_empty() {
        println!("Presets: (none)");
    } else {
        println!("Presets:");
        for (name, preset) in &config.presets {
            let opts: Vec<String> = preset
                .options
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            println!("  {name}: {}V {}", preset.input_voltage, opts.join(" "));
        }
    }

    if let Err(errors) = config.validate() {
        println!();
        println!("Problems:");
        for e in &errors {
            println!("  {e}");
        }
    }
    Ok(())
}
