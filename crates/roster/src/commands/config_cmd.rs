//! `roster config`: path, show, init.

use roster_config::Config;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path(global).display().to_string(), global.quiet);
            Ok(())
        }
        ConfigCommand::Show => {
            let cfg = config::resolve(global)?;
            output::print_output(&render_config(&cfg, global.output)?, global.quiet);
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let path = config::config_path(global);
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            roster_config::save_config_to(&path, &Config::default())?;
            output::print_output(&format!("Wrote {}", path.display()), global.quiet);
            Ok(())
        }
    }
}

fn render_config(cfg: &Config, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => output::render_json(cfg, false),
        OutputFormat::JsonCompact => output::render_json(cfg, true),
        OutputFormat::Yaml => output::render_yaml(cfg),
        OutputFormat::Table | OutputFormat::Plain => toml::to_string_pretty(cfg)
            .map(|s| s.trim_end().to_owned())
            .map_err(|e| CliError::Output(e.to_string())),
    }
}
