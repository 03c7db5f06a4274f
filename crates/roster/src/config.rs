//! Config resolution for CLI commands: file and environment via
//! `roster-config`, then global flags on top.

use std::path::PathBuf;

use roster_config::Config;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The config file this invocation reads: `--config` or the platform default.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(roster_config::config_path)
}

/// Load the config file (missing is fine) and apply flag overrides.
pub fn resolve(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = roster_config::load_config_from(&config_path(global))?;
    apply_overrides(&mut cfg, global);
    Ok(cfg)
}

fn apply_overrides(cfg: &mut Config, global: &GlobalOpts) {
    if let Some(url) = &global.base_url {
        cfg.api.base_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        cfg.api.timeout = timeout;
    }
    if global.insecure {
        cfg.api.insecure = true;
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn flags_override_file_values() {
        let cli = Cli::try_parse_from([
            "roster",
            "--base-url",
            "http://localhost:4000",
            "--timeout",
            "5",
            "-k",
            "config",
            "show",
        ])
        .expect("valid args");

        let mut cfg = Config::default();
        apply_overrides(&mut cfg, &cli.global);
        assert_eq!(cfg.api.base_url, "http://localhost:4000");
        assert_eq!(cfg.api.timeout, 5);
        assert!(cfg.api.insecure);
        assert_eq!(cfg.api.page_size, 10, "untouched");
    }
}
