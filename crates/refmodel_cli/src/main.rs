//! Runs every example scenario and prints its output.
//!
//! Environment:
//! - `REFMODEL_LOG_LEVEL`: trace|debug|info|warn|error (build-mode default).
//! - `REFMODEL_LOG_DIR`: absolute directory; file logging is off when unset.

use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "REFMODEL_LOG_LEVEL";
const LOG_DIR_ENV: &str = "REFMODEL_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliConfig {
    log_level: String,
    log_dir: Option<String>,
}

impl CliConfig {
    fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: lookup(LOG_LEVEL_ENV)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| refmodel_core::default_log_level().to_string()),
            log_dir: lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty()),
        }
    }
}

fn main() -> ExitCode {
    let config = CliConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = refmodel_core::init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("refmodel_core version={}", refmodel_core::core_version());
    let mut failed = false;
    for scenario in refmodel_core::scenarios() {
        println!("== {}", scenario.name);
        match scenario.run() {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(err) => {
                eprintln!("{err}");
                failed = true;
            }
        }
    }

    log::logger().flush();
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;

    #[test]
    fn config_defaults_when_unset_or_blank() {
        let env = HashMap::from([(LOG_DIR_ENV, "  ".to_string())]);
        let config = CliConfig::from_lookup(|key| env.get(key).cloned());
        assert_eq!(config.log_level, refmodel_core::default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn config_reads_both_variables() {
        let env = HashMap::from([
            (LOG_LEVEL_ENV, "warn".to_string()),
            (LOG_DIR_ENV, "/tmp/refmodel-logs".to_string()),
        ]);
        let config = CliConfig::from_lookup(|key| env.get(key).cloned());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/refmodel-logs"));
    }
}
