//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! configuration with the source of every value (default, environment, or
//! configuration file) as pretty-printed JSON.

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON on the output stream.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "policy": {
            "value": config.policy,
            "source": sources.policy,
        },
        "forbidden_roots": {
            "value": config.forbidden_roots,
            "source": sources.forbidden_roots,
        },
        "words": {
            "value": config.words,
            "source": sources.words,
        },
        "log": {
            "value": config.log,
            "source": sources.log,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "allow_replay": {
            "value": config.allow_replay,
            "source": sources.allow_replay,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: tests touching process env are serialized via #[serial].
        unsafe {
            std::env::remove_var("JUSTONE_CONFIG");
            std::env::remove_var("JUSTONE_SEED");
        }
    }

    #[test]
    #[serial]
    fn test_cfg_displays_every_field_with_a_source() {
        clear_env();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");

        for field in [
            "players",
            "policy",
            "forbidden_roots",
            "words",
            "log",
            "seed",
            "allow_replay",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
            assert_eq!(json[field]["source"], "default");
        }
        assert_eq!(json["policy"]["value"], "single");
        assert_eq!(json["log"]["value"], "game_log.jsonl");
    }

    #[test]
    #[serial]
    fn test_cfg_reflects_env_seed() {
        clear_env();
        // SAFETY: serialized via #[serial].
        unsafe {
            std::env::set_var("JUSTONE_SEED", "123");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();
        assert!(result.is_ok());

        let json: serde_json::Value =
            serde_json::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(json["seed"]["value"], 123);
        assert_eq!(json["seed"]["source"], "env");
    }
}
