use serde::{Deserialize, Serialize};
use std::fs;

use justone_engine::game::GuessPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: Vec<String>,
    pub policy: GuessPolicy,
    pub forbidden_roots: Vec<String>,
    pub words: Option<String>,
    pub log: String,
    pub seed: Option<u64>,
    pub allow_replay: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub policy: ValueSource,
    pub forbidden_roots: ValueSource,
    pub words: ValueSource,
    pub log: ValueSource,
    pub seed: ValueSource,
    pub allow_replay: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            policy: ValueSource::Default,
            forbidden_roots: ValueSource::Default,
            words: ValueSource::Default,
            log: ValueSource::Default,
            seed: ValueSource::Default,
            allow_replay: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: ["Alice", "Bob", "Charlie", "Diana", "Eve"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            policy: GuessPolicy::Single,
            forbidden_roots: Vec::new(),
            words: None,
            log: "game_log.jsonl".into(),
            seed: None,
            allow_replay: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves the configuration: defaults, overlaid by the TOML file named
/// in `JUSTONE_CONFIG`, overlaid by the `JUSTONE_SEED` env var. Tracks the
/// source of every field for the `cfg` command.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("JUSTONE_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.policy {
            cfg.policy = v;
            sources.policy = ValueSource::File;
        }
        if let Some(v) = f.forbidden_roots {
            cfg.forbidden_roots = v;
            sources.forbidden_roots = ValueSource::File;
        }
        if let Some(v) = f.words {
            cfg.words = Some(v);
            sources.words = ValueSource::File;
        }
        if let Some(v) = f.log {
            cfg.log = v;
            sources.log = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.allow_replay {
            cfg.allow_replay = v;
            sources.allow_replay = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("JUSTONE_SEED")
        && !seed.is_empty()
    {
        let v = seed.parse::<u64>().map_err(|_| {
            ConfigError::Invalid("JUSTONE_SEED must be an unsigned integer".to_string())
        })?;
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }

    if cfg.players.len() < 2 {
        return Err(ConfigError::Invalid(
            "at least 2 players are required".to_string(),
        ));
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    players: Option<Vec<String>>,
    policy: Option<GuessPolicy>,
    forbidden_roots: Option<Vec<String>>,
    words: Option<String>,
    log: Option<String>,
    seed: Option<u64>,
    allow_replay: Option<bool>,
}
