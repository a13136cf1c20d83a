//! Table configuration.
//!
//! Values resolve in layers: built-in defaults, then the TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables, then command-line
//! flags. Each value remembers the layer it came from so `holdem cfg` can
//! report it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::io_utils::read_text;

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub max_hands: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 4,
            starting_stack: 1000,
            small_blind: 5,
            big_blind: 10,
            seed: None,
            max_hands: Some(200),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub max_hands: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            max_hands: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given as command-line flags; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub players: Option<usize>,
    pub starting_stack: Option<u32>,
    pub small_blind: Option<u32>,
    pub big_blind: Option<u32>,
    pub seed: Option<u64>,
    pub max_hands: Option<u32>,
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_hands: Option<u32>,
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let file = match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.is_empty() => Some(read_text(path)?),
        _ => None,
    };
    resolve(file.as_deref(), |key| std::env::var(key).ok(), overrides)
}

/// Layers `file` (TOML text), variables from `env` and `overrides` over the
/// defaults, then validates the result.
pub fn resolve(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
    overrides: &Overrides,
) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    let f: FileConfig = match file {
        Some(text) => toml::from_str(text)?,
        None => FileConfig::default(),
    };
    let layer = Layer {
        players: f.players,
        starting_stack: f.starting_stack,
        small_blind: f.small_blind,
        big_blind: f.big_blind,
        seed: f.seed,
        max_hands: f.max_hands,
    };
    layer.apply(&mut cfg, &mut sources, ValueSource::File);

    let layer = Layer {
        players: env_value(&env, "HOLDEM_PLAYERS")?,
        starting_stack: env_value(&env, "HOLDEM_STARTING_STACK")?,
        small_blind: env_value(&env, "HOLDEM_SMALL_BLIND")?,
        big_blind: env_value(&env, "HOLDEM_BIG_BLIND")?,
        seed: env_value(&env, "HOLDEM_SEED")?,
        max_hands: env_value(&env, "HOLDEM_MAX_HANDS")?,
    };
    layer.apply(&mut cfg, &mut sources, ValueSource::Env);

    let layer = Layer {
        players: overrides.players,
        starting_stack: overrides.starting_stack,
        small_blind: overrides.small_blind,
        big_blind: overrides.big_blind,
        seed: overrides.seed,
        max_hands: overrides.max_hands,
    };
    layer.apply(&mut cfg, &mut sources, ValueSource::Cli);

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

struct Layer {
    players: Option<usize>,
    starting_stack: Option<u32>,
    small_blind: Option<u32>,
    big_blind: Option<u32>,
    seed: Option<u64>,
    max_hands: Option<u32>,
}

impl Layer {
    fn apply(self, cfg: &mut Config, sources: &mut ConfigSources, from: ValueSource) {
        fn set<T>(slot: &mut T, source: &mut ValueSource, value: Option<T>, from: ValueSource) {
            if let Some(v) = value {
                *slot = v;
                *source = from;
            }
        }
        set(&mut cfg.players, &mut sources.players, self.players, from);
        set(
            &mut cfg.starting_stack,
            &mut sources.starting_stack,
            self.starting_stack,
            from,
        );
        set(&mut cfg.small_blind, &mut sources.small_blind, self.small_blind, from);
        set(&mut cfg.big_blind, &mut sources.big_blind, self.big_blind, from);
        set(&mut cfg.seed, &mut sources.seed, self.seed.map(Some), from);
        set(&mut cfg.max_hands, &mut sources.max_hands, self.max_hands.map(Some), from);
    }
}

/// Unset and empty variables are both ignored.
fn env_value<T: FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match env(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", key, raw))),
        _ => Ok(None),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.players as u64 * u64::from(cfg.starting_stack) > u64::from(u32::MAX) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} seats of {} chips exceed {} chips in total",
            cfg.players,
            cfg.starting_stack,
            u32::MAX
        )));
    }
    if cfg.small_blind == 0 || cfg.small_blind > cfg.big_blind {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: need 0 < small_blind <= big_blind (got {}/{})",
            cfg.small_blind, cfg.big_blind
        )));
    }
    if cfg.max_hands == Some(0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_hands must be >=1".into(),
        ));
    }
    Ok(())
}
