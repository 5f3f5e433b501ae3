use pokertrack_engine::seat::MAX_SEATS;
use pokertrack_engine::stats::HandCounting;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "POKERTRACK_CONFIG";
pub const PLAYERS_ENV: &str = "POKERTRACK_PLAYERS";
pub const DEALER_ENV: &str = "POKERTRACK_DEALER";
pub const HAND_COUNTING_ENV: &str = "POKERTRACK_HAND_COUNTING";
pub const LOG_ENV: &str = "POKERTRACK_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Player names in seat order; an empty entry leaves that seat free
    pub players: Vec<String>,
    pub dealer: Option<usize>,
    pub hand_counting: HandCounting,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub dealer: ValueSource,
    pub hand_counting: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            dealer: ValueSource::Default,
            hand_counting: ValueSource::Default,
            log_level: ValueSource::Default,
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
            players: Vec::new(),
            dealer: None,
            hand_counting: HandCounting::default(),
            log_level: "warn".into(),
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.dealer {
            cfg.dealer = Some(v);
            sources.dealer = ValueSource::File;
        }
        if let Some(v) = f.hand_counting {
            cfg.hand_counting = v;
            sources.hand_counting = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Ok(players) = std::env::var(PLAYERS_ENV)
        && !players.is_empty()
    {
        cfg.players = parse_players(&players);
        sources.players = ValueSource::Env;
    }
    if let Ok(dealer) = std::env::var(DEALER_ENV)
        && !dealer.is_empty()
    {
        cfg.dealer = Some(
            dealer
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid dealer".into()))?,
        );
        sources.dealer = ValueSource::Env;
    }
    if let Ok(counting) = std::env::var(HAND_COUNTING_ENV)
        && !counting.is_empty()
    {
        cfg.hand_counting = counting.parse().map_err(ConfigError::Invalid)?;
        sources.hand_counting = ValueSource::Env;
    }
    if let Ok(level) = std::env::var(LOG_ENV)
        && !level.is_empty()
    {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Comma separated names in seat order, blanks kept as free seats.
pub fn parse_players(list: &str) -> Vec<String> {
    list.split(',').map(|name| name.trim().to_string()).collect()
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<Vec<String>>,
    #[serde(default)]
    dealer: Option<usize>,
    #[serde(default)]
    hand_counting: Option<HandCounting>,
    #[serde(default)]
    log_level: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players.len() > MAX_SEATS {
        return Err(ConfigError::Invalid(format!(
            "at most {} players",
            MAX_SEATS
        )));
    }
    if let Some(dealer) = cfg.dealer
        && dealer >= MAX_SEATS
    {
        return Err(ConfigError::Invalid(format!(
            "dealer must be < {}",
            MAX_SEATS
        )));
    }
    Ok(())
}
