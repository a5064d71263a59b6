use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Server settings, read from the environment (and an optional `.env` file).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Worker thread count; actix picks one per core when unset.
    pub workers: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl AppConfig {
    /// Reads `DUNGEON_HOST`, `DUNGEON_PORT` and `DUNGEON_WORKERS`.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Could not load .env file: {e}");
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("DUNGEON_HOST").unwrap_or(defaults.host),
            port: parse_or("DUNGEON_PORT", lookup("DUNGEON_PORT"), defaults.port),
            workers: lookup("DUNGEON_WORKERS").and_then(|raw| match raw.parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    log::warn!("Ignoring invalid DUNGEON_WORKERS value '{raw}'");
                    None
                }
            }),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    key: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {key} value '{raw}', using {default}");
            default
        }),
    }
}
