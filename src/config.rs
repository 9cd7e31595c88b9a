use std::env;
use std::path::PathBuf;

pub const INSTRUCTIONS_VAR: &str = "WONDERLAND_INSTRUCTIONS";
pub const MAPS_VAR: &str = "WONDERLAND_MAPS";

const DEFAULT_INSTRUCTIONS: &str = "instructions.txt";
const DEFAULT_MAPS: &str = "maps.txt";

/// Where the game finds its external text files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub instructions_path: PathBuf,
    pub reveal_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            instructions_path: PathBuf::from(DEFAULT_INSTRUCTIONS),
            reveal_path: PathBuf::from(DEFAULT_MAPS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Config {
            instructions_path: path(INSTRUCTIONS_VAR, DEFAULT_INSTRUCTIONS),
            reveal_path: path(MAPS_VAR, DEFAULT_MAPS),
        }
    }
}
