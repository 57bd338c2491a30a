//! Error types for the host edge of the game.
//!
//! Gameplay itself never fails: an empty magazine, an off-screen entity or
//! an unknown key are ordinary no-op branches. Only terminal I/O and
//! configuration loading can go wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Terminal or writer failure while rendering or reading input
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Parsed fine but the values cannot drive a session
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
