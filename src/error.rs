use std::path::PathBuf;

use thiserror::Error;

use crate::protocol::ProtocolName;

pub type Result<T> = std::result::Result<T, SelectError>;

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("unspecified {kind} value: {value:#06x}")]
    UnknownCode { kind: &'static str, value: u64 },

    #[error("unspecified {kind} name: {name:?}")]
    UnknownName { kind: &'static str, name: String },

    #[error("preference table is empty")]
    EmptyTable,

    #[error("preference table entry {index} is an empty name")]
    EmptyName { index: usize },

    #[error("protocol {name} appears more than once in the preference table")]
    DuplicateName { name: ProtocolName },

    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
