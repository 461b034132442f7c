#[macro_use]
mod rfc_enum;

pub mod channel;
pub mod config;
pub mod error;
pub mod preference;
pub mod protocol;
pub mod selector;

pub use channel::{Channel, MemoryChannel};
pub use config::SelectorConfig;
pub use error::{Result, SelectError};
pub use preference::{PreferenceTable, DEFAULT_PREFERENCE};
pub use protocol::{ProtocolName, ProtocolVersion};
pub use selector::{ProtocolSelector, Selection};
