use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use version::{ProtocolVersion, PROTOCOL_VERSION_SIZE};

mod version;

/// Name of a transport-security protocol version as a channel reports it,
/// e.g. `"TLSv1.2"`.
///
/// Names are opaque: only exact equality is meaningful. A name does not have
/// to correspond to a [`ProtocolVersion`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolName(String);

impl ProtocolName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The well-known version this name spells, if any.
    pub fn version(&self) -> Option<ProtocolVersion> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ProtocolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProtocolName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProtocolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProtocolName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ProtocolName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<ProtocolVersion> for ProtocolName {
    fn from(version: ProtocolVersion) -> Self {
        Self(version.name().to_owned())
    }
}

impl PartialEq<str> for ProtocolName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProtocolName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version_lookup() {
        assert_eq!(
            ProtocolName::from("TLSv1.1").version(),
            Some(ProtocolVersion::TlsV11)
        );
        assert_eq!(ProtocolName::from("DTLSv1.2").version(), None);
        assert_eq!(
            ProtocolName::from(ProtocolVersion::Ssl2Hello),
            ProtocolName::new("SSLv2Hello")
        );
    }

    #[test]
    fn deserializes_from_plain_strings() {
        let decoded: Wrapper = toml::from_str(r#"names = ["TLSv1.2", "SSLv3"]"#).unwrap();
        assert_eq!(decoded.names, ["TLSv1.2", "SSLv3"]);
    }

    #[derive(Deserialize)]
    struct Wrapper {
        names: Vec<ProtocolName>,
    }
}
