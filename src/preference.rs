use std::collections::HashSet;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectError};
use crate::protocol::{ProtocolName, ProtocolVersion};

/// Default preference order, most-preferred first.
pub const DEFAULT_PREFERENCE: [ProtocolVersion; 5] = [
    ProtocolVersion::TlsV12,
    ProtocolVersion::TlsV11,
    ProtocolVersion::TlsV10,
    ProtocolVersion::Ssl3,
    ProtocolVersion::Ssl2Hello,
];

/// Ordered allow-list of protocol names, most-preferred first.
///
/// A table is never empty and never holds the same name twice; both are
/// checked on construction, including when deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProtocolName>", into = "Vec<ProtocolName>")]
pub struct PreferenceTable {
    names: Vec<ProtocolName>,
}

impl PreferenceTable {
    pub fn new<I, N>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<ProtocolName>,
    {
        let names: Vec<ProtocolName> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SelectError::EmptyTable);
        }
        let mut seen = HashSet::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name.as_str().is_empty() {
                return Err(SelectError::EmptyName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(SelectError::DuplicateName { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    pub fn from_versions(versions: &[ProtocolVersion]) -> Result<Self> {
        Self::new(versions.iter().copied())
    }

    /// The built-in table: TLSv1.2, TLSv1.1, TLSv1, SSLv3, SSLv2Hello.
    pub fn standard() -> Self {
        Self {
            names: DEFAULT_PREFERENCE
                .iter()
                .copied()
                .map(ProtocolName::from)
                .collect(),
        }
    }

    /// Position of `name` in the table; 0 is the most preferred.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|entry| entry == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rank(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ProtocolName> {
        self.names.iter()
    }

    pub fn as_slice(&self) -> &[ProtocolName] {
        &self.names
    }
}

impl Default for PreferenceTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<ProtocolName>> for PreferenceTable {
    type Error = SelectError;

    fn try_from(names: Vec<ProtocolName>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<PreferenceTable> for Vec<ProtocolName> {
    fn from(table: PreferenceTable) -> Self {
        table.names
    }
}

impl<'a> IntoIterator for &'a PreferenceTable {
    type Item = &'a ProtocolName;
    type IntoIter = slice::Iter<'a, ProtocolName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
