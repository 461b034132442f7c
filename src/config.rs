use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SelectError};
use crate::preference::PreferenceTable;
use crate::selector::ProtocolSelector;

/// File-level settings for a [`ProtocolSelector`].
///
/// ```toml
/// # most-preferred first
/// preference = ["TLSv1.2", "TLSv1.1", "TLSv1"]
/// ```
///
/// A missing `preference` key keeps the standard table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    pub preference: PreferenceTable,
}

impl SelectorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SelectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            protocols = config.preference.len(),
            "loaded selector config"
        );
        Ok(config)
    }

    pub fn into_selector(self) -> ProtocolSelector {
        ProtocolSelector::new(self.preference)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_standard_table() {
        let config = SelectorConfig::from_toml_str("").unwrap();
        assert_eq!(config.preference, PreferenceTable::standard());
    }

    #[test]
    fn custom_preference() {
        let config =
            SelectorConfig::from_toml_str(r#"preference = ["TLSv1.3", "TLSv1.2"]"#).unwrap();
        let selector = config.into_selector();
        assert_eq!(selector.table().as_slice(), ["TLSv1.3", "TLSv1.2"]);
    }

    #[test]
    fn invalid_tables_are_rejected() {
        for text in [
            r#"preference = []"#,
            r#"preference = ["TLSv1", "TLSv1"]"#,
            r#"preference = ["TLSv1", ""]"#,
            r#"preferences = ["TLSv1"]"#,
        ] {
            assert!(
                matches!(
                    SelectorConfig::from_toml_str(text),
                    Err(SelectError::Config(_))
                ),
                "accepted {text}"
            );
        }
    }

    #[test]
    fn missing_file() {
        let path = Path::new("definitely/not/here/selector.toml");
        match SelectorConfig::from_path(path) {
            Err(SelectError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
