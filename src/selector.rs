use std::collections::HashSet;

use tracing::{debug, trace, Level};

use crate::channel::Channel;
use crate::preference::PreferenceTable;
use crate::protocol::ProtocolName;

/// What [`ProtocolSelector::prepare_channel`] decided for one channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// At least one of the two lists was absent; nothing was written.
    Skipped {
        supported_absent: bool,
        enabled_absent: bool,
    },
    /// This list, possibly empty, was written to the channel.
    Applied(Vec<ProtocolName>),
}

impl Selection {
    pub fn applied(&self) -> Option<&[ProtocolName]> {
        match self {
            Self::Applied(protocols) => Some(protocols),
            Self::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Reconciles a channel's enabled protocols with what it supports, ordered by
/// a [`PreferenceTable`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProtocolSelector {
    table: PreferenceTable,
}

impl ProtocolSelector {
    pub fn new(table: PreferenceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PreferenceTable {
        &self.table
    }

    /// Protocols present in both lists, in table order.
    ///
    /// Both inputs are treated as sets. Names outside the table are never
    /// selected.
    pub fn select(
        &self,
        supported: &[ProtocolName],
        enabled: &[ProtocolName],
    ) -> Vec<ProtocolName> {
        let supported: HashSet<&str> = supported.iter().map(ProtocolName::as_str).collect();
        let enabled: HashSet<&str> = enabled.iter().map(ProtocolName::as_str).collect();

        if tracing::enabled!(Level::TRACE) {
            for name in supported.intersection(&enabled) {
                if !self.table.contains(name) {
                    trace!(protocol = %name, "dropping protocol missing from preference table");
                }
            }
        }

        self.table
            .iter()
            .filter(|name| supported.contains(name.as_str()) && enabled.contains(name.as_str()))
            .cloned()
            .collect()
    }

    /// Reads the supported and enabled lists from `channel` and, when both
    /// are present, writes back their intersection in preference order.
    ///
    /// Both lists are always read once each. No write happens when either is
    /// absent. Channel errors are returned as-is, and nothing further is
    /// called on the channel after one.
    pub fn prepare_channel<C>(&self, channel: &mut C) -> Result<Selection, C::Error>
    where
        C: Channel + ?Sized,
    {
        let supported = channel.supported_protocols()?;
        let enabled = channel.enabled_protocols()?;

        let (supported, enabled) = match (supported, enabled) {
            (Some(supported), Some(enabled)) => (supported, enabled),
            (supported, enabled) => {
                let selection = Selection::Skipped {
                    supported_absent: supported.is_none(),
                    enabled_absent: enabled.is_none(),
                };
                debug!(?selection, "protocol lists unavailable, leaving channel untouched");
                return Ok(selection);
            }
        };

        let ordered = self.select(&supported, &enabled);
        debug!(
            supported = supported.len(),
            enabled = enabled.len(),
            protocols = ?ordered,
            "applying enabled protocols"
        );
        channel.set_enabled_protocols(&ordered)?;
        Ok(Selection::Applied(ordered))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::channel::MemoryChannel;
    use crate::protocol::ProtocolVersion;

    fn names(list: &[&str]) -> Vec<ProtocolName> {
        list.iter().copied().map(ProtocolName::from).collect()
    }

    #[test]
    fn select_orders_by_preference() {
        let selector = ProtocolSelector::default();
        let chosen = selector.select(
            &names(&["SSLv2Hello", "SSLv3", "TLSv1", "TLSv1.1", "TLSv1.2"]),
            &names(&["SSLv3", "TLSv1"]),
        );
        assert_eq!(chosen, ["TLSv1", "SSLv3"]);
    }

    #[test]
    fn select_drops_unknown_names() {
        let selector = ProtocolSelector::default();
        let chosen = selector.select(
            &names(&["TLSv1.3", "TLSv1.2", "DTLSv1.2"]),
            &names(&["DTLSv1.2", "TLSv1.3", "TLSv1.2"]),
        );
        assert_eq!(chosen, ["TLSv1.2"]);
    }

    #[test]
    fn custom_table() {
        let table =
            PreferenceTable::from_versions(&[ProtocolVersion::TlsV13, ProtocolVersion::TlsV12])
                .unwrap();
        let selector = ProtocolSelector::new(table);
        let chosen = selector.select(
            &names(&["TLSv1.2", "TLSv1.3", "TLSv1"]),
            &names(&["TLSv1", "TLSv1.2", "TLSv1.3"]),
        );
        assert_eq!(chosen, ["TLSv1.3", "TLSv1.2"]);
    }

    #[test]
    fn memory_channel_is_rewritten() {
        let selector = ProtocolSelector::default();
        let mut channel =
            MemoryChannel::with_protocols(["TLSv1.1", "TLSv1.2", "TLSv1.3"], ["TLSv1", "TLSv1.2"]);

        let selection = selector.prepare_channel(&mut channel).unwrap();
        assert_eq!(selection.applied(), Some(&names(&["TLSv1.2"])[..]));
        assert_eq!(channel.enabled(), Some(&names(&["TLSv1.2"])[..]));

        let again = selector.prepare_channel(&mut channel).unwrap();
        assert_eq!(again, selection);
        assert_eq!(channel.enabled(), Some(&names(&["TLSv1.2"])[..]));
    }

    #[test]
    fn memory_channel_without_lists() {
        let selector = ProtocolSelector::default();
        let mut channel = MemoryChannel::new(Some(names(&["TLSv1.2"])), None);

        let selection = selector.prepare_channel(&mut channel).unwrap();
        assert_eq!(
            selection,
            Selection::Skipped {
                supported_absent: false,
                enabled_absent: true
            }
        );
        assert!(selection.is_skipped());
        assert_eq!(channel.enabled(), None);
    }
}
