use std::convert::Infallible;

use crate::protocol::ProtocolName;

/// The three calls a transport-security channel exposes for protocol
/// configuration.
///
/// Implementations wrap whatever concrete socket type the embedder uses.
/// Errors are the channel's own; callers of
/// [`ProtocolSelector::prepare_channel`](crate::ProtocolSelector::prepare_channel)
/// receive them unchanged.
pub trait Channel {
    type Error;

    /// Protocols the channel is able to use. `None` when unknown.
    fn supported_protocols(&self) -> Result<Option<Vec<ProtocolName>>, Self::Error>;

    /// Protocols currently turned on. `None` when unknown.
    fn enabled_protocols(&self) -> Result<Option<Vec<ProtocolName>>, Self::Error>;

    fn set_enabled_protocols(&mut self, protocols: &[ProtocolName]) -> Result<(), Self::Error>;
}

impl<C: Channel + ?Sized> Channel for &mut C {
    type Error = C::Error;

    fn supported_protocols(&self) -> Result<Option<Vec<ProtocolName>>, Self::Error> {
        (**self).supported_protocols()
    }

    fn enabled_protocols(&self) -> Result<Option<Vec<ProtocolName>>, Self::Error> {
        (**self).enabled_protocols()
    }

    fn set_enabled_protocols(&mut self, protocols: &[ProtocolName]) -> Result<(), Self::Error> {
        (**self).set_enabled_protocols(protocols)
    }
}

/// Channel backed by two in-memory lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryChannel {
    supported: Option<Vec<ProtocolName>>,
    enabled: Option<Vec<ProtocolName>>,
}

impl MemoryChannel {
    pub fn new(supported: Option<Vec<ProtocolName>>, enabled: Option<Vec<ProtocolName>>) -> Self {
        Self { supported, enabled }
    }

    pub fn with_protocols<S, E, N>(supported: S, enabled: E) -> Self
    where
        S: IntoIterator<Item = N>,
        E: IntoIterator<Item = N>,
        N: Into<ProtocolName>,
    {
        Self {
            supported: Some(supported.into_iter().map(Into::into).collect()),
            enabled: Some(enabled.into_iter().map(Into::into).collect()),
        }
    }

    pub fn supported(&self) -> Option<&[ProtocolName]> {
        self.supported.as_deref()
    }

    pub fn enabled(&self) -> Option<&[ProtocolName]> {
        self.enabled.as_deref()
    }
}

impl Channel for MemoryChannel {
    type Error = Infallible;

    fn supported_protocols(&self) -> Result<Option<Vec<ProtocolName>>, Self::Error> {
        Ok(self.supported.clone())
    }

    fn enabled_protocols(&self) -> Result<Option<Vec<ProtocolName>>, Self::Error> {
        Ok(self.enabled.clone())
    }

    fn set_enabled_protocols(&mut self, protocols: &[ProtocolName]) -> Result<(), Self::Error> {
        self.enabled = Some(protocols.to_vec());
        Ok(())
    }
}
