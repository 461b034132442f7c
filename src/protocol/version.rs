use std::fmt;

use crate::error::Result;

pub const PROTOCOL_VERSION_SIZE: usize = 2;
rfc_enum!(
    [Clone, Copy, Debug, PartialEq, Eq, Hash]
    (pub) ProtocolVersion: u16;
    Ssl2Hello(0x0002, "SSLv2Hello"),
    Ssl3(0x0300, "SSLv3"),
    TlsV10(0x0301, "TLSv1"),
    TlsV11(0x0302, "TLSv1.1"),
    TlsV12(0x0303, "TLSv1.2"),
    TlsV13(0x0304, "TLSv1.3"),
);

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ProtocolVersion {
    pub fn to_be_bytes(self) -> [u8; PROTOCOL_VERSION_SIZE] {
        (self as u16).to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; PROTOCOL_VERSION_SIZE]) -> Result<Self> {
        Self::try_from(u16::from_be_bytes(bytes))
    }
}
