use super::{read_slice, read_u16};
use crate::DomainError;

pub const HEADER_LEN: usize = 12;

const QR_BIT: u16 = 0x8000;
const OPCODE_AND_RD: u16 = 0x7900;
const RCODE_SERVFAIL: u16 = 0x0002;

/// The fixed 12-byte DNS header.
///
/// `flags` is carried as an opaque 16-bit value; the relay never looks at
/// individual bits except when it has to synthesize a SERVFAIL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub packet_id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    /// Header for an outbound message; authority and additional counts are always zero.
    pub fn new(packet_id: u16, flags: u16, qd_count: u16, an_count: u16) -> Self {
        Self {
            packet_id,
            flags,
            qd_count,
            an_count,
            ns_count: 0,
            ar_count: 0,
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, DomainError> {
        read_slice(buf, 0, HEADER_LEN)?;

        Ok(Self {
            packet_id: read_u16(buf, 0)?,
            flags: read_u16(buf, 2)?,
            qd_count: read_u16(buf, 4)?,
            an_count: read_u16(buf, 6)?,
            ns_count: read_u16(buf, 8)?,
            ar_count: read_u16(buf, 10)?,
        })
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..2].copy_from_slice(&self.packet_id.to_be_bytes());
        out[2..4].copy_from_slice(&self.flags.to_be_bytes());
        out[4..6].copy_from_slice(&self.qd_count.to_be_bytes());
        out[6..8].copy_from_slice(&self.an_count.to_be_bytes());
        out[8..10].copy_from_slice(&self.ns_count.to_be_bytes());
        out[10..12].copy_from_slice(&self.ar_count.to_be_bytes());
        out
    }

    /// Flags for a SERVFAIL reply to a query carrying `query_flags`:
    /// QR set, opcode and RD echoed, RCODE = 2.
    pub fn servfail_flags(query_flags: u16) -> u16 {
        QR_BIT | (query_flags & OPCODE_AND_RD) | RCODE_SERVFAIL
    }
}

pub fn decode_header(buf: &[u8]) -> Result<Header, DomainError> {
    Header::decode(buf)
}

pub fn encode_header(packet_id: u16, flags: u16, qd_count: u16, an_count: u16) -> [u8; HEADER_LEN] {
    Header::new(packet_id, flags, qd_count, an_count).encode()
}
