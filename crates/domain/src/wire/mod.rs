//! DNS wire format (RFC 1035 §4.1)
//!
//! Only what a splitting relay needs: the fixed header, question entries,
//! label sequences with compression pointers, and resource records as opaque
//! byte spans. All reads are bounds-checked and fail with
//! [`DomainError::ShortBuffer`] instead of panicking.

pub mod header;
pub mod name;
pub mod question;
pub mod record;

pub use header::{decode_header, encode_header, Header, HEADER_LEN};
pub use name::{
    decode_label_sequence, encode_labels, encode_name, MAX_LABEL_LEN, MAX_NAME_LEN,
};
pub use question::{decode_question_section, encode_question, Question};
pub use record::{decode_resource_record, RecordSpan, RR_FIXED_LEN};

use crate::DomainError;

/// Largest datagram handled without EDNS(0).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

pub const CLASS_IN: u16 = 1;

/// Record types whose rdata is interpreted when answer names are expanded.
pub mod rtype {
    pub const A: u16 = 1;
    pub const NS: u16 = 2;
    pub const CNAME: u16 = 5;
    pub const PTR: u16 = 12;
    pub const MX: u16 = 15;
    pub const AAAA: u16 = 28;
}

pub(crate) fn read_slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], DomainError> {
    let end = offset.saturating_add(len);
    buf.get(offset..end).ok_or(DomainError::ShortBuffer {
        needed: end,
        available: buf.len(),
    })
}

pub(crate) fn read_u8(buf: &[u8], offset: usize) -> Result<u8, DomainError> {
    read_slice(buf, offset, 1).map(|b| b[0])
}

pub(crate) fn read_u16(buf: &[u8], offset: usize) -> Result<u16, DomainError> {
    read_slice(buf, offset, 2).map(|b| u16::from_be_bytes([b[0], b[1]]))
}

pub(crate) fn read_u32(buf: &[u8], offset: usize) -> Result<u32, DomainError> {
    read_slice(buf, offset, 4).map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}
