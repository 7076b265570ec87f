use super::name::{decode_label_sequence, encode_name};
use super::read_u16;
use crate::DomainError;
use std::fmt;

/// One entry of the question section.
///
/// The name is the dot-joined label sequence without a trailing dot, case
/// preserved and not validated against hostname rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: u16, qclass: u16) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }

    /// Appends the wire form to `out`, leaving `out` untouched on error.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), DomainError> {
        let start = out.len();
        if let Err(e) = encode_name(&self.name, out) {
            out.truncate(start);
            return Err(e);
        }
        out.extend_from_slice(&self.qtype.to_be_bytes());
        out.extend_from_slice(&self.qclass.to_be_bytes());
        Ok(())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} type={} class={}", self.name, self.qtype, self.qclass)
    }
}

pub fn decode_question_section(
    buf: &[u8],
    offset: usize,
    qd_count: u16,
) -> Result<(Vec<Question>, usize), DomainError> {
    // qd_count is client-controlled; a question takes at least 5 bytes
    let remaining = buf.len().saturating_sub(offset);
    let mut questions = Vec::with_capacity((qd_count as usize).min(remaining / 5));
    let mut offset = offset;

    for _ in 0..qd_count {
        let (labels, next) = decode_label_sequence(buf, offset)?;
        let qtype = read_u16(buf, next)?;
        let qclass = read_u16(buf, next + 2)?;
        questions.push(Question::new(labels.join("."), qtype, qclass));
        offset = next + 4;
    }

    Ok((questions, offset))
}

pub fn encode_question(name: &str, qtype: u16, qclass: u16) -> Result<Vec<u8>, DomainError> {
    let mut out = Vec::with_capacity(name.len() + 6);
    encode_name(name, &mut out)?;
    out.extend_from_slice(&qtype.to_be_bytes());
    out.extend_from_slice(&qclass.to_be_bytes());
    Ok(out)
}
