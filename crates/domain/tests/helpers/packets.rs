//! Hand-assembled DNS messages, independent of the codec under test.

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_MX: u16 = 15;
pub const TYPE_AAAA: u16 = 28;
pub const CLASS_IN: u16 = 1;

pub fn name(dotted: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in dotted.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn header(id: u16, flags: u16, qd: u16, an: u16) -> Vec<u8> {
    let mut out = Vec::with_capacity(12);
    for field in [id, flags, qd, an, 0, 0] {
        out.extend_from_slice(&field.to_be_bytes());
    }
    out
}

pub fn question(dotted: &str, qtype: u16, qclass: u16) -> Vec<u8> {
    let mut out = name(dotted);
    out.extend_from_slice(&qtype.to_be_bytes());
    out.extend_from_slice(&qclass.to_be_bytes());
    out
}

/// A record whose owner is given as raw name bytes (full name or pointer).
pub fn record(owner: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = owner.to_vec();
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&CLASS_IN.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

pub fn pointer(offset: u16) -> [u8; 2] {
    (0xC000 | offset).to_be_bytes()
}

pub fn query(id: u16, flags: u16, questions: &[(&str, u16)]) -> Vec<u8> {
    let mut out = header(id, flags, questions.len() as u16, 0);
    for (dotted, qtype) in questions {
        out.extend(question(dotted, *qtype, CLASS_IN));
    }
    out
}

/// Upstream-style response: one question, answers owned by `c0 0c`.
pub fn a_response(id: u16, dotted: &str, ttl: u32, addresses: &[[u8; 4]]) -> Vec<u8> {
    let mut out = header(id, 0x8180, 1, addresses.len() as u16);
    out.extend(question(dotted, TYPE_A, CLASS_IN));
    for addr in addresses {
        out.extend(record(&pointer(12), TYPE_A, ttl, addr));
    }
    out
}
