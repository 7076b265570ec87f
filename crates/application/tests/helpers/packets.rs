pub const TYPE_A: u16 = 1;
pub const TYPE_CNAME: u16 = 5;
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

pub fn question(dotted: &str, qtype: u16) -> Vec<u8> {
    let mut out = name(dotted);
    out.extend_from_slice(&qtype.to_be_bytes());
    out.extend_from_slice(&CLASS_IN.to_be_bytes());
    out
}

pub fn pointer(offset: u16) -> [u8; 2] {
    (0xC000 | offset).to_be_bytes()
}

pub fn record(owner: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = owner.to_vec();
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&CLASS_IN.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

pub fn query(id: u16, flags: u16, questions: &[(&str, u16)]) -> Vec<u8> {
    let mut out = header(id, flags, questions.len() as u16, 0);
    for (dotted, qtype) in questions {
        out.extend(question(dotted, *qtype));
    }
    out
}

/// An A answer owned by a pointer to the first question (`c0 0c`).
pub fn a_answer(ttl: u32, addr: [u8; 4]) -> Vec<u8> {
    record(&pointer(12), TYPE_A, ttl, &addr)
}

/// Upstream reply to a single question, answers appended verbatim.
pub fn response(id: u16, flags: u16, dotted: &str, qtype: u16, answers: &[Vec<u8>]) -> Vec<u8> {
    let mut out = header(id, flags, 1, answers.len() as u16);
    out.extend(question(dotted, qtype));
    for answer in answers {
        out.extend_from_slice(answer);
    }
    out
}

/// Offset of the answer section in a single-question message.
pub fn answers_offset(dotted: &str) -> usize {
    12 + name(dotted).len() + 4
}
