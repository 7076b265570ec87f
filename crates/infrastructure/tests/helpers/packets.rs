pub const TYPE_A: u16 = 1;
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

pub fn query(id: u16, flags: u16, questions: &[(&str, u16)]) -> Vec<u8> {
    let mut out = Vec::with_capacity(512);
    for field in [id, flags, questions.len() as u16, 0, 0, 0] {
        out.extend_from_slice(&field.to_be_bytes());
    }
    for (dotted, qtype) in questions {
        out.extend(name(dotted));
        out.extend_from_slice(&qtype.to_be_bytes());
        out.extend_from_slice(&CLASS_IN.to_be_bytes());
    }
    out
}

pub fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}
