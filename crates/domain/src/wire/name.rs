use super::{read_slice, read_u16, read_u8};
use crate::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER: u8 = 0xC0;
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// Decodes a label sequence starting at `offset`.
///
/// Returns the labels and the offset of the first byte after the sequence as
/// it appears at `offset`: after the zero terminator, or after the first
/// two-byte compression pointer. Pointees never advance the cursor.
///
/// A pointer must target a byte strictly before the start of the run of
/// labels it terminates, so every jump moves towards the start of the buffer
/// and a cycle cannot be followed.
pub fn decode_label_sequence(buf: &[u8], offset: usize) -> Result<(Vec<String>, usize), DomainError> {
    let mut labels = Vec::new();
    let mut encoded_len = 1;
    let mut pos = offset;
    let mut run_start = offset;
    let mut next_offset = None;

    loop {
        let len = read_u8(buf, pos)?;

        match len & LABEL_TYPE_MASK {
            0 if len == 0 => {
                return Ok((labels, next_offset.unwrap_or(pos + 1)));
            }
            0 => {
                let len = len as usize;
                let bytes = read_slice(buf, pos + 1, len)?;

                encoded_len += 1 + len;
                if encoded_len > MAX_NAME_LEN {
                    return Err(DomainError::MalformedName(format!(
                        "name at offset {} exceeds {} bytes",
                        offset, MAX_NAME_LEN
                    )));
                }

                let label = std::str::from_utf8(bytes).map_err(|_| {
                    DomainError::MalformedName(format!("label at offset {} is not UTF-8", pos))
                })?;
                labels.push(label.to_string());
                pos += 1 + len;
            }
            POINTER => {
                let target = (read_u16(buf, pos)? & POINTER_OFFSET_MASK) as usize;
                if target >= run_start {
                    return Err(DomainError::MalformedName(format!(
                        "compression pointer at offset {} targets {} (must precede {})",
                        pos, target, run_start
                    )));
                }

                next_offset.get_or_insert(pos + 2);
                run_start = target;
                pos = target;
            }
            _ => {
                return Err(DomainError::MalformedName(format!(
                    "unsupported label type {:#04x} at offset {}",
                    len, pos
                )));
            }
        }
    }
}

/// Appends `labels` uncompressed, followed by the root terminator.
pub fn encode_labels<S: AsRef<str>>(labels: &[S], out: &mut Vec<u8>) -> Result<(), DomainError> {
    let encoded_len = 1 + labels
        .iter()
        .map(|l| 1 + l.as_ref().len())
        .sum::<usize>();
    if encoded_len > MAX_NAME_LEN {
        return Err(DomainError::NameTooLong(encoded_len));
    }

    for label in labels {
        let label = label.as_ref().as_bytes();
        if label.is_empty() {
            return Err(DomainError::MalformedName("empty label".to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::LabelTooLong(label.len()));
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label);
    }
    out.push(0);
    Ok(())
}

/// Appends a dotted name (no trailing dot). The empty string is the root name.
pub fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<(), DomainError> {
    if name.is_empty() {
        out.push(0);
        return Ok(());
    }

    let labels: Vec<&str> = name.split('.').collect();
    if labels.iter().any(|l| l.is_empty()) {
        return Err(DomainError::MalformedName(format!(
            "empty label in {:?}",
            name
        )));
    }
    if let Some(long) = labels.iter().find(|l| l.len() > MAX_LABEL_LEN) {
        return Err(DomainError::LabelTooLong(long.len()));
    }
    encode_labels(&labels, out)
}
