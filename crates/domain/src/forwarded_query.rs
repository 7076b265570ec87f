use crate::wire::{Header, Question, HEADER_LEN};
use crate::DomainError;

/// A single-question query derived from one question of a client packet.
///
/// Lives only while its packet is being relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedQuery {
    pub transaction_id: u16,
    pub flags: u16,
    pub question: Question,
}

impl ForwardedQuery {
    pub fn new(transaction_id: u16, flags: u16, question: Question) -> Self {
        Self {
            transaction_id,
            flags,
            question,
        }
    }

    /// Wire form: header with `qd_count = 1`, `an_count = 0`, then the question.
    pub fn to_datagram(&self) -> Result<Vec<u8>, DomainError> {
        let mut datagram = Vec::with_capacity(HEADER_LEN + self.question.name.len() + 6);
        datagram.extend_from_slice(&Header::new(self.transaction_id, self.flags, 1, 0).encode());
        self.question.encode_into(&mut datagram)?;
        Ok(datagram)
    }
}
