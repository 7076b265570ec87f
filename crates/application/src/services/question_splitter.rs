use dns_relay_domain::wire::{Header, Question};
use dns_relay_domain::{DomainError, ForwardedQuery};

/// Turns a multi-question query into single-question queries, one per
/// question and in the same order, keeping the client's id and flags.
pub struct QuestionSplitter;

impl QuestionSplitter {
    pub fn forwarded_queries(header: &Header, questions: &[Question]) -> Vec<ForwardedQuery> {
        questions
            .iter()
            .map(|q| ForwardedQuery::new(header.packet_id, header.flags, q.clone()))
            .collect()
    }

    pub fn split(header: &Header, questions: &[Question]) -> Result<Vec<Vec<u8>>, DomainError> {
        Self::forwarded_queries(header, questions)
            .iter()
            .map(ForwardedQuery::to_datagram)
            .collect()
    }
}
