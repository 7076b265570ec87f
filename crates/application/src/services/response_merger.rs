use dns_relay_domain::wire::{
    decode_header, decode_question_section, decode_resource_record, encode_header, Question,
    HEADER_LEN,
};
use dns_relay_domain::{AnswerNames, DomainError};
use tracing::debug;

/// Folds per-question upstream responses back into one reply.
///
/// The merged message carries the client's id, the flags of the first
/// response, the client's questions re-encoded in their original order, and
/// every answer of every response in response order. Authority and
/// additional sections are dropped.
pub struct ResponseMerger {
    answer_names: AnswerNames,
}

impl ResponseMerger {
    pub fn new(answer_names: AnswerNames) -> Self {
        Self { answer_names }
    }

    /// `responses[i]` must be the reply to `original_questions[i]`.
    ///
    /// Answer decoding is all-or-nothing: if any advertised answer of any
    /// response cannot be decoded the whole merge fails, so the merged
    /// `an_count` always matches the answers present.
    pub fn merge(
        &self,
        packet_id: u16,
        original_questions: &[Question],
        responses: &[Vec<u8>],
    ) -> Result<Vec<u8>, DomainError> {
        if responses.is_empty() {
            return Err(DomainError::MalformedResponse(
                "no upstream responses to merge".to_string(),
            ));
        }
        if responses.len() != original_questions.len() {
            return Err(DomainError::MalformedResponse(format!(
                "{} responses for {} questions",
                responses.len(),
                original_questions.len()
            )));
        }

        let qd_count = u16::try_from(original_questions.len())
            .map_err(|_| DomainError::MalformedResponse("too many questions".to_string()))?;

        let mut flags = None;
        let mut an_count: u16 = 0;
        let mut answers = Vec::new();

        for (index, response) in responses.iter().enumerate() {
            let header = decode_header(response).map_err(|e| response_error(index, e))?;
            flags.get_or_insert(header.flags);

            let (_, mut offset) = decode_question_section(response, HEADER_LEN, header.qd_count)
                .map_err(|e| response_error(index, e))?;

            for _ in 0..header.an_count {
                let (span, next) =
                    decode_resource_record(response, offset).map_err(|e| response_error(index, e))?;
                match self.answer_names {
                    AnswerNames::Verbatim => answers.extend_from_slice(span.bytes),
                    AnswerNames::Expand => answers.extend(
                        span.expand_names(response)
                            .map_err(|e| response_error(index, e))?,
                    ),
                }
                offset = next;
            }

            an_count = an_count.checked_add(header.an_count).ok_or_else(|| {
                DomainError::MalformedResponse("merged answer count exceeds 65535".to_string())
            })?;

            debug!(
                response = index,
                answers = header.an_count,
                flags = header.flags,
                "Upstream response folded"
            );
        }

        let mut merged = Vec::with_capacity(HEADER_LEN + answers.len() + 32 * original_questions.len());
        merged.extend_from_slice(&encode_header(
            packet_id,
            flags.unwrap_or_default(),
            qd_count,
            an_count,
        ));
        for question in original_questions {
            question.encode_into(&mut merged)?;
        }
        merged.extend_from_slice(&answers);

        Ok(merged)
    }
}

fn response_error(index: usize, error: DomainError) -> DomainError {
    match error {
        DomainError::MalformedResponse(msg) => {
            DomainError::MalformedResponse(format!("response {}: {}", index, msg))
        }
        other => DomainError::MalformedResponse(format!("response {}: {}", index, other)),
    }
}
