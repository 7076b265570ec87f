use crate::ports::UpstreamClient;
use crate::services::{QuestionSplitter, ResponseMerger};
use dns_relay_domain::wire::{decode_header, decode_question_section, HEADER_LEN};
use dns_relay_domain::{AnswerNames, DomainError, FanOut};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Relays one client packet: decode, split, forward each question, merge.
pub struct RelayQueryUseCase {
    upstream: Arc<dyn UpstreamClient>,
    merger: ResponseMerger,
    fan_out: FanOut,
}

impl RelayQueryUseCase {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self {
            upstream,
            merger: ResponseMerger::new(AnswerNames::default()),
            fan_out: FanOut::default(),
        }
    }

    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    pub fn with_answer_names(mut self, answer_names: AnswerNames) -> Self {
        self.merger = ResponseMerger::new(answer_names);
        self
    }

    /// Returns the merged response datagram for `packet`.
    pub async fn execute(&self, packet: &[u8]) -> Result<Vec<u8>, DomainError> {
        let start = Instant::now();

        let header = decode_header(packet)?;
        let (questions, _) = decode_question_section(packet, HEADER_LEN, header.qd_count)?;
        if questions.is_empty() {
            return Err(DomainError::NoQuestions);
        }

        debug!(
            id = header.packet_id,
            flags = header.flags,
            questions = questions.len(),
            "Client query decoded"
        );

        let datagrams = QuestionSplitter::split(&header, &questions)?;
        let responses = self.forward_all(&datagrams).await?;
        let merged = self.merger.merge(header.packet_id, &questions, &responses)?;

        debug!(
            id = header.packet_id,
            upstream = %self.upstream.server(),
            fan_out = self.fan_out.as_str(),
            bytes = merged.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query relayed"
        );

        Ok(merged)
    }

    /// Responses come back aligned with `datagrams`, whatever order they arrive in.
    /// In parallel mode every call runs to completion before the first failure,
    /// in question order, is reported.
    async fn forward_all(&self, datagrams: &[Vec<u8>]) -> Result<Vec<Vec<u8>>, DomainError> {
        match self.fan_out {
            FanOut::Parallel => {
                join_all(datagrams.iter().map(|d| self.upstream.query(d)))
                    .await
                    .into_iter()
                    .collect()
            }
            FanOut::Sequential => {
                let mut responses = Vec::with_capacity(datagrams.len());
                for datagram in datagrams {
                    responses.push(self.upstream.query(datagram).await?);
                }
                Ok(responses)
            }
        }
    }
}
