use async_trait::async_trait;
use dns_relay_application::ports::UpstreamClient;
use dns_relay_domain::wire::{decode_header, decode_question_section, HEADER_LEN};
use dns_relay_domain::DomainError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::packets::{a_answer, response};

/// Answers from a table keyed by question name. Unknown names get an empty
/// NOERROR reply.
#[derive(Clone, Default)]
pub struct MockUpstreamClient {
    answers: Arc<Mutex<HashMap<String, Vec<Vec<u8>>>>>,
    raw: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    errors: Arc<Mutex<HashMap<String, DomainError>>>,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
    completed: Arc<Mutex<Vec<String>>>,
}

impl MockUpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_a_records(&self, domain: &str, addresses: &[[u8; 4]]) {
        let answers = addresses.iter().map(|a| a_answer(60, *a)).collect();
        self.set_answers(domain, answers);
    }

    pub fn set_answers(&self, domain: &str, answers: Vec<Vec<u8>>) {
        self.answers.lock().unwrap().insert(domain.to_string(), answers);
    }

    /// Replies with `bytes` as is, ignoring the query.
    pub fn set_raw_response(&self, domain: &str, bytes: Vec<u8>) {
        self.raw.lock().unwrap().insert(domain.to_string(), bytes);
    }

    pub fn set_delay(&self, domain: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(domain.to_string(), delay);
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.errors.lock().unwrap().insert(domain.to_string(), error);
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }

    /// Question names in the order their replies were produced.
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn query(&self, datagram: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.received.lock().unwrap().push(datagram.to_vec());

        let header = decode_header(datagram)?;
        let (questions, _) = decode_question_section(datagram, HEADER_LEN, header.qd_count)?;
        let q = questions
            .first()
            .ok_or(DomainError::NoQuestions)?
            .clone();

        let delay = self.delays.lock().unwrap().get(&q.name).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let error = self.errors.lock().unwrap().get(&q.name).cloned();
        if let Some(error) = error {
            return Err(error);
        }

        self.completed.lock().unwrap().push(q.name.clone());

        if let Some(raw) = self.raw.lock().unwrap().get(&q.name) {
            return Ok(raw.clone());
        }

        let answers = self
            .answers
            .lock()
            .unwrap()
            .get(&q.name)
            .cloned()
            .unwrap_or_default();

        Ok(response(
            header.packet_id,
            0x8180,
            &q.name,
            q.qtype,
            &answers,
        ))
    }

    fn server(&self) -> String {
        "mock".to_string()
    }
}
