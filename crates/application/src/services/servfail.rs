use dns_relay_domain::wire::{decode_header, decode_question_section, encode_header, HEADER_LEN};
use dns_relay_domain::Header;

/// Builds a SERVFAIL reply for a client packet that could not be relayed.
///
/// Echoes the question section when it decodes and re-encodes cleanly,
/// otherwise replies with a bare header. Returns `None` when not even the
/// header is readable, since there is no transaction ID to answer.
pub fn build_servfail(packet: &[u8]) -> Option<Vec<u8>> {
    let header = decode_header(packet).ok()?;
    let flags = Header::servfail_flags(header.flags);

    let mut questions = Vec::new();
    let echoed = decode_question_section(packet, HEADER_LEN, header.qd_count)
        .ok()
        .and_then(|(decoded, _)| {
            decoded
                .iter()
                .try_for_each(|q| q.encode_into(&mut questions))
                .ok()
                .map(|_| decoded.len())
        });

    let mut reply = Vec::with_capacity(HEADER_LEN + questions.len());
    match echoed {
        Some(qd_count) => {
            reply.extend_from_slice(&encode_header(header.packet_id, flags, qd_count as u16, 0));
            reply.extend_from_slice(&questions);
        }
        None => reply.extend_from_slice(&encode_header(header.packet_id, flags, 0, 0)),
    }
    Some(reply)
}
