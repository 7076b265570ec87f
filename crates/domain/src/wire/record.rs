use super::name::{decode_label_sequence, encode_labels};
use super::{read_slice, read_u16, read_u32, rtype};
use crate::DomainError;

/// type(2) + class(2) + ttl(4) + rdlength(2)
pub const RR_FIXED_LEN: usize = 10;

/// A resource record located inside a message buffer.
///
/// `bytes` is the verbatim span from the owner name through the end of rdata.
/// Compression pointers inside it still refer to the buffer it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpan<'a> {
    pub labels: Vec<String>,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    /// Absolute offset of rdata in the source buffer.
    pub rdata_offset: usize,
    pub rdata: &'a [u8],
    pub bytes: &'a [u8],
}

impl RecordSpan<'_> {
    /// Re-encodes the record with every name it carries written out in full,
    /// so the result no longer depends on `buf` (the buffer it was decoded from).
    ///
    /// Names inside rdata are expanded for NS, CNAME, PTR and MX; other rdata
    /// is copied as is.
    pub fn expand_names(&self, buf: &[u8]) -> Result<Vec<u8>, DomainError> {
        let mut out = Vec::with_capacity(self.bytes.len() + 32);
        encode_labels(&self.labels, &mut out)?;
        out.extend_from_slice(&self.rtype.to_be_bytes());
        out.extend_from_slice(&self.rclass.to_be_bytes());
        out.extend_from_slice(&self.ttl.to_be_bytes());

        let rdata = match self.rtype {
            rtype::NS | rtype::CNAME | rtype::PTR => self.expand_rdata_name(buf, 0)?,
            rtype::MX => self.expand_rdata_name(buf, 2)?,
            _ => self.rdata.to_vec(),
        };

        let rdlength = u16::try_from(rdata.len())
            .map_err(|_| DomainError::MalformedResponse("expanded rdata too long".to_string()))?;
        out.extend_from_slice(&rdlength.to_be_bytes());
        out.extend_from_slice(&rdata);
        Ok(out)
    }

    fn expand_rdata_name(&self, buf: &[u8], prefix_len: usize) -> Result<Vec<u8>, DomainError> {
        let prefix = self.rdata.get(..prefix_len).ok_or_else(|| {
            DomainError::MalformedResponse(format!(
                "rdata of type {} shorter than {} bytes",
                self.rtype, prefix_len
            ))
        })?;

        let (labels, end) = decode_label_sequence(buf, self.rdata_offset + prefix_len)?;
        if end > self.rdata_offset + self.rdata.len() {
            return Err(DomainError::MalformedResponse(format!(
                "name in rdata of type {} runs past rdlength",
                self.rtype
            )));
        }

        let mut out = prefix.to_vec();
        encode_labels(&labels, &mut out)?;
        Ok(out)
    }
}

/// Decodes one resource record at `offset`, returning it and the offset just
/// past its rdata.
pub fn decode_resource_record(buf: &[u8], offset: usize) -> Result<(RecordSpan<'_>, usize), DomainError> {
    let (labels, fixed) = decode_label_sequence(buf, offset)?;

    let rtype = read_u16(buf, fixed)?;
    let rclass = read_u16(buf, fixed + 2)?;
    let ttl = read_u32(buf, fixed + 4)?;
    let rdlength = read_u16(buf, fixed + 8)? as usize;

    let rdata_offset = fixed + RR_FIXED_LEN;
    let rdata = read_slice(buf, rdata_offset, rdlength)?;
    let end = rdata_offset + rdlength;

    Ok((
        RecordSpan {
            labels,
            rtype,
            rclass,
            ttl,
            rdata_offset,
            rdata,
            bytes: &buf[offset..end],
        },
        end,
    ))
}
