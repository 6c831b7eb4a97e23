//! Fixture builders shared by the unit tests
//!
//! The library has no write path for the binary format, so the tests carry
//! their own byte-identical encoder.

use super::format::{LogRecord, WideString};

/// Encode one record exactly as the producer lays it out on the wire
pub(crate) fn encode_record(record: &LogRecord) -> Vec<u8> {
    fn push_wide(out: &mut Vec<u8>, s: &WideString) {
        out.extend_from_slice(&(s.len() as u32).to_le_bytes());
        for unit in s.units() {
            out.extend_from_slice(&unit.to_le_bytes());
        }
    }

    let ts = record.timestamp;
    let mut out = Vec::new();
    out.push(0);
    push_wide(&mut out, &record.description);
    out.push(0);
    push_wide(&mut out, &record.info);
    out.push(0);
    out.extend_from_slice(&record.gm_id.to_le_bytes());
    out.push(0);
    out.extend_from_slice(&ts.year.to_le_bytes());
    out.extend_from_slice(&ts.month.to_le_bytes());
    out.extend_from_slice(&ts.day.to_le_bytes());
    out.extend_from_slice(&[0, 0]);
    out.extend_from_slice(&ts.hour.to_le_bytes());
    out.extend_from_slice(&ts.minute.to_le_bytes());
    out.extend_from_slice(&ts.second.to_le_bytes());
    out.extend_from_slice(&[0, 0]);
    out
}

/// Encode a whole log file: count prefix plus each record in order
pub(crate) fn encode_log(records: &[LogRecord]) -> Vec<u8> {
    let mut out = (records.len() as u32).to_le_bytes().to_vec();
    for record in records {
        out.extend_from_slice(&encode_record(record));
    }
    out
}
