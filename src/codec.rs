//! Binary framing for log entries.
//!
//! Frame layout per entry:
//!
//! | bytes | content |
//! |---|---|
//! | 1 | kind code (Error=0, Warning=1, Information=2) |
//! | 1 | severity, low 8 bits |
//! | n | message as bracketed text (`0x02 .. 0x03`) |
//! | 0 or more | optional payload tag followed by payload |
//!
//! Payload tags: `0xF1` text, `0xF2` integer, `0xF3` float, `0xF4` exception
//! (message bracket then source bracket), `0xF5` opaque string representation.
//!
//! A buffer of entries is wrapped in group separators (`0x1D`) with each frame
//! followed by `0x0A`. Values wider than a byte are truncated, not clamped.
//! There is no decoder.

use crate::domain::{LogData, LogEntry};
use bytes::{BufMut, Bytes, BytesMut};

pub const GROUP_SEPARATOR: u8 = 0x1D;
pub const RECORD_SEPARATOR: u8 = b'\n';
pub const TEXT_START: u8 = 0x02;
pub const TEXT_END: u8 = 0x03;

pub const TAG_TEXT: u8 = 0xF1;
pub const TAG_INTEGER: u8 = 0xF2;
pub const TAG_FLOAT: u8 = 0xF3;
pub const TAG_EXCEPTION: u8 = 0xF4;
pub const TAG_OPAQUE: u8 = 0xF5;

// kind + severity + message brackets
const FIXED_FRAME_OVERHEAD: usize = 4;

/// Encode one entry into a standalone frame.
pub fn encode_entry(entry: &LogEntry) -> Bytes {
    let mut buf = BytesMut::with_capacity(estimate_frame_size(entry));
    encode_entry_into(entry, &mut buf);
    buf.freeze()
}

/// Append one entry's frame to `buf`.
pub fn encode_entry_into<B: BufMut>(entry: &LogEntry, buf: &mut B) {
    buf.put_u8(entry.kind().code());
    buf.put_u8(entry.severity() as u8);
    put_bracketed(buf, entry.message());

    let Some(data) = entry.data() else {
        return;
    };

    match data {
        LogData::Text(text) => {
            buf.put_u8(TAG_TEXT);
            put_bracketed(buf, text);
        }
        LogData::Integer(value) => {
            buf.put_u8(TAG_INTEGER);
            buf.put_u8(*value as u8);
        }
        LogData::Float(value) => {
            buf.put_u8(TAG_FLOAT);
            buf.put_u8(truncate_float(*value));
        }
        LogData::Exception(exception) => {
            buf.put_u8(TAG_EXCEPTION);
            put_bracketed(buf, &exception.message);
            put_bracketed(buf, exception.source.as_deref().unwrap_or_default());
        }
        LogData::Opaque(repr) => {
            buf.put_u8(TAG_OPAQUE);
            put_bracketed(buf, repr);
        }
    }
}

/// Encode a sequence of entries between group separators, one frame per record.
pub fn encode_buffer(entries: &[LogEntry]) -> Bytes {
    let capacity = entries
        .iter()
        .map(|entry| estimate_frame_size(entry).saturating_add(1))
        .fold(2usize, usize::saturating_add);

    let mut buf = BytesMut::with_capacity(capacity);
    buf.put_u8(GROUP_SEPARATOR);
    for entry in entries {
        encode_entry_into(entry, &mut buf);
        buf.put_u8(RECORD_SEPARATOR);
    }
    buf.put_u8(GROUP_SEPARATOR);
    buf.freeze()
}

/// Write `text` as `0x02`, one byte per UTF-16 code unit (low 8 bits), `0x03`.
fn put_bracketed<B: BufMut>(buf: &mut B, text: &str) {
    buf.put_u8(TEXT_START);
    for unit in text.encode_utf16() {
        buf.put_u8(unit as u8);
    }
    buf.put_u8(TEXT_END);
}

/// Truncate toward zero, then keep the low 8 bits. NaN becomes 0 and
/// infinities saturate before the wrap.
fn truncate_float(value: f64) -> u8 {
    (value.trunc() as i64) as u8
}

fn estimate_frame_size(entry: &LogEntry) -> usize {
    let payload = match entry.data() {
        None => 0,
        Some(LogData::Integer(_) | LogData::Float(_)) => 2,
        Some(LogData::Text(text) | LogData::Opaque(text)) => text.len() + 3,
        Some(LogData::Exception(exception)) => {
            exception.message.len() + exception.source.as_deref().map_or(0, str::len) + 5
        }
    };
    FIXED_FRAME_OVERHEAD + entry.message().len() + payload
}
