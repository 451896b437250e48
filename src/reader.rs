//! Reading bank exports: encoding, preamble, delimiter detection.

use csv::{ReaderBuilder, StringRecord};
use log::debug;

use crate::errors::{ConvertError, ConvertResult};

const DELIMITERS: [u8; 4] = [b';', b',', b'\t', b'|'];

/// A data row together with its 1-based physical line in the input.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    pub line: u64,
    pub fields: StringRecord,
}

/// Decodes UTF-8, falling back to Windows-1252 which German banks still
/// use for their exports. A leading BOM is dropped.
pub fn decode_content(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!("input is not valid UTF-8, decoding as windows-1252");
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
    };

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Most frequent candidate delimiter in the header line, `;` if none occurs.
pub fn detect_delimiter(header_line: &str) -> u8 {
    let mut best = b';';
    let mut best_count = 0;

    for candidate in DELIMITERS {
        let count = header_line.bytes().filter(|b| *b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    best
}

/// Text after the first `n` lines, or `None` when there are fewer lines.
fn skip_preamble(content: &str, n: usize) -> Option<&str> {
    let mut rest = content;
    for _ in 0..n {
        let end = rest.find('\n')?;
        rest = &rest[end + 1..];
    }
    Some(rest)
}

/// Splits the export into data rows. The header row is consumed, never
/// returned. Empty lines are skipped by the CSV reader; rows of empty
/// fields are kept so the row transform rejects them.
pub fn read_records(
    content: &str,
    skip_lines: usize,
    delimiter: Option<u8>,
) -> ConvertResult<Vec<SourceRecord>> {
    let body = skip_preamble(content, skip_lines).ok_or(ConvertError::EmptyInput)?;

    let delimiter = delimiter.unwrap_or_else(|| {
        let detected = detect_delimiter(body.lines().next().unwrap_or(""));
        debug!("detected delimiter {:?}", detected as char);
        detected
    });

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?;
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ConvertError::EmptyInput);
    }
    debug!("header: {:?}", headers);

    let offset = skip_lines as u64;
    let mut records = Vec::new();

    for result in reader.records() {
        let fields = result?;
        let line = fields.position().map(|p| p.line()).unwrap_or(0) + offset;
        records.push(SourceRecord { line, fields });
    }

    Ok(records)
}
