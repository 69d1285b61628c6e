//! Boundary tokenizer and segment parser.

use std::collections::HashMap;

use bytes::Bytes;
use memchr::memmem::{self, Finder};

use super::part::Part;

/// Lazy iterator over the raw segments of a multipart body.
///
/// A segment is the byte range between two boundary delimiters (the boundary
/// token prefixed with `--`). The iterator stops at the closing `--`
/// terminator and never yields empty segments. A body in which the delimiter
/// does not appear yields nothing. Restart by constructing a new iterator;
/// construction is cheap.
pub struct Segments<'a> {
    body: &'a [u8],
    finder: Finder<'static>,
    delimiter_len: usize,
    /// Byte offset of the next delimiter, `None` once exhausted.
    pos: Option<usize>,
}

impl<'a> Segments<'a> {
    /// Create a tokenizer over `body` for the given boundary token.
    #[must_use]
    pub fn new(body: &'a [u8], boundary: &str) -> Self {
        let delimiter = format!("--{boundary}");
        let finder = Finder::new(delimiter.as_bytes()).into_owned();
        let pos = finder.find(body);
        Self {
            body,
            finder,
            delimiter_len: delimiter.len(),
            pos,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        loop {
            let delimiter_start = self.pos?;
            let segment_start = delimiter_start + self.delimiter_len;
            let rest = self.body.get(segment_start..).unwrap_or_default();

            // The final delimiter carries a trailing `--` terminator.
            if rest.starts_with(b"--") {
                self.pos = None;
                return None;
            }

            let (segment, next) = match self.finder.find(rest) {
                Some(i) => (&rest[..i], Some(segment_start + i)),
                None => (rest, None),
            };
            self.pos = next;

            if segment.iter().all(|&b| matches!(b, b'\r' | b'\n')) {
                continue;
            }
            return Some(segment);
        }
    }
}

/// Parse one segment into a part.
///
/// Returns `None` for malformed segments: no `CRLF CRLF` separator between
/// the header block and the content, or no `Content-Disposition` header with
/// a field name. This is the explicit skip branch for bad parts.
#[must_use]
pub fn parse_segment(segment: &[u8]) -> Option<Part> {
    let split = memmem::find(segment, b"\r\n\r\n")?;
    let header_block = String::from_utf8_lossy(&segment[..split]);
    let content = &segment[split + 4..];

    let mut name = None;
    let mut filename = None;
    let mut content_type = None;

    for line in header_block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "content-disposition" => {
                name = header_param(value, "name");
                filename = header_param(value, "filename");
            }
            "content-type" => content_type = Some(value.trim().to_string()),
            _ => {}
        }
    }

    let name = name?;
    let content_type =
        content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    match filename {
        Some(filename) => Some(Part::File {
            name,
            filename,
            content_type,
            content: Bytes::copy_from_slice(trim_boundary_artifacts(content)),
        }),
        None => Some(Part::Text {
            name,
            value: String::from_utf8_lossy(content).trim().to_string(),
        }),
    }
}

/// Parse a whole multipart body into a map of field name to part.
///
/// A repeated field name keeps its last occurrence. The parser never fails:
/// malformed segments are dropped and a body without the declared boundary
/// produces an empty map.
#[must_use]
pub fn parse_form(body: &[u8], boundary: &str) -> HashMap<String, Part> {
    let mut parts = HashMap::new();
    for segment in Segments::new(body, boundary) {
        if let Some(part) = parse_segment(segment) {
            parts.insert(part.name().to_string(), part);
        }
    }
    parts
}

/// Extract a quoted parameter value from a header line.
fn header_param(header: &str, key: &str) -> Option<String> {
    for item in header.split(';') {
        if let Some((k, v)) = item.split_once('=')
            && k.trim().eq_ignore_ascii_case(key)
        {
            return Some(v.trim().trim_matches('"').to_string());
        }
    }
    None
}

/// Strip the single `CRLF` that precedes the next boundary delimiter.
fn trim_boundary_artifacts(content: &[u8]) -> &[u8] {
    content.strip_suffix(b"\r\n").unwrap_or(content)
}


#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    fn encode(
        boundary: &str,
        texts: &[(String, String)],
        files: &[(String, String, Vec<u8>)],
    ) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in texts {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        for (name, filename, bytes) in files {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        body
    }

    // Round-trip: encoding fields with a known boundary and parsing the
    // result back yields the original values and bytes, with every part
    // correctly classified.
    proptest! {
        #[test]
        fn prop_round_trip(
            texts in proptest::collection::hash_map(
                "[a-z][a-z0-9_]{0,11}",
                "[a-zA-Z0-9 .,!?]{0,40}",
                0..4,
            ),
            file_bytes in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            // A split-based tokenizer cannot represent file content that
            // embeds the boundary delimiter itself.
            prop_assume!(
                memchr::memmem::find(&file_bytes, b"--prop-boundary").is_none()
            );

            let texts: Vec<(String, String)> = texts
                .into_iter()
                .map(|(k, v)| (k, v.trim().to_string()))
                .collect();
            let files = vec![(
                "upload".to_string(),
                "payload.bin".to_string(),
                file_bytes.clone(),
            )];
            prop_assume!(texts.iter().all(|(name, _)| name != "upload"));

            let body = encode("prop-boundary", &texts, &files);
            let parts = parse_form(&body, "prop-boundary");

            prop_assert_eq!(parts.len(), texts.len() + 1);
            for (name, value) in &texts {
                prop_assert_eq!(parts[name].as_text(), Some(value.as_str()));
            }
            match &parts["upload"] {
                Part::File { content, .. } => {
                    prop_assert_eq!(content.as_ref(), file_bytes.as_slice());
                }
                Part::Text { .. } => prop_assert!(false, "expected file part"),
            }
        }
    }

    // The parser never panics on arbitrary input.
    proptest! {
        #[test]
        fn prop_parser_total(body in proptest::collection::vec(any::<u8>(), 0..512)) {
            let _ = parse_form(&body, "prop-boundary");
        }
    }
}
