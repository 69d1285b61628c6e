//! Tokenizer for `multipart/form-data` request bodies.
//!
//! The body is consumed exactly as the HTTP transport delivered it: raw
//! bytes, no base64 transfer decoding. Callers are responsible for checking
//! that the request is multipart and for extracting the boundary token from
//! the `Content-Type` header before invoking the parser.
//!
//! Malformed segments (no blank-line separator, no recognizable
//! `Content-Disposition`) are skipped rather than failing the whole body;
//! the parser yields whatever valid parts it could extract.

mod parser;
mod part;

pub use parser::{Segments, parse_form, parse_segment};
pub use part::Part;
