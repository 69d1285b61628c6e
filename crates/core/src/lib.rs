//! Core domain logic for Solstice.
//!
//! This crate holds the pieces that do not depend on the web or database
//! layers:
//! - `multipart`: tokenizer for `multipart/form-data` request bodies
//! - `storage`: blob store adapter over Apache OpenDAL
//! - `review`: review types, validation, and submission orchestration

pub mod multipart;
pub mod review;
pub mod storage;
