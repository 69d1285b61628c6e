//! Review domain: types, presence validation, and submission orchestration.

mod error;
mod service;
mod types;

pub use error::ReviewError;
pub use service::{ReviewService, ReviewStore};
pub use types::{NewReview, Review, SubmitReview};
