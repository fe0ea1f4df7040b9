//! Provider implementations of the `ChatModel` trait.
//!
//! One adapter per provider. Each wraps its client crate and maps the
//! client's errors onto [`crate::error::ModelError`].

mod openai;
mod perplexity;

pub use openai::OpenAiModel;
pub use perplexity::PerplexityModel;
