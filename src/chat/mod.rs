//! Chat pipeline: language detection, canned responses, and model fallback.

pub(crate) mod engine;
mod lang;
mod responses;

pub use lang::Lang;
