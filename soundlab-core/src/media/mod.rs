//! Source audio captured for a single request.

pub mod source;

pub use source::AudioSource;
