//! Gravatar profile source adapter.

pub mod dto;
pub mod http_source;

pub use http_source::GravatarHttpSource;
