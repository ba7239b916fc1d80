//! Outbound adapters: backing record sources and the Gravatar profile
//! source.

pub mod gravatar;
pub mod record_source;
