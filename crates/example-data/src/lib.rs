//! Deterministic demo member data for the directory backend.
//!
//! Generates reproducible member records from a numeric seed — the same
//! seed always produces identical output — and writes them atomically as
//! the backing JSON document the backend reads. Generated directories mix
//! mapped and unmapped departments, members with and without emails, and
//! members with and without biographies, so every degradation and
//! color-fallback path has demo coverage.

mod atomic_io;
mod error;
mod generator;
mod member;

pub use atomic_io::write_members_file;
pub use error::{GenerationError, WriteError};
pub use generator::generate_demo_members;
pub use member::DemoMember;
