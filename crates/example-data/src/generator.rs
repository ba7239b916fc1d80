//! Deterministic member generation.
//!
//! The seed value initialises a ChaCha RNG, so identical seed and count
//! always produce identical members.

use fake::Fake;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::member::DemoMember;

/// Largest supported member count per generation.
const MAX_MEMBER_COUNT: usize = 500;

/// Department pool: the directory's mapped departments plus labels that
/// exercise the derived-color fallback.
const DEPARTMENTS: [&str; 6] = [
    "Research and Development",
    "Finance",
    "Human Resources",
    "Marketing",
    "Customer Success",
    "Platform Engineering",
];

/// Probability numerator for a member having a published email (4 in 5).
const EMAIL_PROBABILITY_NUMERATOR: u32 = 4;

/// Probability numerator for a member having a biography (1 in 2).
const BIO_PROBABILITY_NUMERATOR: u32 = 1;

/// Generate `count` demo members from `seed`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidCount`] when `count` is zero or
/// exceeds the supported maximum.
///
/// # Examples
///
/// ```
/// use example_data::generate_demo_members;
///
/// let members = generate_demo_members(42, 5).expect("generated");
/// assert_eq!(members.len(), 5);
///
/// // Same seed produces identical members.
/// let again = generate_demo_members(42, 5).expect("generated");
/// assert_eq!(members, again);
/// ```
pub fn generate_demo_members(seed: u64, count: usize) -> Result<Vec<DemoMember>, GenerationError> {
    if count == 0 || count > MAX_MEMBER_COUNT {
        return Err(GenerationError::InvalidCount {
            requested: count,
            max: MAX_MEMBER_COUNT,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut members = Vec::with_capacity(count);
    for _ in 0..count {
        members.push(generate_single_member(&mut rng));
    }
    Ok(members)
}

/// Generate a single member with the provided RNG.
fn generate_single_member(rng: &mut ChaCha8Rng) -> DemoMember {
    let uid = Uuid::from_u128(rng.random()).to_string();

    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let display_name = format!("{first} {last}");

    let department = DEPARTMENTS
        .choose(rng)
        .copied()
        .unwrap_or("Finance")
        .to_owned();

    let email = rng
        .random_ratio(EMAIL_PROBABILITY_NUMERATOR, 5)
        .then(|| derive_email(&first, &last));

    let about_me: Option<String> = rng
        .random_ratio(BIO_PROBABILITY_NUMERATOR, 2)
        .then(|| Sentence(EN, 4..10).fake_with_rng(rng));

    DemoMember {
        uid,
        display_name,
        email,
        department,
        about_me,
    }
}

/// Derive a lowercase example address from the member's name.
fn derive_email(first: &str, last: &str) -> String {
    let local_part = format!("{first}.{last}")
        .to_lowercase()
        .replace(char::is_whitespace, ".");
    format!("{local_part}@example.com")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identical_seeds_produce_identical_members() {
        let first = generate_demo_members(7, 20).expect("generated");
        let second = generate_demo_members(7, 20).expect("generated");

        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seeds_produce_different_members() {
        let first = generate_demo_members(7, 20).expect("generated");
        let second = generate_demo_members(8, 20).expect("generated");

        assert_ne!(first, second);
    }

    #[rstest]
    fn uids_are_unique_within_a_directory() {
        let members = generate_demo_members(7, 100).expect("generated");

        let mut uids: Vec<&str> = members.iter().map(|member| member.uid.as_str()).collect();
        uids.sort_unstable();
        uids.dedup();
        assert_eq!(uids.len(), members.len());
    }

    #[rstest]
    fn directories_cover_members_with_and_without_emails() {
        let members = generate_demo_members(7, 100).expect("generated");

        assert!(members.iter().any(|member| member.email.is_some()));
        assert!(members.iter().any(|member| member.email.is_none()));
    }

    #[rstest]
    fn emails_are_lowercase_example_addresses() {
        let members = generate_demo_members(7, 50).expect("generated");

        for email in members.iter().filter_map(|member| member.email.as_deref()) {
            assert!(email.ends_with("@example.com"), "unexpected email: {email}");
            assert_eq!(email, email.to_lowercase());
        }
    }

    #[rstest]
    #[case::zero(0)]
    #[case::too_many(501)]
    fn out_of_range_counts_are_rejected(#[case] count: usize) {
        assert!(generate_demo_members(7, count).is_err());
    }
}
