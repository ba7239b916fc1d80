//! Gravatar avatar URL construction.
//!
//! Pure functions: no I/O, deterministic for identical inputs.

use url::Url;

use crate::domain::fingerprint::EmailFingerprint;

/// Query parameters appended to an avatar URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarOptions {
    /// Requested image size in pixels (`s`).
    pub size: Option<u16>,
    /// Fallback image style served when no avatar exists (`d`).
    pub default_image: Option<String>,
    /// Highest acceptable content rating (`r`).
    pub rating: Option<String>,
}

impl AvatarOptions {
    /// Options used for member profile pages: 200px, identicon fallback,
    /// PG-rated.
    #[must_use]
    pub fn profile() -> Self {
        Self {
            size: Some(200),
            default_image: Some("identicon".to_owned()),
            rating: Some("pg".to_owned()),
        }
    }
}

/// Build the avatar image URL for a fingerprint.
///
/// # Examples
///
/// ```rust
/// use backend::domain::avatar::{avatar_url, AvatarOptions};
/// use backend::domain::EmailFingerprint;
/// use url::Url;
///
/// let base = Url::parse("https://gravatar.com").expect("base url");
/// let url = avatar_url(&base, &EmailFingerprint::new("ada@example.com"), &AvatarOptions::default());
/// assert!(url.path().starts_with("/avatar/"));
/// ```
#[must_use]
pub fn avatar_url(base: &Url, fingerprint: &EmailFingerprint, options: &AvatarOptions) -> Url {
    let mut url = base.clone();
    url.set_path(&format!("/avatar/{fingerprint}"));
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(size) = options.size {
            pairs.append_pair("s", &size.to_string());
        }
        if let Some(default_image) = options.default_image.as_deref() {
            pairs.append_pair("d", default_image);
        }
        if let Some(rating) = options.rating.as_deref() {
            pairs.append_pair("r", rating);
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn base() -> Url {
        Url::parse("https://gravatar.com").expect("base url")
    }

    #[rstest]
    fn profile_options_build_the_full_query() {
        let fingerprint = EmailFingerprint::new("ada@example.com");

        let url = avatar_url(&base(), &fingerprint, &AvatarOptions::profile());

        assert_eq!(
            url.as_str(),
            format!("https://gravatar.com/avatar/{fingerprint}?s=200&d=identicon&r=pg"),
        );
    }

    #[rstest]
    fn default_options_produce_a_bare_url() {
        let fingerprint = EmailFingerprint::new("ada@example.com");

        let url = avatar_url(&base(), &fingerprint, &AvatarOptions::default());

        assert_eq!(
            url.as_str(),
            format!("https://gravatar.com/avatar/{fingerprint}"),
        );
        assert_eq!(url.query(), None);
    }

    #[rstest]
    fn construction_is_deterministic() {
        let fingerprint = EmailFingerprint::new("grace@example.com");

        let first = avatar_url(&base(), &fingerprint, &AvatarOptions::profile());
        let second = avatar_url(&base(), &fingerprint, &AvatarOptions::profile());

        assert_eq!(first, second);
    }
}
