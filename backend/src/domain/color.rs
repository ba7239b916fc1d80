//! Department display colors.
//!
//! Known departments resolve through a fixed table; anything else gets a
//! color derived deterministically from the label itself, so an unmapped
//! department always renders the same hue across runs and processes.

/// Neutral color used when no department is present.
pub const NEUTRAL_COLOR: &str = "#e5e7eb";

/// Fixed department-to-color table, matched exactly first and then
/// case-insensitively.
const DEPARTMENT_COLORS: [(&str, &str); 4] = [
    ("Research and Development", "#FF6D00"),
    ("Finance", "#4CAF50"),
    ("Human Resources", "#FF4081"),
    ("Marketing", "#2196F3"),
];

/// Saturation percentage of derived fallback colors.
const FALLBACK_SATURATION: u32 = 80;

/// Lightness percentage of derived fallback colors.
const FALLBACK_LIGHTNESS: u32 = 65;

/// Resolve the display color for a department label.
///
/// Absent or blank labels resolve to [`NEUTRAL_COLOR`]. The derived
/// fallback hashes the label exactly as given; only the fixed table is
/// matched case-insensitively.
///
/// # Examples
///
/// ```rust
/// use backend::domain::color::department_color;
///
/// assert_eq!(department_color(Some("finance")), "#4CAF50");
/// assert_eq!(department_color(None), "#e5e7eb");
/// ```
#[must_use]
pub fn department_color(department: Option<&str>) -> String {
    let Some(label) = department.filter(|value| !value.trim().is_empty()) else {
        return NEUTRAL_COLOR.to_owned();
    };
    if let Some((_, color)) = DEPARTMENT_COLORS.iter().find(|(name, _)| *name == label) {
        return (*color).to_owned();
    }
    if let Some((_, color)) = DEPARTMENT_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
    {
        return (*color).to_owned();
    }
    fallback_color(label)
}

/// Derive a stable hue by folding the label's code points into a wrapping
/// signed 32-bit accumulator (`acc * 31 + code`).
fn fallback_color(label: &str) -> String {
    let hash = label.chars().fold(0i32, |acc, ch| {
        acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(ch as i32)
    });
    let hue = hash.unsigned_abs() % 360;
    format!("hsl({hue}, {FALLBACK_SATURATION}%, {FALLBACK_LIGHTNESS}%)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    fn missing_department_uses_neutral_default(#[case] department: Option<&str>) {
        assert_eq!(department_color(department), NEUTRAL_COLOR);
    }

    #[rstest]
    #[case::exact("Finance")]
    #[case::lowercase("finance")]
    #[case::uppercase("FINANCE")]
    fn table_lookup_is_case_insensitive(#[case] label: &str) {
        assert_eq!(department_color(Some(label)), "#4CAF50");
    }

    #[rstest]
    #[case("Research and Development", "#FF6D00")]
    #[case("Human Resources", "#FF4081")]
    #[case("Marketing", "#2196F3")]
    fn table_entries_resolve_to_fixed_colors(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(department_color(Some(label)), expected);
    }

    #[rstest]
    fn unmapped_department_derives_stable_hsl_color() {
        // 'Q' (81) then 'A' (65): 81 * 31 + 65 = 2576, 2576 mod 360 = 56.
        assert_eq!(department_color(Some("QA")), "hsl(56, 80%, 65%)");
        assert_eq!(
            department_color(Some("QA")),
            department_color(Some("QA")),
            "fallback must be deterministic across calls"
        );
    }

    #[rstest]
    fn fallback_hashes_the_label_exactly_as_given() {
        assert_ne!(
            department_color(Some("Platform")),
            department_color(Some("platform")),
            "fallback path is case-sensitive"
        );
    }
}
