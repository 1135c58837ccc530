//! Record-count input policy.
//!
//! Counts arrive as raw text from a prompt or a flag. Anything that is not a
//! positive integer is replaced by [`DEFAULT_COUNT`]; the caller decides how
//! to warn about the substitution.

use std::num::NonZeroU32;

/// Count used when the supplied value is missing or invalid.
pub const DEFAULT_COUNT: NonZeroU32 = match NonZeroU32::new(20_000) {
    Some(count) => count,
    None => panic!("default count must be non-zero"),
};

/// Outcome of interpreting a raw count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountResolution {
    /// The input was a positive integer.
    Parsed(NonZeroU32),
    /// The input was rejected and [`DEFAULT_COUNT`] substituted.
    Defaulted {
        /// The rejected input, trimmed.
        input: String,
    },
}

impl CountResolution {
    /// The count to generate.
    #[must_use]
    pub const fn count(&self) -> NonZeroU32 {
        match self {
            Self::Parsed(count) => *count,
            Self::Defaulted { .. } => DEFAULT_COUNT,
        }
    }

    /// Returns `true` when the default was substituted.
    #[must_use]
    pub const fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

/// Interprets `raw` as a record count.
///
/// Surrounding whitespace is ignored. Zero, negative, non-numeric and
/// out-of-range values resolve to [`DEFAULT_COUNT`].
///
/// # Example
///
/// ```
/// use customer_fixtures::{DEFAULT_COUNT, resolve_count};
///
/// assert_eq!(resolve_count(" 150 ").count().get(), 150);
/// assert_eq!(resolve_count("lots").count(), DEFAULT_COUNT);
/// ```
#[must_use]
pub fn resolve_count(raw: &str) -> CountResolution {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .map_or_else(
            || CountResolution::Defaulted {
                input: trimmed.to_owned(),
            },
            CountResolution::Parsed,
        )
}

/// Output file name for a document of `count` records.
///
/// # Example
///
/// ```
/// use customer_fixtures::{DEFAULT_COUNT, output_file_name};
///
/// assert_eq!(output_file_name(DEFAULT_COUNT), "customers_20000.xml");
/// ```
#[must_use]
pub fn output_file_name(count: NonZeroU32) -> String {
    format!("customers_{count}.xml")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", 1)]
    #[case("20000", 20_000)]
    #[case("  42\n", 42)]
    #[case("+7", 7)]
    fn positive_integers_are_accepted(#[case] raw: &str, #[case] expected: u32) {
        let resolution = resolve_count(raw);

        assert!(!resolution.is_defaulted());
        assert_eq!(resolution.count().get(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-5")]
    #[case("")]
    #[case("twenty")]
    #[case("12.5")]
    #[case("99999999999")]
    fn invalid_input_falls_back_to_default(#[case] raw: &str) {
        let resolution = resolve_count(raw);

        assert!(resolution.is_defaulted());
        assert_eq!(resolution.count(), DEFAULT_COUNT);
        assert_eq!(
            resolution,
            CountResolution::Defaulted {
                input: raw.trim().to_owned(),
            }
        );
    }

    #[rstest]
    #[case(1, "customers_1.xml")]
    #[case(20_000, "customers_20000.xml")]
    fn file_name_embeds_count(#[case] count: u32, #[case] expected: &str) {
        let non_zero = NonZeroU32::new(count).expect("non-zero");
        assert_eq!(output_file_name(non_zero), expected);
    }
}
