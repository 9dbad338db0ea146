//! Uppercase text enumerations and their normalization rules.
//!
//! Every enumerated column is stored as a fixed uppercase string (e.g.
//! `"POLYGON"`, `"HIGH"`). Clients send these values in any case and with
//! spaces or hyphens instead of underscores, so input is folded to a
//! canonical key before matching.
//!
//! Two policies exist:
//! - **strict** ([`TextEnum::parse_strict`]) for kind-like fields: an
//!   unrecognized value is a validation error.
//! - **tolerant** ([`TextEnum::parse_or_default`]) for level/status-like
//!   fields: missing or unrecognized values fall back to `Default`.

use crate::error::CoreError;

/// Common behaviour of the generated text enums.
pub trait TextEnum: Sized + Copy + 'static {
    /// Field name used in validation messages (e.g. `"type"`, `"risk"`).
    const FIELD: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Canonical stored form.
    fn as_str(self) -> &'static str;

    /// Match a raw input against the canonical forms. Returns `None` when
    /// nothing matches.
    fn parse(input: &str) -> Option<Self> {
        let key = canonical_key(input);
        Self::ALL.iter().copied().find(|v| v.as_str() == key)
    }

    /// Parse or fail with a validation error listing the accepted values.
    fn parse_strict(input: &str) -> Result<Self, CoreError> {
        Self::parse(input).ok_or_else(|| {
            let valid: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
            CoreError::Validation(format!(
                "Invalid {} '{input}'. Must be one of: {}",
                Self::FIELD,
                valid.join(", ")
            ))
        })
    }

    /// Parse, falling back to the default when the input is missing or
    /// unrecognized.
    fn parse_or_default(input: Option<&str>) -> Self
    where
        Self: Default,
    {
        input.and_then(Self::parse).unwrap_or_default()
    }
}

/// Fold raw input into the stored key: trim, uppercase, and map `-` and
/// whitespace to `_`.
pub fn canonical_key(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' | '\t' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// Define an uppercase text enum implementing [`TextEnum`], `Display`, and
/// serde (de)serialization as its canonical string.
///
/// ```ignore
/// define_text_enum! {
///     /// Severity of an alert.
///     AlertSeverity("severity") {
///         Info = "INFO",
///         Critical = "CRITICAL",
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident($field:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $crate::text_enum::TextEnum for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::text_enum::TextEnum::as_str(*self))
            }
        }
    };
}
