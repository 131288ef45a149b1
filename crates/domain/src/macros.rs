//! Macro for implementing Display and FromStr for keyword enums
//!
//! Option values such as the rounding policy are spelled as fixed lowercase
//! keywords. This macro generates both directions of the conversion from a
//! single table so the two can never drift apart.
//!
//! # Example
//!
//! ```rust
//! use datespace_domain::impl_keyword_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Direction {
//!     Ascending,
//!     Descending,
//! }
//!
//! impl_keyword_conversions!(Direction {
//!     Ascending => "ascending",
//!     Descending => "descending",
//! });
//!
//! assert_eq!(Direction::Ascending.to_string(), "ascending");
//! assert_eq!("descending".parse::<Direction>(), Ok(Direction::Descending));
//! assert!("Descending".parse::<Direction>().is_err());
//! ```

/// Implements Display and FromStr traits for keyword enums
///
/// This macro generates:
/// - Display trait: writes the keyword for each variant
/// - FromStr trait: parses the exact keyword (case-sensitive)
/// - `KEYWORDS`: the accepted keywords in declaration order
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their keywords
#[macro_export]
macro_rules! impl_keyword_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Accepted keywords, in declaration order.
            pub const KEYWORDS: &'static [&'static str] = &[$($str),+];
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!(
                        "Invalid {}: '{}'. Must be one of [{}]",
                        stringify!($enum_name),
                        s,
                        Self::KEYWORDS.join(",")
                    )),
                }
            }
        }
    };
}
