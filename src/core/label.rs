//! Closed sets of named values.
//!
//! Every enumeration in the chest data contract is a fixed, exhaustive set of
//! labels. [`label_enum!`](crate::label_enum) generates the enum together with
//! its name table, `Display` and a forgiving `FromStr`.

use thiserror::Error;

/// Text did not name any member of a label enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind} '{input}', expected one of: {}", .expected.join(", "))]
pub struct ParseLabelError {
    kind: &'static str,
    input: String,
    expected: &'static [&'static str],
}

impl ParseLabelError {
    /// Error for `input` not naming any of `expected`.
    pub fn new(kind: &'static str, input: &str, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            input: input.to_string(),
            expected,
        }
    }

    /// Name of the enumeration that failed to parse.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Names that would have been accepted.
    pub fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

/// Fold a label to its comparison key.
///
/// Case, `_`, `-` and whitespace are ignored, so `rich_mahogany`,
/// `Rich Mahogany` and `RichMahogany` all compare equal.
#[doc(hidden)]
pub fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Generate a label enumeration.
///
/// The generated enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`
/// and serde's `Serialize`/`Deserialize`, and gets:
///
/// - `ALL`: every variant in declaration order
/// - `NAMES`: every variant name in declaration order
/// - `as_str()`: the variant name
/// - `Display` writing the variant name
/// - `FromStr` accepting the variant name in any case, with or without
///   `_`, `-` or space separators
///
/// # Example
///
/// ```
/// use treasure_chest::label_enum;
///
/// label_enum! {
///     pub enum Hinge {
///         Brass,
///         WroughtIron,
///     }
/// }
///
/// assert_eq!(Hinge::ALL, &[Hinge::Brass, Hinge::WroughtIron]);
/// assert_eq!(Hinge::WroughtIron.to_string(), "WroughtIron");
/// assert_eq!("wrought-iron".parse::<Hinge>().unwrap(), Hinge::WroughtIron);
/// assert!("copper".parse::<Hinge>().is_err());
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Every variant name, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$(stringify!($variant)),*];

            /// The variant name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseLabelError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let wanted = $crate::core::normalize_label(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| $crate::core::normalize_label(variant.as_str()) == wanted)
                    .ok_or_else(|| {
                        $crate::core::ParseLabelError::new(stringify!($name), s, Self::NAMES)
                    })
            }
        }
    };
}
