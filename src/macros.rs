//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for option enums
///
/// `Display` writes the short name; `FromStr` accepts the short name
/// case-insensitively and maps anything else to the given error variant.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::error::StorefrontError;
///
/// enum_display_fromstr!(
///     NameOrder,
///     StorefrontError::InvalidNameOrder,
///     {
///         All => "all",
///         AToZ => "a-z",
///         ZToA => "z-a",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_variant:path,
        { $($variant:ident => $str:literal),+ $(,)? }
    ) => {
        impl $enum_name {
            /// Every variant, in option-list order.
            pub const ALL: &[$enum_name] = &[$($enum_name::$variant),+];
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::StorefrontError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok($enum_name::$variant),)+
                    _ => Err($error_variant(s.to_string())),
                }
            }
        }
    };
}
