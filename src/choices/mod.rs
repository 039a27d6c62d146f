pub use self::report::*;

pub(crate) mod report;

/// Trait for types that provide a human-readable description
///
/// Used to display enum variants in the analyzer menu with friendly text
/// rather than the base identifier names for each variant.
pub trait Description {
    /// Returns a static string description of the implementing type
    fn description(&self) -> &'static str;
}

/// Creates enums whose variants are picked by a short code typed on the CLI
///
/// This macro generates:
/// 1. An enum with specified variants
/// 2. Standard trait implementations (Debug, Copy, Clone, Hash)
/// 3. Ord/PartialOrd/Eq/PartialEq, ordered by declaration
/// 4. `ALL`, `code()` and `from_code()` for the menu codes
/// 5. [`Description`] trait implementation
/// 6. Display trait implementation, rendered as `<code>: <description>`
///
/// # Syntax
/// `choice!(EnumName, Variant => "code", "Description", ...)`
///
/// # Example
/// ```
/// use plib::choice;
/// use plib::choices::Description;
///
/// choice!(ColorChoice,
///     Red => "r", "Vibrant Red",
///     Green => "g", "Forest Green"
/// );
///
/// assert_eq!(ColorChoice::from_code("g"), Some(ColorChoice::Green));
/// assert_eq!(ColorChoice::Red.to_string(), "r: Vibrant Red");
/// ```
#[macro_export]
macro_rules! choice {
    ($enum_name:ident, $($variant:ident => $code:literal, $desc:expr),+ $(,)?) => {
        #[derive(Debug, Copy, Clone, Hash, Ord, PartialOrd, Eq, PartialEq)]
        pub enum $enum_name {
            $($variant,)+
        }

        impl $enum_name {
            /// Every variant, in menu order
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant),+];

            /// The code a user types to pick this variant
            pub fn code(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $code),+
                }
            }

            /// Looks a variant up by its code
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($enum_name::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::choices::Description for $enum_name {
            fn description(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $desc),+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                use $crate::choices::Description as _;
                write!(f, "{}: {}", self.code(), self.description())
            }
        }
    };
}
