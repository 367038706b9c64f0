//! Opaque string identifiers shared by every aggregate

use uuid::Uuid;

/// Common view over typed identifiers
pub trait Identifier {
    fn value(&self) -> &str;
}

/// Fresh identifier value: a v4 UUID without dashes
pub fn unique_value() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Declares a value-compared, string-backed identifier type.
macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new random identifier
            pub fn unique() -> Self {
                Self($crate::shared::domain::identifier::unique_value())
            }

            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl $crate::shared::domain::identifier::Identifier for $name {
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use identifier;
