//! Domain records exposed by the store and the HTTP API.
//!
//! Everything here serializes with camelCase field names; list-valued columns
//! are stored as JSON text and decoded on the way out of the repositories.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod analytics;
pub mod catalog;
pub mod passport;
pub mod user;

/// Declares a closed set of lowercase string values stored as text columns.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!(
                        "Unknown {} '{}'. Expected one of: {}",
                        $label,
                        other,
                        [$($text),+].join(", ")
                    )),
                }
            }
        }
    };
}

pub(crate) use string_enum;

/// Decodes a JSON array column, treating NULL or malformed text as empty.
pub(crate) fn decode_list<T: DeserializeOwned>(raw: Option<String>) -> Vec<T> {
    raw.and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub(crate) fn encode_list<T: Serialize>(items: &[T]) -> Option<String> {
    serde_json::to_string(items).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_list_tolerates_missing_and_malformed_values() {
        assert!(decode_list::<String>(None).is_empty());
        assert!(decode_list::<String>(Some("not json".to_string())).is_empty());
        assert_eq!(
            decode_list::<String>(Some(r#"["a","b"]"#.to_string())),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn encode_list_produces_json_array() {
        let encoded = encode_list(&["cotton", "silk"]).unwrap();
        assert_eq!(encoded, r#"["cotton","silk"]"#);
    }
}
