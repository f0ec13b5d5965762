//! Type-safe identifiers for tracked entities.
//!
//! Route identifiers are minted fresh for every suggestion batch, so an id
//! from a superseded batch can never resolve against the current one.

use std::fmt;

use uuid::Uuid;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Mint a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

impl_identifier!(ProfileIdentifier);
impl_identifier!(RouteIdentifier);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_unique() {
        let id1 = RouteIdentifier::new();
        let id2 = RouteIdentifier::new();
        assert_ne!(id1, id2);
        assert_eq!(id1, id1.clone());
    }

    #[test]
    fn test_identifier_hash() {
        use std::collections::HashMap;

        let id = RouteIdentifier::new();
        let mut map = HashMap::new();
        map.insert(id, 42);

        assert_eq!(map.get(&id), Some(&42));
    }

    #[test]
    fn test_identifier_serde_round_trip() {
        let id = ProfileIdentifier::new();
        let encoded = serde_json::to_string(&id).unwrap();
        let decoded: ProfileIdentifier = serde_json::from_str(&encoded).unwrap();
        assert_eq!(id, decoded);
    }

    #[test]
    fn test_identifier_display() {
        let id = RouteIdentifier::new();
        assert_eq!(format!("{}", id), id.as_uuid().to_string());
    }
}
