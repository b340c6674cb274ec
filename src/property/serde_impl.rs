//! Serde support for value properties (feature-gated).
//!
//! A property serializes as its held value. Deserializing runs the rules of
//! its kind, so invalid data never produces a property.
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use trackline::property::EmailAddress;
//!
//! #[derive(Deserialize)]
//! struct Contact {
//!     email: EmailAddress, // validated on deserialize
//! }
//!
//! let bad: Result<Contact, _> = serde_json::from_str(r#"{"email": "nobody"}"#);
//! assert!(bad.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Kind, ValueProperty};

impl<K> Serialize for ValueProperty<K>
where
    K: Kind,
    K::Held: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, K> Deserialize<'de> for ValueProperty<K>
where
    K: Kind,
    K::Held: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let held = K::Held::deserialize(deserializer)?;
        Self::parse(Some(held)).map_err(serde::de::Error::custom)
    }
}
