//! Encode hook: re-emitting wrapped payloads through the JSON codec.

use serde::ser::{Error as _, Serialize, Serializer};

use crate::error::EncodeError;
use crate::value::{DynValue, Repr};

impl Serialize for DynValue {
    /// Emits exactly the JSON literal of the wrapped payload. Explicit
    /// `null` always becomes the `null` literal; it is never omitted.
    ///
    /// The undefined sentinel has no representable value. A field holding
    /// it must be dropped by the enclosing structure's own omission
    /// mechanism, `#[serde(skip_serializing_if = "DynValue::is_undefined")]`,
    /// before serialization reaches it; otherwise encoding fails rather
    /// than silently emitting `null` or an empty object.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Repr::Undefined => Err(S::Error::custom("value is undefined")),
            Repr::Null => serializer.serialize_unit(),
            Repr::Bool(b) => serializer.serialize_bool(*b),
            Repr::Number(n) => n.serialize(serializer),
            Repr::String(s) => serializer.serialize_str(s),
            Repr::Array(items) => serializer.collect_seq(items),
            Repr::Object(entries) => serializer.collect_map(entries),
        }
    }
}

impl DynValue {
    /// Encode this value as a JSON document.
    ///
    /// Fails with [`EncodeError::Undefined`] for the sentinel, which has
    /// nothing to encode.
    pub fn to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        if self.is_undefined() {
            return Err(EncodeError::Undefined);
        }
        serde_json::to_vec(self).map_err(EncodeError::Codec)
    }

    /// [`to_vec`](DynValue::to_vec), as a `String`.
    pub fn to_json_string(&self) -> Result<String, EncodeError> {
        if self.is_undefined() {
            return Err(EncodeError::Undefined);
        }
        serde_json::to_string(self).map_err(EncodeError::Codec)
    }
}
