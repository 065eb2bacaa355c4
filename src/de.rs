//! Decode hook: byte and text parsing, plus embedding into decoded structs.

use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::DecodeError;
use crate::value::DynValue;

impl DynValue {
    /// Decode a raw JSON document and wrap its root.
    ///
    /// Tokenization is entirely the codec's business; whatever it rejects
    /// (malformed syntax, truncated input, invalid UTF-8) surfaces here
    /// unchanged as a [`DecodeError`].
    pub fn from_slice(bytes: &[u8]) -> Result<DynValue, DecodeError> {
        Ok(serde_json::from_slice::<Value>(bytes)?.into())
    }
}

impl FromStr for DynValue {
    type Err = DecodeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str::<Value>(input)?.into())
    }
}

impl<'de> Deserialize<'de> for DynValue {
    /// Lets `DynValue` stand as a declared field type inside any structure
    /// the codec decodes: the codec hands over the generic sub-tree at that
    /// position and it is wrapped in place. An explicit `null` arrives as
    /// [`DynValue::NULL`]; a field the document omits is never seen by this
    /// impl at all, which is why embedding fields carry `#[serde(default)]`
    /// to land on [`DynValue::UNDEFINED`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(DynValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_slice_wraps_the_document_root() {
        let doc = DynValue::from_slice(br#"{"a": [1, 2], "b": null}"#).unwrap();
        assert!(doc.is_object());
        assert_eq!(doc.get("a").len(), 2);
        assert!(doc.get("b").is_null());
    }

    #[test]
    fn from_slice_accepts_scalar_roots() {
        assert_eq!(DynValue::from_slice(b"42").unwrap().as_f64(), Some(42.0));
        assert_eq!(
            DynValue::from_slice(br#""hi""#).unwrap().as_str(),
            Some("hi")
        );
        assert!(DynValue::from_slice(b"null").unwrap().is_null());
    }

    #[test]
    fn from_slice_propagates_codec_rejections() {
        assert!(DynValue::from_slice(b"{\"a\":").is_err());
        assert!(DynValue::from_slice(b"not json").is_err());
        assert!(DynValue::from_slice(b"\xff\xfe").is_err());
    }

    #[test]
    fn parse_from_str_matches_from_slice() {
        let doc: DynValue = r#"[true, "x"]"#.parse().unwrap();
        assert_eq!(doc, DynValue::from_slice(br#"[true, "x"]"#).unwrap());
        assert!("{".parse::<DynValue>().is_err());
    }

    #[test]
    fn deserialize_inside_a_generic_tree() {
        // The decode hook applies at any depth, not just the root.
        let nested: Vec<DynValue> = serde_json::from_str(r#"[{"k": 1}, null]"#).unwrap();
        assert_eq!(nested[0].get("k").as_f64(), Some(1.0));
        assert!(nested[1].is_null());
        assert_eq!(nested[0], DynValue::from(json!({"k": 1})));
    }
}
