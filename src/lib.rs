//! json-dyn — dynamic accessor layer over schema-less JSON.
//!
//! When a JSON document has no shape worth declaring, decoding it into a
//! purpose-built struct is more ceremony than help. [`DynValue`] wraps the
//! decoded generic tree instead and lets callers navigate it with chained
//! key/index lookups, probe the payload kind, and extract typed scalars.
//!
//! The central contract is that navigation never fails: a miss of any kind
//! (wrong payload kind, absent key, out-of-range index) degrades to the
//! [`DynValue::UNDEFINED`] sentinel, and the sentinel answers further
//! lookups with itself. Misses over schema-less data are ordinary values
//! here, not errors.
//!
//! ```
//! use json_dyn::DynValue;
//!
//! let doc = DynValue::from_slice(br#"{"user": {"emails": ["a@x", "b@x"]}}"#)?;
//! assert_eq!(doc["user"]["emails"][0].as_str(), Some("a@x"));
//! assert!(doc["user"]["phone"].is_undefined());
//! # Ok::<(), json_dyn::DecodeError>(())
//! ```
//!
//! `DynValue` also embeds as a field type inside otherwise-static structs,
//! receiving whatever sub-shape the document carries at that position. An
//! explicit `null` field decodes to [`DynValue::NULL`]; an omitted field
//! (with `#[serde(default)]`) lands on the undefined sentinel; the two are
//! never confused:
//!
//! ```
//! use json_dyn::DynValue;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Event {
//!     kind: String,
//!     #[serde(default)]
//!     payload: DynValue,
//! }
//!
//! let event: Event = serde_json::from_str(r#"{"kind": "ping"}"#).unwrap();
//! assert!(event.payload.is_undefined());
//! assert!(!event.payload.is_null());
//! ```
//!
//! JSON text handling is delegated wholesale to `serde_json`; this crate
//! neither tokenizes nor formats anything itself, and codec errors pass
//! through verbatim.

mod de;
mod error;
mod ser;
mod value;

pub use error::{DecodeError, EncodeError};
pub use value::DynValue;
