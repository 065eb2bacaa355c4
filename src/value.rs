//! Dynamic JSON value wrapper and its navigation surface.

use std::ops;

use indexmap::IndexMap;
use serde_json::{Number, Value};

/// A single decoded JSON value of unknown shape.
///
/// `DynValue` wraps one node of a decoded document (`null`, boolean,
/// number, string, array, or object), plus the out-of-band
/// [`UNDEFINED`](DynValue::UNDEFINED) sentinel produced by failed lookups.
/// Navigation ([`get`](DynValue::get), [`index`](DynValue::index)) never
/// fails: a wrong payload kind, an absent key, or an out-of-range index all
/// yield the sentinel, and the sentinel answers further lookups with itself,
/// so arbitrarily deep chains are total.
///
/// ```
/// use json_dyn::DynValue;
///
/// let doc = DynValue::from_slice(br#"{"servers": [{"host": "a"}, {"host": "b"}]}"#)?;
/// assert_eq!(doc.get("servers").index(1).get("host").as_str(), Some("b"));
/// assert!(doc.get("ports").index(9).get("x").is_undefined());
/// # Ok::<(), json_dyn::DecodeError>(())
/// ```
///
/// Values are immutable once constructed. The wrapped tree is owned and has
/// no interior mutability, so shared references can be read from any number
/// of threads without locking.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DynValue(pub(crate) Repr);

/// Closed payload variant. Decoding only ever produces the six JSON kinds;
/// `Undefined` exists solely as the lookup-miss sentinel.
#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) enum Repr {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<DynValue>),
    Object(IndexMap<String, DynValue>),
}

// Lent out by failed lookups so navigation can chain by reference.
static UNDEFINED: DynValue = DynValue(Repr::Undefined);

impl DynValue {
    /// The explicit JSON `null` literal.
    pub const NULL: DynValue = DynValue(Repr::Null);

    /// Sentinel for lookups that found nothing. Never produced by decoding:
    /// a document's `null` decodes to [`NULL`](DynValue::NULL), which this
    /// constant does not equal.
    pub const UNDEFINED: DynValue = DynValue(Repr::Undefined);

    /// True iff the payload is the explicit `null` literal.
    pub fn is_null(&self) -> bool {
        matches!(self.0, Repr::Null)
    }

    /// True iff this value is the [`UNDEFINED`](DynValue::UNDEFINED)
    /// sentinel, i.e. some lookup along the way found nothing.
    pub fn is_undefined(&self) -> bool {
        matches!(self.0, Repr::Undefined)
    }

    /// True iff the payload is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self.0, Repr::Bool(_))
    }

    /// True iff the payload is a number.
    pub fn is_number(&self) -> bool {
        matches!(self.0, Repr::Number(_))
    }

    /// True iff the payload is a string.
    pub fn is_string(&self) -> bool {
        matches!(self.0, Repr::String(_))
    }

    /// True iff the payload is an array.
    pub fn is_array(&self) -> bool {
        matches!(self.0, Repr::Array(_))
    }

    /// True iff the payload is an object.
    pub fn is_object(&self) -> bool {
        matches!(self.0, Repr::Object(_))
    }

    /// The payload as a boolean, or `None` if it is anything else.
    pub fn as_bool(&self) -> Option<bool> {
        match &self.0 {
            Repr::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The payload as an `f64`, or `None` if it is not a number.
    pub fn as_f64(&self) -> Option<f64> {
        match &self.0 {
            Repr::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// The payload as a string slice, or `None` if it is not a string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.0 {
            Repr::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up `key` in an object payload.
    ///
    /// Returns the member value, which may legitimately be explicit `null`.
    /// If the payload is not an object, or the key is absent, returns the
    /// [`UNDEFINED`](DynValue::UNDEFINED) sentinel.
    pub fn get(&self, key: &str) -> &DynValue {
        match &self.0 {
            Repr::Object(entries) => entries.get(key).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    /// Look up element `i` in an array payload.
    ///
    /// If the payload is not an array, or `i` is out of range, returns the
    /// [`UNDEFINED`](DynValue::UNDEFINED) sentinel.
    pub fn index(&self, i: usize) -> &DynValue {
        match &self.0 {
            Repr::Array(items) => items.get(i).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    /// Element count of an array payload, `0` included; `-1` for every
    /// other payload kind. Callers that must tell an empty array apart from
    /// a non-array probe [`is_array`](DynValue::is_array) first.
    pub fn len(&self) -> isize {
        match &self.0 {
            Repr::Array(items) => items.len() as isize,
            _ => -1,
        }
    }

    /// The raw wrapped payload as the codec's generic tree, or `None` for
    /// the [`UNDEFINED`](DynValue::UNDEFINED) sentinel, which has no JSON
    /// representation.
    pub fn to_value(&self) -> Option<Value> {
        let value = match &self.0 {
            Repr::Undefined => return None,
            Repr::Null => Value::Null,
            Repr::Bool(b) => Value::Bool(*b),
            Repr::Number(n) => Value::Number(n.clone()),
            Repr::String(s) => Value::String(s.clone()),
            Repr::Array(items) => {
                Value::Array(items.iter().filter_map(DynValue::to_value).collect())
            }
            Repr::Object(entries) => Value::Object(
                entries
                    .iter()
                    .filter_map(|(key, member)| member.to_value().map(|v| (key.clone(), v)))
                    .collect(),
            ),
        };
        Some(value)
    }
}

impl From<Value> for DynValue {
    /// Wrap an already-decoded generic tree. Key order of objects is kept
    /// as the codec delivered it.
    fn from(value: Value) -> Self {
        let repr = match value {
            Value::Null => Repr::Null,
            Value::Bool(b) => Repr::Bool(b),
            Value::Number(n) => Repr::Number(n),
            Value::String(s) => Repr::String(s),
            Value::Array(items) => Repr::Array(items.into_iter().map(DynValue::from).collect()),
            Value::Object(entries) => Repr::Object(
                entries
                    .into_iter()
                    .map(|(key, member)| (key, DynValue::from(member)))
                    .collect(),
            ),
        };
        DynValue(repr)
    }
}

impl ops::Index<&str> for DynValue {
    type Output = DynValue;

    /// `value["key"]` — same contract as [`get`](DynValue::get).
    fn index(&self, key: &str) -> &DynValue {
        self.get(key)
    }
}

impl ops::Index<usize> for DynValue {
    type Output = DynValue;

    /// `value[2]` — same contract as [`index`](DynValue::index).
    fn index(&self, i: usize) -> &DynValue {
        DynValue::index(self, i)
    }
}
