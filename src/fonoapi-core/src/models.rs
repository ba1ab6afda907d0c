use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// AttributeMap holds everything the service returned about one device.
///
/// Keys are kept whether or not they appear in
/// [`DEFAULT_ATTRIBUTES`](crate::DEFAULT_ATTRIBUTES). A `None` value is a key the
/// service sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<String, Option<String>>);

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a decoded JSON object.
    ///
    /// Strings are taken as-is and `null` becomes `None`. Numbers, booleans and
    /// nested values keep their compact JSON text so nothing is dropped.
    pub fn from_json(object: serde_json::Map<String, serde_json::Value>) -> Self {
        let attributes = object
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::Null => None,
                    serde_json::Value::String(s) => Some(s),
                    other => Some(other.to_string()),
                };
                (key, value)
            })
            .collect();
        Self(attributes)
    }

    /// Value of an attribute; `None` if it is missing or null
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Option<String>>> for AttributeMap {
    fn from(map: BTreeMap<String, Option<String>>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for AttributeMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        )
    }
}

/// ErrorBody is the `{status, message}` object the service uses to signal
/// errors and empty results. Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl ErrorBody {
    /// Lenient extraction from any JSON value; non-string fields count as missing.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            status: field("status"),
            message: field("message"),
        }
    }
}
