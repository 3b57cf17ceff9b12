use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The value of a single query parameter.
///
/// `Flag` marks a parameter given without a value (`?debug`) or with an
/// empty one (`?debug=`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryValue {
    Text(String),
    Flag,
}

impl QueryValue {
    /// Wraps a decoded value, treating the empty string as a flag.
    pub fn from_decoded(value: String) -> Self {
        if value.is_empty() {
            QueryValue::Flag
        } else {
            QueryValue::Text(value)
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Text(text) => Some(text),
            QueryValue::Flag => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, QueryValue::Flag)
    }
}

/// A flag displays as `true`, which is also how it is serialized.
impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(text) => f.write_str(text),
            QueryValue::Flag => f.write_str("true"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Text(s)
    }
}

impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QueryValue::Text(text) => serializer.serialize_str(text),
            QueryValue::Flag => serializer.serialize_bool(true),
        }
    }
}

struct QueryValueVisitor;

impl Visitor<'_> for QueryValueVisitor {
    type Value = QueryValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or `true`")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<QueryValue, E> {
        if v {
            Ok(QueryValue::Flag)
        } else {
            Err(E::invalid_value(de::Unexpected::Bool(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<QueryValue, E> {
        Ok(QueryValue::from_decoded(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<QueryValue, E> {
        Ok(QueryValue::from_decoded(v))
    }
}

impl<'de> Deserialize<'de> for QueryValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QueryValueVisitor)
    }
}

/// Decoded query parameters, in the order they were first inserted.
///
/// Inserting an existing key replaces its value but keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryMap(IndexMap<String, QueryValue>);

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut QueryValue> {
        self.0.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sets `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn insert_flag(&mut self, key: impl Into<String>) -> Option<QueryValue> {
        self.0.insert(key.into(), QueryValue::Flag)
    }

    /// Removes `key`, keeping the order of the remaining parameters.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.0.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, QueryValue> {
        self.0.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, QueryValue> {
        self.0.keys()
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<QueryValue>> Extend<(K, V)> for QueryMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a QueryMap {
    type Item = (&'a String, &'a QueryValue);
    type IntoIter = indexmap::map::Iter<'a, String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for QueryMap {
    type Item = (String, QueryValue);
    type IntoIter = indexmap::map::IntoIter<String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
