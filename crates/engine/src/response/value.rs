use async_graphql_value::{ConstValue, Name};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};

/// Completed value of a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResponseValue {
    #[default]
    Null,
    /// Serialized scalar or enum value.
    Scalar(ConstValue),
    List(Vec<ResponseValue>),
    Object(ResponseObject),
}

impl ResponseValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ResponseValue::Null)
    }

    pub fn as_object(&self) -> Option<&ResponseObject> {
        match self {
            ResponseValue::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ResponseValue]> {
        match self {
            ResponseValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&ConstValue> {
        match self {
            ResponseValue::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

/// Fields of an object, keyed by response key in the order they were collected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseObject(IndexMap<Name, ResponseValue>);

impl ResponseObject {
    pub fn with_capacity(capacity: usize) -> Self {
        ResponseObject(IndexMap::with_capacity(capacity))
    }

    pub fn insert(&mut self, key: &str, value: ResponseValue) {
        self.0.insert(Name::new(key), value);
    }

    pub fn get(&self, key: &str) -> Option<&ResponseValue> {
        self.0.get(key)
    }

    pub(crate) fn get_full(&self, key: &str) -> Option<(usize, &ResponseValue)> {
        self.0.get_full(key).map(|(index, _, value)| (index, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|key| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponseValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl serde::Serialize for ResponseValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ResponseValue::Null => serializer.serialize_none(),
            ResponseValue::Scalar(value) => serde::Serialize::serialize(value, serializer),
            ResponseValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ResponseValue::Object(object) => serde::Serialize::serialize(object, serializer),
        }
    }
}

impl serde::Serialize for ResponseObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
