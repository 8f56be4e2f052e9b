use std::borrow::Cow;

use engine_error::GraphqlError;
use serde::ser::{SerializeMap, SerializeSeq};

pub(super) struct SerializableErrors<'a>(pub &'a [GraphqlError]);

impl serde::Serialize for SerializableErrors<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for error in self.0 {
            seq.serialize_element(&SerializableError(error))?;
        }
        seq.end()
    }
}

struct SerializableError<'a>(&'a GraphqlError);

impl serde::Serialize for SerializableError<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let error = self.0;
        let size = 1
            + usize::from(!error.locations.is_empty())
            + usize::from(error.path.is_some())
            + usize::from(!error.extensions.is_empty());
        let mut map = serializer.serialize_map(Some(size))?;
        map.serialize_entry("message", &error.message)?;
        if !error.locations.is_empty() {
            map.serialize_entry("locations", &error.locations)?;
        }
        if let Some(path) = &error.path {
            map.serialize_entry("path", path)?;
        }
        if !error.extensions.is_empty() {
            map.serialize_entry("extensions", &SerializableExtensions(&error.extensions))?;
        }
        map.end()
    }
}

struct SerializableExtensions<'a>(&'a [(Cow<'static, str>, serde_json::Value)]);

impl serde::Serialize for SerializableExtensions<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
