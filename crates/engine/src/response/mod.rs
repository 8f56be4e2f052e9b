mod error;
mod value;

use engine_error::{ErrorCodeCounter, ErrorPath, ErrorPathSegment, GraphqlError};
use serde::ser::SerializeMap;

pub use value::*;

use crate::config::{ErrorOrder, ErrorsConfig};

/// Outcome of a request.
#[derive(Debug)]
pub enum Response {
    /// The request could not be executed at all: no operation could be selected or the
    /// variables were invalid. There is no `data` entry.
    RequestError { errors: Vec<GraphqlError> },
    /// `data` is `None` when a null propagated up to the root.
    Executed {
        data: Option<ResponseObject>,
        errors: Vec<GraphqlError>,
    },
}

impl Response {
    pub(crate) fn request_error(errors: impl IntoIterator<Item = GraphqlError>, config: &ErrorsConfig) -> Self {
        let mut errors = errors.into_iter().collect::<Vec<_>>();
        finalize_errors(&mut errors, None, config);
        Response::RequestError { errors }
    }

    pub(crate) fn executed(data: Option<ResponseObject>, mut errors: Vec<GraphqlError>, config: &ErrorsConfig) -> Self {
        finalize_errors(&mut errors, data.as_ref(), config);
        Response::Executed { data, errors }
    }

    pub fn data(&self) -> Option<&ResponseObject> {
        match self {
            Response::RequestError { .. } => None,
            Response::Executed { data, .. } => data.as_ref(),
        }
    }

    pub fn errors(&self) -> &[GraphqlError] {
        match self {
            Response::RequestError { errors } | Response::Executed { errors, .. } => errors,
        }
    }

    pub fn is_request_error(&self) -> bool {
        matches!(self, Response::RequestError { .. })
    }

    pub fn into_json(self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self)
    }
}

impl serde::Serialize for Response {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Response::RequestError { errors } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("errors", &error::SerializableErrors(errors))?;
                map.end()
            }
            Response::Executed { data, errors } => {
                let mut map = serializer.serialize_map(Some(1 + usize::from(!errors.is_empty())))?;
                map.serialize_entry("data", data)?;
                if !errors.is_empty() {
                    map.serialize_entry("errors", &error::SerializableErrors(errors))?;
                }
                map.end()
            }
        }
    }
}

fn finalize_errors(errors: &mut Vec<GraphqlError>, data: Option<&ResponseObject>, config: &ErrorsConfig) {
    if errors.is_empty() {
        return;
    }

    if config.order == ErrorOrder::Path {
        let mut positioned = errors
            .drain(..)
            .map(|error| (position_in_response(data, error.path.as_ref()), error))
            .collect::<Vec<_>>();
        positioned.sort_by(|(a, _), (b, _)| a.cmp(b));
        errors.extend(positioned.into_iter().map(|(_, error)| error));
    }

    if config.include_codes {
        for error in errors.iter_mut() {
            if !error.extensions.iter().any(|(key, _)| key == "code") {
                let code: &'static str = error.code.into();
                error.extensions.push(("code".into(), code.into()));
            }
        }
    }

    let counter = ErrorCodeCounter::from_errors(errors);
    tracing::debug!(count = counter.count(), codes = ?counter.to_vec(), "Response has errors");
}

/// Index of each path segment within its parent object or list, as far as the path can be
/// followed in the data. Errors below a nulled field share the position of that field.
fn position_in_response(data: Option<&ResponseObject>, path: Option<&ErrorPath>) -> Vec<usize> {
    let (Some(data), Some(path)) = (data, path) else {
        return Vec::new();
    };

    let mut position = Vec::with_capacity(path.len());
    let mut object = Some(data);
    let mut list = None;
    for segment in path.iter() {
        let next = match segment {
            ErrorPathSegment::Field(key) => object.and_then(|object| object.get_full(key)),
            ErrorPathSegment::Index(index) => list
                .and_then(|items: &[ResponseValue]| items.get(*index))
                .map(|item| (*index, item)),
        };
        let Some((index, value)) = next else {
            break;
        };
        position.push(index);
        object = value.as_object();
        list = value.as_list();
    }
    position
}
