use std::{fmt, sync::Arc};

/// Root-to-leaf path of a value in the response, as it appears in a serialized error.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Default)]
pub struct ErrorPath(Vec<ErrorPathSegment>);

impl std::ops::Deref for ErrorPath {
    type Target = Vec<ErrorPathSegment>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for ErrorPath {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub enum ErrorPathSegment {
    Field(Arc<str>),
    Index(usize),
}

impl serde::Serialize for ErrorPathSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ErrorPathSegment::Field(key) => serializer.serialize_str(key),
            ErrorPathSegment::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

impl serde::Serialize for ErrorPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

pub trait InsertIntoErrorPath {
    fn insert_into(self, path: &mut ErrorPath);
}

impl InsertIntoErrorPath for &str {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.push(ErrorPathSegment::Field(self.into()));
    }
}

impl InsertIntoErrorPath for String {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.push(ErrorPathSegment::Field(self.into()));
    }
}

impl InsertIntoErrorPath for usize {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.push(ErrorPathSegment::Index(self));
    }
}

impl InsertIntoErrorPath for u32 {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.push(ErrorPathSegment::Index(self as usize));
    }
}

impl InsertIntoErrorPath for &ResponsePathSegment {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.push(match self {
            ResponsePathSegment::Field(key) => ErrorPathSegment::Field(key.clone()),
            ResponsePathSegment::Index(index) => ErrorPathSegment::Index(*index),
        });
    }
}

impl InsertIntoErrorPath for &ResponsePath {
    fn insert_into(self, path: &mut ErrorPath) {
        for segment in self.segments() {
            segment.insert_into(path);
        }
    }
}

pub trait InsertAllIntoErrorPath {
    fn insert_all_into(self, path: &mut ErrorPath);
}

impl<T: InsertIntoErrorPath> InsertAllIntoErrorPath for T {
    fn insert_all_into(self, path: &mut ErrorPath) {
        self.insert_into(path);
    }
}

impl<'a, T> InsertAllIntoErrorPath for &'a [T]
where
    &'a T: InsertIntoErrorPath,
{
    fn insert_all_into(self, path: &mut ErrorPath) {
        for item in self {
            item.insert_into(path);
        }
    }
}

impl<T1: InsertAllIntoErrorPath, T2: InsertAllIntoErrorPath> InsertAllIntoErrorPath for (T1, T2) {
    fn insert_all_into(self, path: &mut ErrorPath) {
        self.0.insert_all_into(path);
        self.1.insert_all_into(path);
    }
}

impl<T: InsertAllIntoErrorPath> From<T> for ErrorPath {
    fn from(t: T) -> Self {
        let mut path = ErrorPath(Vec::new());
        t.insert_all_into(&mut path);
        path
    }
}

/// Location of a value being produced in the response.
///
/// Immutable linked list from the leaf to the root. Each field or list item creates a new head
/// node pointing at its parent, so sibling fields share the whole path above them and cloning
/// is a reference count increment.
#[derive(Clone, Default)]
pub struct ResponsePath(Option<Arc<ResponsePathNode>>);

struct ResponsePathNode {
    parent: ResponsePath,
    segment: ResponsePathSegment,
    // Concrete object type owning the field, if known.
    typename: Option<Arc<str>>,
    len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponsePathSegment {
    Field(Arc<str>),
    Index(usize),
}

impl ResponsePath {
    pub fn root() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn child(&self, key: impl Into<Arc<str>>) -> Self {
        self.push(ResponsePathSegment::Field(key.into()), None)
    }

    #[must_use]
    pub fn child_with_type(&self, key: impl Into<Arc<str>>, typename: impl Into<Arc<str>>) -> Self {
        self.push(ResponsePathSegment::Field(key.into()), Some(typename.into()))
    }

    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.push(ResponsePathSegment::Index(index), None)
    }

    fn push(&self, segment: ResponsePathSegment, typename: Option<Arc<str>>) -> Self {
        Self(Some(Arc::new(ResponsePathNode {
            parent: self.clone(),
            segment,
            typename,
            len: self.len() + 1,
        })))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }

    pub fn len(&self) -> usize {
        self.0.as_ref().map(|node| node.len).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    pub fn last(&self) -> Option<&ResponsePathSegment> {
        self.0.as_ref().map(|node| &node.segment)
    }

    pub fn typename(&self) -> Option<&str> {
        self.0.as_ref().and_then(|node| node.typename.as_deref())
    }

    pub fn parent(&self) -> Option<&ResponsePath> {
        self.0.as_ref().map(|node| &node.parent)
    }

    /// Segments from the root to the leaf.
    pub fn segments(&self) -> Vec<&ResponsePathSegment> {
        let mut segments = Vec::with_capacity(self.len());
        let mut current = self;
        while let Some(node) = &current.0 {
            segments.push(&node.segment);
            current = &node.parent;
        }
        segments.reverse();
        segments
    }

    /// Whether both paths point to the same node.
    pub fn ptr_eq(&self, other: &ResponsePath) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments().into_iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                ResponsePathSegment::Field(key) => f.write_str(key)?,
                ResponsePathSegment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ResponsePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments()).finish()
    }
}
