use strum::EnumCount;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::FromRepr,
    strum_macros::EnumCount,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    // Request errors, nothing was executed
    OperationResolutionError,
    VariableError,
    // Field errors
    ArgumentError,
    ResolverError,
    CompletionError,
    // Resolver panics and engine invariants
    InternalServerError,
}

impl ErrorCode {
    /// Request errors abort the execution before any field is resolved.
    pub fn is_request_error(self) -> bool {
        matches!(self, ErrorCode::OperationResolutionError | ErrorCode::VariableError)
    }
}

#[derive(Debug, Default)]
pub struct ErrorCodeCounter([u16; ErrorCode::COUNT]);

impl ErrorCodeCounter {
    pub fn from_errors(errors: &[super::GraphqlError]) -> Self {
        let mut counter = Self::default();
        for error in errors {
            counter.increment(error.code);
        }
        counter
    }

    pub fn increment(&mut self, code: ErrorCode) {
        self.0[code as usize] = self.0[code as usize].saturating_add(1);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorCode, u16)> + '_ {
        self.0.iter().copied().enumerate().filter_map(|(index, count)| {
            if count > 0 {
                ErrorCode::from_repr(index).map(|code| (code, count))
            } else {
                None
            }
        })
    }

    pub fn count(&self) -> usize {
        self.0.iter().map(|count| *count as usize).sum()
    }

    pub fn to_vec(&self) -> Vec<(ErrorCode, u16)> {
        self.iter().collect()
    }
}
