mod arguments;
mod error;
mod input;
mod variables;

pub(crate) use arguments::coerce_argument_values;
pub(crate) use variables::coerce_variable_values;
