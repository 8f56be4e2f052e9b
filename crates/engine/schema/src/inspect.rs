use std::fmt::{self, Write};

use async_graphql_value::ConstValue;

/// Renders a value the way it appears inside error messages: strings are quoted, objects are
/// printed as `{ key: value }` and enum values are bare names.
pub fn inspect(value: &ConstValue) -> impl fmt::Display + '_ {
    Inspect(value)
}

struct Inspect<'a>(&'a ConstValue);

impl fmt::Display for Inspect<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ConstValue::Null => f.write_str("null"),
            ConstValue::Number(number) => write!(f, "{number}"),
            ConstValue::String(string) => write_quoted(f, string),
            ConstValue::Boolean(boolean) => write!(f, "{boolean}"),
            ConstValue::Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
            ConstValue::Enum(name) => f.write_str(name),
            ConstValue::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Inspect(item))?;
                }
                f.write_char(']')
            }
            ConstValue::Object(fields) => {
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {}", Inspect(value))?;
                }
                f.write_str(" }")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, string: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in string.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
