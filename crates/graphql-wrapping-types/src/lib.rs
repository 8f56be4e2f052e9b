//! Compact representation of the wrapping of a GraphQL type: the chain of list and non-null
//! modifiers around a named type.
//!
//! `[[Int!]]!` is stored as a single `u32`:
//!
//! ```text
//! bit 0        inner named type is required
//! bits 1..=4   list depth
//! bits 5..     one "required" flag per list, the innermost list first
//! ```

use std::fmt;

const INNER_REQUIRED: u32 = 1;
const DEPTH_SHIFT: u32 = 1;
const DEPTH_MASK: u32 = 0b1111 << DEPTH_SHIFT;
const LIST_SHIFT: u32 = 5;

/// Deepest list nesting that can be represented.
pub const MAX_LIST_DEPTH: u8 = 15;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Wrapping(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListWrapping {
    NullableList,
    RequiredList,
}

impl ListWrapping {
    pub fn is_required(self) -> bool {
        matches!(self, ListWrapping::RequiredList)
    }
}

impl Wrapping {
    pub fn nullable() -> Self {
        Self(0)
    }

    pub fn required() -> Self {
        Self(INNER_REQUIRED)
    }

    pub fn new(required: bool) -> Self {
        if required {
            Self::required()
        } else {
            Self::nullable()
        }
    }

    #[must_use]
    pub fn wrap_list(self) -> Self {
        self.push_list(false)
    }

    #[must_use]
    pub fn wrap_list_non_null(self) -> Self {
        self.push_list(true)
    }

    fn push_list(self, required: bool) -> Self {
        let depth = self.list_depth();
        debug_assert!(depth < MAX_LIST_DEPTH, "list wrapping too deep");
        if depth >= MAX_LIST_DEPTH {
            return self;
        }

        let mut bits = (self.0 & !DEPTH_MASK) | (u32::from(depth + 1) << DEPTH_SHIFT);
        if required {
            bits |= 1 << (LIST_SHIFT + u32::from(depth));
        }
        Self(bits)
    }

    pub fn list_depth(self) -> u8 {
        ((self.0 & DEPTH_MASK) >> DEPTH_SHIFT) as u8
    }

    pub fn is_list(self) -> bool {
        self.list_depth() > 0
    }

    pub fn inner_is_required(self) -> bool {
        self.0 & INNER_REQUIRED != 0
    }

    /// Whether the outermost layer is non-null.
    pub fn is_required(self) -> bool {
        self.0 & self.outermost_required_bit() != 0
    }

    pub fn is_nullable(self) -> bool {
        !self.is_required()
    }

    /// Drops the non-null modifier of the outermost layer, `[Int]!` becomes `[Int]`.
    #[must_use]
    pub fn without_non_null(self) -> Self {
        Self(self.0 & !self.outermost_required_bit())
    }

    /// Pops the outermost list, `[[Int!]]!` gives `(RequiredList, [Int!])`.
    pub fn without_list(self) -> Option<(ListWrapping, Wrapping)> {
        let depth = self.list_depth();
        if depth == 0 {
            return None;
        }

        let list = if self.is_required() {
            ListWrapping::RequiredList
        } else {
            ListWrapping::NullableList
        };
        let remaining_depth = u32::from(depth - 1);
        let bits = (self.0 & !DEPTH_MASK & !self.outermost_required_bit()) | (remaining_depth << DEPTH_SHIFT);

        Some((list, Self(bits)))
    }

    /// List wrappings from the outermost to the innermost one.
    pub fn list_wrappings(self) -> impl Iterator<Item = ListWrapping> {
        let depth = u32::from(self.list_depth());
        (0..depth).rev().map(move |index| {
            if self.0 & (1 << (LIST_SHIFT + index)) != 0 {
                ListWrapping::RequiredList
            } else {
                ListWrapping::NullableList
            }
        })
    }

    /// Renders the wrapping around the given named type, e.g. `[Int!]!`.
    pub fn type_display(self, name: &str) -> impl fmt::Display + '_ {
        TypeDisplay { wrapping: self, name }
    }

    fn outermost_required_bit(self) -> u32 {
        match self.list_depth() {
            0 => INNER_REQUIRED,
            depth => 1 << (LIST_SHIFT + u32::from(depth) - 1),
        }
    }
}

impl fmt::Debug for Wrapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrapping({})", self.type_display("T"))
    }
}

struct TypeDisplay<'a> {
    wrapping: Wrapping,
    name: &'a str,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lists: Vec<ListWrapping> = self.wrapping.list_wrappings().collect();
        for _ in &lists {
            f.write_str("[")?;
        }
        f.write_str(self.name)?;
        if self.wrapping.inner_is_required() {
            f.write_str("!")?;
        }
        for list in lists.iter().rev() {
            f.write_str("]")?;
            if list.is_required() {
                f.write_str("!")?;
            }
        }
        Ok(())
    }
}
