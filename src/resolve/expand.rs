//! Placeholder expansion for `${name}` expressions.
//!
//! Expands `${name}` placeholders in a string against the property store.
//! The engine is fail-safe in the other direction from silent substitution:
//! an undefined name is an error, never an empty string, so a half-resolved
//! path can not leak into a command line unnoticed.
//!
//! A `$` that is not followed by `{` is an ordinary character, as is a lone
//! `}`.

use crate::store::PropertyStore;
use std::fmt;

/// Error type for expansion failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// A placeholder referenced a name not present in the store.
    UndefinedName {
        /// The name that was referenced.
        name: String,
        /// The byte position of the `${` that referenced it.
        position: usize,
    },
    /// A `${` was found without a closing `}`.
    Unterminated {
        /// The byte position of the `${`.
        position: usize,
    },
    /// An empty placeholder (`${}`) was found.
    EmptyName {
        /// The byte position of the `${`.
        position: usize,
    },
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::UndefinedName { name, position } => {
                write!(f, "undefined property '{}' at position {}", name, position)
            }
            ExpandError::Unterminated { position } => {
                write!(f, "unterminated '${{' at position {}", position)
            }
            ExpandError::EmptyName { position } => {
                write!(f, "empty placeholder '${{}}' at position {}", position)
            }
        }
    }
}

impl std::error::Error for ExpandError {}

/// Expand every `${name}` placeholder in `input` against `values`.
///
/// Returns the expanded string, or an error if a placeholder is malformed
/// or references a name the store does not contain.
pub fn expand(input: &str, values: &PropertyStore) -> Result<String, ExpandError> {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some((_, '{')) => {
                chars.next();
            }
            _ => {
                result.push('$');
                continue;
            }
        }

        let start_pos = pos;
        let mut name = String::new();
        loop {
            match chars.next() {
                Some((_, '}')) => break,
                Some((_, c)) => name.push(c),
                None => return Err(ExpandError::Unterminated { position: start_pos }),
            }
        }

        if name.is_empty() {
            return Err(ExpandError::EmptyName { position: start_pos });
        }

        match values.get(&name) {
            Some(value) => result.push_str(value),
            None => {
                return Err(ExpandError::UndefinedName {
                    name,
                    position: start_pos,
                });
            }
        }
    }

    Ok(result)
}
