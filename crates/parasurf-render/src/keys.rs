//! Key-script parsing shared by the controllers.

use parasurf_core::{ParasurfError, Result};

/// A command bound to a single viewer key.
pub trait KeyCommand: Sized {
    fn from_key(key: char) -> Result<Self>;
}

/// Parse a script of key presses such as `"q, q, w z"`.
///
/// Tokens are separated by commas or whitespace; each token must be a single
/// key. An empty script yields no commands.
pub fn parse_script<C: KeyCommand>(script: &str) -> Result<Vec<C>> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(key), None) => C::from_key(key),
                _ => Err(ParasurfError::UnknownCommand(token.to_string())),
            }
        })
        .collect()
}
