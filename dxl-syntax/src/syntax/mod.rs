pub mod ast;
pub mod green;
pub mod lex;
pub mod parse;
pub mod red;

mod kind;

#[cfg(test)]
mod tests;

pub use self::kind::{is_builtin_type, Kind};
