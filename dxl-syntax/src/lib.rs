//! Lossless parsing for DXL, the scripting language of IBM DOORS.
//!
//! Source text is [tokenized](syntax::lex::tokenize), [parsed](parse) into an
//! immutable green tree and then viewed through a [red](syntax::red) overlay
//! which knows absolute offsets and parents. The [`find`] and [`symbols`]
//! modules answer editor queries on top of that overlay.

pub mod documents;
pub mod errors;
pub mod find;
pub mod source;
pub mod symbols;
pub mod syntax;

mod messages;

pub use self::documents::{Document, Documents};
pub use self::syntax::lex::tokenize;
pub use self::syntax::parse::{parse, parse_text, Parse};
