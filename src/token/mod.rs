// Public exports.
pub use self::token::{Token, TokenKind};
pub use self::tokenizer::{TokenizeError, TokenizeErrorKind, Tokenizer};

// Public mods.
pub mod token;

#[cfg(feature = "cli")]
pub mod cli_helper;
#[cfg(feature = "cli")]
pub mod cli_stream;

// Private mods.
mod tokenizer;
