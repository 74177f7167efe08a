pub mod source;
pub mod token;

pub use source::{ChainSource, CommandToken, StaticToken, TokenOutcome, TokenSource};
pub use token::Token;
