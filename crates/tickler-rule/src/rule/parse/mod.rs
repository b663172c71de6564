//! Rule text parsing.
//!
//! Grammar: an empty string, or a kind letter followed by comma-separated
//! integer lists.
//! - `d <interval>`
//! - `y`
//! - `w <weekdays>`
//! - `m <days> [<months>]`

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::parse;
