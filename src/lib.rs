#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]

//! Success-count dice checks for Utakata no Alsetto.
//!
//! A command such as `7AL2x10` is parsed into a [`CheckRequest`], which is then
//! resolved against a [`DiceSource`]: every die at or below the target is a
//! success, and every triumph is rerolled until a wave produces none.
//!
//! ```
//! use alsetto::{parse_command, ScriptedSource};
//!
//! let check = parse_command("5AL").unwrap();
//! let result = check.resolve(&mut ScriptedSource::new([4, 1, 6, 3, 2, 5])).unwrap();
//!
//! assert_eq!(result.successes(), 3);
//! assert_eq!(result.triumphs(), 1);
//! ```


#[cfg(test)]
mod check_test_strategies;

mod error;
mod check;
mod roll;
mod resolve;
mod parser;
mod system;

pub use error::Error;
pub use check::{CheckRequest, CheckBuilder, CriticalMode, DIE_FACES, DEFAULT_TARGET};
pub use roll::{DiceSource, RandomSource, ScriptedSource};
pub use resolve::{CheckResult, Wave, resolve};
pub use parser::{
    ParserError, Parser, Token,
    parse_check, parse_command
};
pub use system::GameSystem;
