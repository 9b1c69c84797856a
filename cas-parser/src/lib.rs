//! Tokenizer and parser for the equation steps a learner writes while solving a linear equation.
//!
//! A step is one line of text, such as `2x + 3 = 7`. The [`tokenizer`] splits it into tokens, and
//! the [`parser`] builds an abstract syntax tree from them, reporting malformed input as a
//! [`cas_error::Error`] that points at the offending region of the step.
//!
//! ```
//! use cas_parser::parser::{ast::Root, Parser};
//!
//! let root = Parser::new("x + 2 + 3 = 5").try_parse_full::<Root>().unwrap();
//! assert_eq!(root.to_string(), "x + 2 + 3 = 5");
//! ```

pub mod parser;
pub mod tokenizer;
