//! Tag-grammar pattern engine for lexweave.
//!
//! Compiles compact grammar strings like `<DT>?<JJ>*<NN>+` into matchers
//! over sequences of tagged tokens, then tiles a token stream with greedy
//! non-overlapping matches:
//!
//! ```
//! use lexweave_foundation::Token;
//! use lexweave_pattern::compile;
//!
//! let pattern = compile("<JJ>*<NN>+").unwrap();
//! let tokens = vec![
//!     Token::new("red", "red", "JJ", 1),
//!     Token::new("car", "car", "NN", 2),
//! ];
//! let matches = pattern.consume(&tokens);
//! assert_eq!(matches[0].text(), "red car");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compile;
pub mod pattern;

pub use compile::compile;
pub use pattern::{Pattern, PatternMatch, RepeatKind};
