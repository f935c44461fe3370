//! Matches command lines against registered command signatures.
//!
//! A route is a command name followed by option specs:
//!
//! ```text
//! deploy -f|--file= [--level=<^[0-9]+$>] [-v|--verbose]
//! ```
//!
//! `[..]` marks an option optional, `-x|` gives it a short alias, a trailing `=`
//! means it takes a value, and `<..>` is a regex the value must match.

mod error;
pub use error::Error;

mod spec;
pub use spec::{MatchedBy, OptionSpec};

mod token;
pub use token::{ArgToken, Dashes};

mod value;
pub use value::{Options, Value};

pub mod matcher;
pub use matcher::{Bound, FailureKind, MatchFailure};

mod command;
pub use command::Command;

mod router;
pub use router::{Actions, Callable, Dispatched, Found, Resolution, Router};
