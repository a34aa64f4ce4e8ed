//! error
//!
//! The single error enum for the crate.
//!
//! Every fallible operation returns one of these variants to its immediate
//! caller. Nothing is retried and nothing is logged here; reporting is the
//! calling program's responsibility.
//!
//! # Example
//!
//! ```
//! use flagset::{FlagError, FlagSet};
//!
//! let flags = FlagSet::new(["util"]);
//! let err = flags.get_int("line").unwrap_err();
//! assert_eq!(err, FlagError::NotParsed { set: "util".to_string() });
//! ```

use thiserror::Error;

use crate::flag::FlagKind;

/// Errors from flag registration, parsing, and access.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlagError {
    /// A typed getter was called before a successful parse.
    #[error("flag set '{set}' has not been parsed")]
    NotParsed { set: String },

    /// A getter referenced a key that was never registered.
    #[error("no flag registered under '{key}'")]
    UnknownFlag { key: String },

    /// A getter's expected kind does not match the registered kind.
    #[error("flag '{key}' is {actual}, not {expected}")]
    TypeMismatch {
        key: String,
        expected: FlagKind,
        actual: FlagKind,
    },

    /// A flag-shaped token matched no registered long key or short alias.
    #[error("unrecognized flag '{token}'")]
    UnrecognizedFlag { token: String },

    /// A value token could not be coerced to the flag's kind. An empty
    /// `raw` means a valued flag reached end of input with no value token.
    #[error("invalid value '{raw}' for flag '{key}'")]
    InvalidValue { key: String, raw: String },

    /// Registration would make `name` ambiguous with an existing flag.
    #[error("name '{name}' is already taken by flag '{existing_key}'")]
    DuplicateName { name: String, existing_key: String },

    /// Registration supplied an empty long key or short alias. An empty
    /// name can never be matched on the command line.
    #[error("flag names cannot be empty (registering '{key}')")]
    EmptyName { key: String },
}
