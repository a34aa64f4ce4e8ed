//! flag
//!
//! A single typed, named command-line flag.
//!
//! # Types
//!
//! - [`FlagKind`] - Closed tag over the five supported kinds
//! - [`FlagValue`] - Sum type holding a natively typed value per kind
//! - [`Flag`] - One registered flag: identity, value, default, help text
//!
//! # Design
//!
//! Values live in a closed sum type rather than a type-erased slot, so a
//! value can never disagree with its kind tag. Kind mismatches are only
//! possible on the string-keyed lookup path, where they surface as
//! [`FlagError::TypeMismatch`](crate::FlagError::TypeMismatch).

use std::fmt;

use crate::error::FlagError;

/// The kind of a flag.
///
/// `Switch` is a no-value flag that is false unless its token appears at
/// all; `Bool` accepts an explicit true/false value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Switch,
    Bool,
    Int,
    Float,
    Str,
}

impl FlagKind {
    /// The metavariable shown in usage text when the help text does not
    /// name one. `Switch` has no value, hence no metavariable.
    pub(crate) fn metavar(self) -> Option<&'static str> {
        match self {
            FlagKind::Switch => None,
            FlagKind::Bool => Some("bool"),
            FlagKind::Int => Some("int"),
            FlagKind::Float => Some("float"),
            FlagKind::Str => Some("string"),
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            FlagKind::Switch => "switch",
            FlagKind::Bool => "bool",
            FlagKind::Int => "int",
            FlagKind::Float => "float",
            FlagKind::Str => "string",
        };
        f.write_str(word)
    }
}

/// A typed flag value.
///
/// Exactly one variant per [`FlagKind`]. `Switch` and `Bool` both carry a
/// `bool` but remain distinct variants so the registered kind survives in
/// the value itself.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Switch(bool),
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl FlagValue {
    /// The kind this value belongs to.
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Switch(_) => FlagKind::Switch,
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Int(_) => FlagKind::Int,
            FlagValue::Float(_) => FlagKind::Float,
            FlagValue::Str(_) => FlagKind::Str,
        }
    }

    /// Coerce a raw token into a value of the given kind.
    ///
    /// This is the single coercion routine shared by the parser and by
    /// [`FlagSet::simulate`](crate::FlagSet::simulate), so both fail
    /// identically on malformed input.
    ///
    /// # Errors
    ///
    /// Returns `FlagError::InvalidValue` carrying `key` and the raw token
    /// when the token cannot be coerced.
    pub(crate) fn coerce(kind: FlagKind, key: &str, raw: &str) -> Result<Self, FlagError> {
        let invalid = || FlagError::InvalidValue {
            key: key.to_string(),
            raw: raw.to_string(),
        };

        match kind {
            FlagKind::Switch => parse_bool(raw).map(FlagValue::Switch).ok_or_else(invalid),
            FlagKind::Bool => parse_bool(raw).map(FlagValue::Bool).ok_or_else(invalid),
            FlagKind::Int => raw
                .parse::<i64>()
                .map(FlagValue::Int)
                .map_err(|_| invalid()),
            FlagKind::Float => raw
                .parse::<f64>()
                .map(FlagValue::Float)
                .map_err(|_| invalid()),
            FlagKind::Str => Ok(FlagValue::Str(raw.to_string())),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Switch(b) | FlagValue::Bool(b) => write!(f, "{b}"),
            FlagValue::Int(i) => write!(f, "{i}"),
            FlagValue::Float(x) => write!(f, "{x}"),
            FlagValue::Str(s) => f.write_str(s),
        }
    }
}

/// Parse a boolean literal, case-insensitively.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}

/// One registered flag.
///
/// Identity (`key`, `short`), help text, and the default are fixed at
/// registration; only the parser and the test-injection path mutate
/// `value`, and the kind of `value` never changes.
#[derive(Debug, Clone)]
pub struct Flag {
    pub(crate) key: String,
    pub(crate) short: String,
    pub(crate) help: String,
    pub(crate) value: FlagValue,
    pub(crate) default: FlagValue,
}

impl Flag {
    pub(crate) fn new(key: String, short: String, help: String, default: FlagValue) -> Self {
        Self {
            key,
            short,
            help,
            value: default.clone(),
            default,
        }
    }

    /// The canonical long name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The short command-line alias.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// The flag's kind.
    pub fn kind(&self) -> FlagKind {
        self.default.kind()
    }

    /// The raw help text, back-quotes and all.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// The current value.
    pub fn value(&self) -> &FlagValue {
        &self.value
    }

    /// The registered default.
    pub fn default_value(&self) -> &FlagValue {
        &self.default
    }
}
