//! parse
//!
//! The token scanner behind [`FlagSet::parse`](crate::FlagSet::parse).
//!
//! # Grammar
//!
//! - `--key=value`, `--key value`, `-short=value`, `-short value` assign
//!   valued flags; long keys and short aliases share one namespace, so
//!   either prefix matches either name
//! - `--key` / `-short` alone sets a switch or bool to true; bool-like
//!   flags also take `=value` but never consume a separate token
//! - `--` ends flag scanning; everything after is positional
//! - the first non-flag token (a bare `-` included) starts the positional
//!   run, and every later token stays positional even if `-`-prefixed
//!
//! A scan is transactional: values are snapshotted first, and any failure
//! restores them and leaves the parse gate and residual arguments as they
//! were.

use crate::error::FlagError;
use crate::flag::{FlagKind, FlagValue};
use crate::set::FlagSet;

/// Apply a token sequence to the set. `tokens[0]` is the program name.
pub(crate) fn apply(set: &mut FlagSet, tokens: &[String]) -> Result<(), FlagError> {
    let snapshot: Vec<(String, FlagValue)> = set
        .flags
        .iter()
        .map(|(key, flag)| (key.clone(), flag.value.clone()))
        .collect();

    match scan(set, tokens) {
        Ok(rest) => {
            set.args = rest;
            set.parsed = true;
            Ok(())
        }
        Err(err) => {
            for (key, value) in snapshot {
                if let Some(flag) = set.flags.get_mut(&key) {
                    flag.value = value;
                }
            }
            Err(err)
        }
    }
}

/// Scan tokens into flag assignments, returning the positional run.
fn scan(set: &mut FlagSet, tokens: &[String]) -> Result<Vec<String>, FlagError> {
    let mut i = 1; // skip the program name

    while i < tokens.len() {
        let token = &tokens[i];

        if token == "--" {
            i += 1;
            break;
        }
        let Some(body) = flag_body(token) else {
            break;
        };

        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let Some(flag) = set.find_name_mut(name) else {
            return Err(FlagError::UnrecognizedFlag {
                token: token.clone(),
            });
        };
        let key = flag.key.clone();
        let kind = flag.kind();

        match inline {
            Some(raw) => {
                flag.value = FlagValue::coerce(kind, &key, raw)?;
            }
            None if matches!(kind, FlagKind::Switch | FlagKind::Bool) => {
                // Bool-like flags never consume the next token, so
                // `prog --verbose build` stays unambiguous.
                flag.value = match kind {
                    FlagKind::Switch => FlagValue::Switch(true),
                    _ => FlagValue::Bool(true),
                };
            }
            None => {
                i += 1;
                let raw = tokens.get(i).ok_or_else(|| FlagError::InvalidValue {
                    key: key.clone(),
                    raw: String::new(),
                })?;
                flag.value = FlagValue::coerce(kind, &key, raw)?;
            }
        }

        i += 1;
    }

    // `i` can sit one past the end (empty input, or `--` as the last
    // token), so the slice must not index.
    Ok(tokens.get(i..).unwrap_or_default().to_vec())
}

/// The name portion of a flag-shaped token, or `None` for a positional.
///
/// A bare `-` is a positional by convention (often "read stdin").
fn flag_body(token: &str) -> Option<&str> {
    let body = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    if body.is_empty() {
        return None;
    }
    Some(body)
}
