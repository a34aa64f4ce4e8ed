//! set
//!
//! The owning flag registry.
//!
//! # Responsibilities
//!
//! - Register typed flags under a long key and a short alias
//! - Parse an explicit token sequence into the registered flags
//! - Gate typed value reads behind a successful parse
//! - Expose residual positional arguments and usage text
//!
//! # Concurrency
//!
//! A `FlagSet` is plain in-memory state with no interior mutability.
//! Callers sharing one across threads must serialize access themselves.

use std::collections::HashMap;

use crate::error::FlagError;
use crate::flag::{Flag, FlagKind, FlagValue};
use crate::{parse, usage};

/// A set of registered flags for one program.
///
/// Lifecycle: construct with a display name, register flags, call
/// [`parse`](Self::parse), then read values through the typed getters.
/// Getters fail with [`FlagError::NotParsed`] until a parse succeeds;
/// [`usage`](Self::usage) is not gated.
///
/// # Example
///
/// ```
/// use flagset::FlagSet;
///
/// let mut flags = FlagSet::new(["util"]);
/// flags.add_bool("verbose", "v", "Print extra debugging information", false)?;
/// flags.parse(["util", "--verbose"])?;
/// assert!(flags.get_bool("verbose")?);
/// # Ok::<(), flagset::FlagError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) flags: HashMap<String, Flag>,
    pub(crate) parsed: bool,
    pub(crate) args: Vec<String>,
}

impl FlagSet {
    /// Create an empty set.
    ///
    /// Several alias tokens may be given; the display name joins them
    /// with `|`, so `["package", "pack", "pkg"]` displays as
    /// `package|pack|pkg`.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = names
            .into_iter()
            .map(|n| n.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("|");

        Self {
            name,
            ..Self::default()
        }
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the optional one-line description shown above usage.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The description, empty if never set.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Register a switch: false unless its token appears at all.
    pub fn add_switch(
        &mut self,
        key: impl Into<String>,
        short: impl Into<String>,
        help: impl Into<String>,
    ) -> Result<(), FlagError> {
        self.add(key.into(), short.into(), help.into(), FlagValue::Switch(false))
    }

    /// Register a boolean flag that accepts an explicit true/false value.
    pub fn add_bool(
        &mut self,
        key: impl Into<String>,
        short: impl Into<String>,
        help: impl Into<String>,
        default: bool,
    ) -> Result<(), FlagError> {
        self.add(key.into(), short.into(), help.into(), FlagValue::Bool(default))
    }

    /// Register a signed 64-bit integer flag.
    pub fn add_int(
        &mut self,
        key: impl Into<String>,
        short: impl Into<String>,
        help: impl Into<String>,
        default: i64,
    ) -> Result<(), FlagError> {
        self.add(key.into(), short.into(), help.into(), FlagValue::Int(default))
    }

    /// Register a double-precision float flag.
    pub fn add_float(
        &mut self,
        key: impl Into<String>,
        short: impl Into<String>,
        help: impl Into<String>,
        default: f64,
    ) -> Result<(), FlagError> {
        self.add(key.into(), short.into(), help.into(), FlagValue::Float(default))
    }

    /// Register a string flag.
    pub fn add_string(
        &mut self,
        key: impl Into<String>,
        short: impl Into<String>,
        help: impl Into<String>,
        default: impl Into<String>,
    ) -> Result<(), FlagError> {
        self.add(
            key.into(),
            short.into(),
            help.into(),
            FlagValue::Str(default.into()),
        )
    }

    /// Register or replace a flag.
    ///
    /// Both names must be non-empty; the command line has no way to spell
    /// an empty one. Re-registering the same `key` replaces the existing
    /// flag. Any other overlap between the new names and existing names is
    /// rejected: a duplicate short alias, or a short alias colliding with
    /// another flag's long key (in either direction), would make
    /// command-line lookup ambiguous.
    fn add(
        &mut self,
        key: String,
        short: String,
        help: String,
        default: FlagValue,
    ) -> Result<(), FlagError> {
        if key.is_empty() || short.is_empty() {
            return Err(FlagError::EmptyName { key });
        }

        for (existing_key, existing) in &self.flags {
            if *existing_key == key {
                // Same long key: replacement, checked against nobody else.
                continue;
            }
            for name in [&key, &short] {
                if *name == *existing_key || *name == existing.short {
                    return Err(FlagError::DuplicateName {
                        name: name.clone(),
                        existing_key: existing_key.clone(),
                    });
                }
            }
        }

        let flag = Flag::new(key.clone(), short, help, default);
        self.flags.insert(key, flag);
        Ok(())
    }

    /// Parse a token sequence into the registered flags.
    ///
    /// The first token is the program name and is skipped, mirroring argv
    /// conventions. On success the residual positional tokens are stored,
    /// the parse gate opens, and subsequent getters return the parsed
    /// values. On failure every flag value is restored to its pre-call
    /// state and the gate and residual arguments are left untouched.
    ///
    /// # Errors
    ///
    /// - `FlagError::UnrecognizedFlag` for a flag-shaped token with no
    ///   matching registration
    /// - `FlagError::InvalidValue` for a malformed or missing value token
    pub fn parse<I, S>(&mut self, tokens: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        parse::apply(self, &tokens)
    }

    /// The positional arguments left over by the last successful parse.
    ///
    /// Empty before the first successful parse.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Read a switch.
    pub fn get_switch(&self, key: &str) -> Result<bool, FlagError> {
        match self.lookup(key)?.value {
            FlagValue::Switch(v) => Ok(v),
            ref other => Err(mismatch(key, FlagKind::Switch, other)),
        }
    }

    /// Read a boolean flag.
    pub fn get_bool(&self, key: &str) -> Result<bool, FlagError> {
        match self.lookup(key)?.value {
            FlagValue::Bool(v) => Ok(v),
            ref other => Err(mismatch(key, FlagKind::Bool, other)),
        }
    }

    /// Read an integer flag.
    pub fn get_int(&self, key: &str) -> Result<i64, FlagError> {
        match self.lookup(key)?.value {
            FlagValue::Int(v) => Ok(v),
            ref other => Err(mismatch(key, FlagKind::Int, other)),
        }
    }

    /// Read a float flag.
    pub fn get_float(&self, key: &str) -> Result<f64, FlagError> {
        match self.lookup(key)?.value {
            FlagValue::Float(v) => Ok(v),
            ref other => Err(mismatch(key, FlagKind::Float, other)),
        }
    }

    /// Read a string flag.
    pub fn get_string(&self, key: &str) -> Result<String, FlagError> {
        match self.lookup(key)?.value {
            FlagValue::Str(ref v) => Ok(v.clone()),
            ref other => Err(mismatch(key, FlagKind::Str, other)),
        }
    }

    /// Force one flag's value without a full parse, for tests of logic
    /// that consumes flag values.
    ///
    /// Routes through the same coercion as [`parse`](Self::parse) and
    /// fails the same way on malformed input. Does not open the parse
    /// gate; pair it with a minimal `parse(["prog"])` call.
    ///
    /// # Errors
    ///
    /// - `FlagError::UnknownFlag` if `key` is not registered
    /// - `FlagError::InvalidValue` if `raw` cannot be coerced
    pub fn simulate(&mut self, key: &str, raw: &str) -> Result<(), FlagError> {
        let flag = self.flags.get_mut(key).ok_or_else(|| FlagError::UnknownFlag {
            key: key.to_string(),
        })?;
        flag.value = FlagValue::coerce(flag.kind(), key, raw)?;
        Ok(())
    }

    /// Render usage text for the registered flags.
    ///
    /// Deterministic: flags appear in ascending byte-wise order of their
    /// long keys, and two renders of an unmodified set are byte-identical.
    /// Not gated on parsing.
    pub fn usage(&self) -> String {
        usage::render(self)
    }

    /// Gate check plus key lookup; kind narrowing happens at the call
    /// sites, where the native type is known.
    fn lookup(&self, key: &str) -> Result<&Flag, FlagError> {
        if !self.parsed {
            return Err(FlagError::NotParsed {
                set: self.name.clone(),
            });
        }
        self.flags.get(key).ok_or_else(|| FlagError::UnknownFlag {
            key: key.to_string(),
        })
    }

    /// Find a flag by long key or, failing that, by short alias.
    ///
    /// Registration rejects overlapping names, so the two namespaces
    /// cannot disagree about a match.
    pub(crate) fn find_name_mut(&mut self, name: &str) -> Option<&mut Flag> {
        if self.flags.contains_key(name) {
            return self.flags.get_mut(name);
        }
        self.flags.values_mut().find(|f| f.short == name)
    }

    /// The flags in ascending byte-wise order of their long keys.
    pub(crate) fn sorted_flags(&self) -> Vec<&Flag> {
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.key.cmp(&b.key));
        flags
    }
}

fn mismatch(key: &str, expected: FlagKind, actual: &FlagValue) -> FlagError {
    FlagError::TypeMismatch {
        key: key.to_string(),
        expected,
        actual: actual.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_set() -> FlagSet {
        let mut flags = FlagSet::new(["util"]);
        flags
            .add_string("output", "o", "Output `directory`", "/var/log/output")
            .unwrap();
        flags.add_int("line", "l", "Line Number", 1).unwrap();
        flags.parse(["util"]).unwrap();
        flags
    }

    #[test]
    fn name_joins_aliases_with_pipe() {
        assert_eq!(FlagSet::new(["package", "pack", "pkg"]).name(), "package|pack|pkg");
        assert_eq!(FlagSet::new(["util"]).name(), "util");
        assert_eq!(FlagSet::new(Vec::<String>::new()).name(), "");
    }

    #[test]
    fn getters_fail_before_parse() {
        let mut flags = FlagSet::new(["util"]);
        flags.add_int("line", "l", "Line Number", 1).unwrap();
        assert_eq!(
            flags.get_int("line").unwrap_err(),
            FlagError::NotParsed {
                set: "util".to_string()
            }
        );
    }

    #[test]
    fn getters_return_defaults_after_bare_parse() {
        let flags = parsed_set();
        assert_eq!(flags.get_string("output").unwrap(), "/var/log/output");
        assert_eq!(flags.get_int("line").unwrap(), 1);
    }

    #[test]
    fn unknown_key_after_parse() {
        let flags = parsed_set();
        assert_eq!(
            flags.get_int("missing").unwrap_err(),
            FlagError::UnknownFlag {
                key: "missing".to_string()
            }
        );
    }

    #[test]
    fn kind_mismatch_is_an_error_not_a_panic() {
        let flags = parsed_set();
        assert_eq!(
            flags.get_float("line").unwrap_err(),
            FlagError::TypeMismatch {
                key: "line".to_string(),
                expected: FlagKind::Float,
                actual: FlagKind::Int,
            }
        );
    }

    #[test]
    fn same_key_registration_replaces() {
        let mut flags = FlagSet::new(["util"]);
        flags.add_int("line", "l", "Line Number", 1).unwrap();
        flags.add_int("line", "l", "Line Number", 7).unwrap();
        flags.parse(["util"]).unwrap();
        assert_eq!(flags.get_int("line").unwrap(), 7);
    }

    #[test]
    fn duplicate_short_alias_is_rejected() {
        let mut flags = FlagSet::new(["util"]);
        flags.add_int("line", "l", "Line Number", 1).unwrap();
        let err = flags.add_string("log", "l", "Log file", "").unwrap_err();
        assert_eq!(
            err,
            FlagError::DuplicateName {
                name: "l".to_string(),
                existing_key: "line".to_string(),
            }
        );
    }

    #[test]
    fn short_alias_colliding_with_long_key_is_rejected() {
        let mut flags = FlagSet::new(["util"]);
        flags.add_switch("v", "V", "Verbose").unwrap();
        let err = flags.add_bool("verbose", "v", "Verbose", false).unwrap_err();
        assert_eq!(
            err,
            FlagError::DuplicateName {
                name: "v".to_string(),
                existing_key: "v".to_string(),
            }
        );
    }

    #[test]
    fn empty_names_are_rejected() {
        let mut flags = FlagSet::new(["util"]);
        assert_eq!(
            flags.add_int("line", "", "Line Number", 1).unwrap_err(),
            FlagError::EmptyName {
                key: "line".to_string(),
            }
        );
        assert_eq!(
            flags.add_switch("", "h", "Help").unwrap_err(),
            FlagError::EmptyName {
                key: String::new(),
            }
        );
        // Nothing was registered, so usage has no dangling entry.
        assert_eq!(flags.usage(), "Usage:\n  util");
    }

    #[test]
    fn simulate_assigns_through_coercion() {
        let mut flags = FlagSet::new(["util"]);
        flags.add_float("skew", "s", "Percentage to skew", 2.24).unwrap();
        flags.simulate("skew", "3.55").unwrap();
        flags.parse(["util"]).unwrap();
        assert_eq!(flags.get_float("skew").unwrap(), 3.55);
    }

    #[test]
    fn simulate_rejects_malformed_input_like_parse() {
        let mut flags = FlagSet::new(["util"]);
        flags.add_float("skew", "s", "Percentage to skew", 2.24).unwrap();
        assert_eq!(
            flags.simulate("skew", "notanumber").unwrap_err(),
            FlagError::InvalidValue {
                key: "skew".to_string(),
                raw: "notanumber".to_string(),
            }
        );
        assert_eq!(
            flags.simulate("missing", "1").unwrap_err(),
            FlagError::UnknownFlag {
                key: "missing".to_string(),
            }
        );
    }

    #[test]
    fn args_empty_before_parse() {
        let flags = FlagSet::new(["util"]);
        assert!(flags.args().is_empty());
    }

    #[test]
    fn sorted_flags_orders_by_key_bytes() {
        let mut flags = FlagSet::new(["util"]);
        flags.add_switch("zeta", "z", "").unwrap();
        flags.add_switch("alpha", "a", "").unwrap();
        flags.add_switch("Beta", "B", "").unwrap();
        let keys: Vec<&str> = flags.sorted_flags().iter().map(|f| f.key()).collect();
        // Byte-wise order puts uppercase first.
        assert_eq!(keys, ["Beta", "alpha", "zeta"]);
    }
}
