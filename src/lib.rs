//! flagset - declarative command-line flags with long and short names
//!
//! A program registers typed flags on a [`FlagSet`], parses an explicit
//! argument-token sequence into them, then reads the values back through
//! typed, parse-gated accessors. The set also renders a deterministic
//! usage summary from its registered flags.
//!
//! # Architecture
//!
//! - [`flag`] - A single flag: kind tag, typed value, default, help text
//! - [`set`] - The owning registry: registration, parsing, gated access
//! - [`usage`] - Deterministic usage-text rendering
//! - [`error`] - The crate-wide error enum
//!
//! The crate never touches the process environment: callers read
//! `std::env::args()` once at the outermost entry point and hand the
//! tokens to [`FlagSet::parse`] explicitly.
//!
//! # Example
//!
//! ```
//! use flagset::FlagSet;
//!
//! let mut flags = FlagSet::new(["util"]);
//! flags.set_description("Utility that does stuff");
//! flags.add_switch("help", "h", "Help")?;
//! flags.add_int("line", "l", "Start counting at `line_number`", 1)?;
//! flags.add_string("output", "o", "Output `directory`", "/var/log/output")?;
//!
//! flags.parse(["util", "--line=4", "report.txt"])?;
//!
//! assert_eq!(flags.get_int("line")?, 4);
//! assert_eq!(flags.get_string("output")?, "/var/log/output");
//! assert_eq!(flags.args(), ["report.txt"]);
//! # Ok::<(), flagset::FlagError>(())
//! ```

pub mod error;
pub mod flag;
pub mod set;
pub mod usage;

mod parse;

pub use error::FlagError;
pub use flag::{Flag, FlagKind, FlagValue};
pub use set::FlagSet;
