//! usage
//!
//! Deterministic usage-text rendering for a [`FlagSet`].
//!
//! # Layout
//!
//! ```text
//! Utility that does stuff
//! Usage:
//!   util|utility [-h|l line_number|o directory|s percentage|v bool]
//! Options:
//!   -h, --help
//!      Help
//!   -l, --line line_number
//!      Start counting at line_number (default=1)
//! ```
//!
//! Flags appear in ascending byte-wise order of their long keys, in both
//! the summary brackets and the option blocks, so two renders of an
//! unmodified set are byte-identical. The exact layout is pinned by
//! snapshot tests.

use std::fmt::Write;

use crate::flag::{Flag, FlagValue};
use crate::set::FlagSet;

/// Render the usage text for a set. Reads registry state only.
pub(crate) fn render(set: &FlagSet) -> String {
    let flags = set.sorted_flags();
    let mut out = String::new();

    if !set.description.is_empty() {
        out.push_str(&set.description);
        out.push('\n');
    }

    out.push_str("Usage:\n  ");
    out.push_str(&set.name);

    if !flags.is_empty() {
        let summary: Vec<String> = flags
            .iter()
            .map(|flag| match metavar(flag).0 {
                Some(name) => format!("{} {}", flag.short, name),
                None => flag.short.clone(),
            })
            .collect();
        let _ = write!(out, " [-{}]", summary.join("|"));

        out.push_str("\nOptions:");
        for flag in &flags {
            option_block(&mut out, flag);
        }
    }

    out
}

/// Append one option's block: the name line, then the indented help line
/// with an optional default suffix.
fn option_block(out: &mut String, flag: &Flag) {
    let (name, help) = metavar(flag);

    let _ = write!(out, "\n  -{}, --{}", flag.short, flag.key);
    if let Some(name) = name {
        let _ = write!(out, " {name}");
    }
    let _ = write!(out, "\n     {help}");

    match &flag.default {
        // A switch is false by definition; nothing worth printing.
        FlagValue::Switch(_) => {}
        FlagValue::Str(s) if s.is_empty() => {}
        other => {
            let _ = write!(out, " (default={other})");
        }
    }
}

/// Extract the metavariable and the display help text.
///
/// If the help text holds a back-quoted token, that token is the
/// metavariable and the back-quotes are stripped from the displayed text.
/// Otherwise the kind's fixed name is used. The stored help text is never
/// mutated; extraction runs fresh on every render.
fn metavar(flag: &Flag) -> (Option<String>, String) {
    let help = &flag.help;

    if let Some(open) = help.find('`') {
        if let Some(len) = help[open + 1..].find('`') {
            let name = &help[open + 1..open + 1 + len];
            let stripped = format!("{}{}{}", &help[..open], name, &help[open + 2 + len..]);
            return (Some(name.to_string()), stripped);
        }
        // A lone back-quote stays in the text; fall back to the kind name.
    }

    (
        flag.kind().metavar().map(str::to_string),
        help.clone(),
    )
}
