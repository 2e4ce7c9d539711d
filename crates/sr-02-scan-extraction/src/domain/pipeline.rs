//! # Extraction Pipeline
//!
//! The report is read by a fixed, ordered list of passes. Every pass sees
//! the same raw text and none sees another's output, so the result is a pure
//! function of the input and the field order is the pass order.
//!
//! | # | Pass | Fields |
//! |---|------|--------|
//! | 1 | counts | `Warnings`, `Errors` (always) |
//! | 2 | identification | `Hostname`, `OS`, `OS Type`, `Version` |
//! | 3 | configuration | `Config File`, `Email Notifications`, `Database Dir` |
//! | 4 | timing | `Started At`, `Ended At`, `Duration` (all or none) |
//! | 5 | findings | `Rootkits`, `Changed Files`, `Suspicious SUID/SGID`, `Hidden Files/Dirs`, `UID 0 entries`, `Suspicious Network` |
//! | 6 | test configuration | `Enabled Tests`, `Disabled Tests` |
//!
//! The result is capped at [`MAX_EMBED_FIELDS`].

use super::timing::extract_scan_timestamps;
use regex::Regex;
use shared_types::{cap_fields, Field, MAX_EMBED_FIELDS};
use std::sync::LazyLock;

/// Lines kept per finding group.
pub const MAX_FINDING_LINES: usize = 5;

/// Tokens kept in the `Disabled Tests` summary.
pub const MAX_LISTED_TESTS: usize = 10;

pub const WARNINGS: &str = "Warnings";
pub const ERRORS: &str = "Errors";

// =============================================================================
// PASS DEFINITIONS
// =============================================================================

/// Rewrite applied to a single captured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Strip surrounding whitespace
    Trim,
    /// Keep the capture as is
    Verbatim,
    /// Trim, keep the first `n` whitespace-separated tokens joined by `", "`,
    /// and append `...` when tokens were dropped
    TokenList(usize),
}

impl Transform {
    pub fn apply(self, captured: &str) -> String {
        match self {
            Transform::Trim => captured.trim().to_string(),
            Transform::Verbatim => captured.to_string(),
            Transform::TokenList(max) => {
                let tokens: Vec<&str> = captured.split_whitespace().collect();
                let mut listed = tokens
                    .iter()
                    .take(max)
                    .copied()
                    .collect::<Vec<_>>()
                    .join(", ");
                if tokens.len() > max {
                    listed.push_str("...");
                }
                listed
            }
        }
    }
}

/// One condition a finding line must satisfy.
#[derive(Debug, Clone)]
pub enum LineCondition {
    /// Case-sensitive substring
    Contains(&'static str),
    /// Case-insensitive substring (needle given in lower case)
    ContainsIgnoreCase(&'static str),
    /// Regex match anywhere in the line
    Matches(Regex),
}

impl LineCondition {
    fn holds(&self, line: &str, lowered: &str) -> bool {
        match self {
            LineCondition::Contains(needle) => line.contains(needle),
            LineCondition::ContainsIgnoreCase(needle) => lowered.contains(needle),
            LineCondition::Matches(pattern) => pattern.is_match(line),
        }
    }
}

/// One extraction pass.
#[derive(Debug, Clone)]
pub enum Pass {
    /// Number of lines matching `pattern`
    Count { name: &'static str, pattern: Regex },
    /// First capture group of the first match of `pattern`
    Capture {
        name: &'static str,
        pattern: Regex,
        transform: Transform,
        inline: bool,
    },
    /// `Started At`, `Ended At`, `Duration`
    Timing,
    /// Lines satisfying every condition, first [`MAX_FINDING_LINES`] kept
    Lines {
        name: &'static str,
        all_of: Vec<LineCondition>,
    },
}

impl Pass {
    fn run(&self, text: &str, out: &mut Vec<Field>) {
        match self {
            Pass::Count { name, pattern } => {
                let count = text.split('\n').filter(|l| pattern.is_match(l)).count();
                out.push(Field::inline(*name, count.to_string()));
            }
            Pass::Capture {
                name,
                pattern,
                transform,
                inline,
            } => {
                if let Some(captured) = pattern.captures(text).and_then(|c| c.get(1)) {
                    out.push(Field::new(*name, transform.apply(captured.as_str()), *inline));
                }
            }
            Pass::Timing => {
                let timing = extract_scan_timestamps(text);
                if let (Some(start), Some(end), Some(duration)) =
                    (timing.start, timing.end, timing.duration)
                {
                    out.push(Field::block("Started At", start));
                    out.push(Field::block("Ended At", end));
                    out.push(Field::inline("Duration", duration));
                }
            }
            Pass::Lines { name, all_of } => {
                let matched: Vec<&str> = text
                    .split('\n')
                    .filter(|line| {
                        let lowered = line.to_lowercase();
                        all_of.iter().all(|c| c.holds(line, &lowered))
                    })
                    .take(MAX_FINDING_LINES)
                    .collect();
                if !matched.is_empty() {
                    // Field::new truncates the joined value to 1024 chars
                    out.push(Field::block(*name, matched.join("\n")));
                }
            }
        }
    }
}

// =============================================================================
// THE PIPELINE
// =============================================================================

/// Compile a built-in pattern in CRLF mode, so `.` stops at `\r` as well as
/// `\n` and a blank `\r\n` line never yields an empty capture.
fn re(pattern: &str) -> Regex {
    Regex::new(&format!("(?R){pattern}")).expect("built-in extraction pattern is valid")
}

fn capture(name: &'static str, pattern: &str, transform: Transform, inline: bool) -> Pass {
    Pass::Capture {
        name,
        pattern: re(pattern),
        transform,
        inline,
    }
}

/// Ordered passes for rkhunter reports.
pub static PIPELINE: LazyLock<Vec<Pass>> = LazyLock::new(|| {
    use LineCondition::{Contains, ContainsIgnoreCase, Matches};
    use Transform::{TokenList, Trim, Verbatim};

    vec![
        // 1. Counts
        Pass::Count {
            name: WARNINGS,
            pattern: re(r"(?i)warning"),
        },
        Pass::Count {
            name: ERRORS,
            pattern: re(r"(?i)\[\s*error\s*\]"),
        },
        // 2. Identification
        capture("Hostname", r"(?i)Rootkit Hunter.*on\s+(.+)", Trim, true),
        capture("OS", r"Found O/S name: (.+)", Trim, true),
        capture("OS Type", r"Detected operating system is\s+'(.+)'", Trim, true),
        capture("Version", r"(?i)Rootkit Hunter version\s+([0-9.]+)", Verbatim, true),
        // 3. Configuration
        capture("Config File", r"Using configuration file\s+'(.+)'", Trim, false),
        capture(
            "Email Notifications",
            r"Emailing warnings to\s+'(.+)'\s+using",
            Trim,
            false,
        ),
        capture(
            "Database Dir",
            r"Using\s+'(.+)'\s+as the database directory",
            Trim,
            false,
        ),
        // 4. Timing
        Pass::Timing,
        // 5. Findings
        Pass::Lines {
            name: "Rootkits",
            all_of: vec![ContainsIgnoreCase("rootkit"), ContainsIgnoreCase("possible")],
        },
        Pass::Lines {
            name: "Changed Files",
            all_of: vec![Contains("File:"), ContainsIgnoreCase("changed")],
        },
        Pass::Lines {
            name: "Suspicious SUID/SGID",
            all_of: vec![Contains("[ Warning ]"), Matches(re(r"(?i)suid|sgid"))],
        },
        Pass::Lines {
            name: "Hidden Files/Dirs",
            all_of: vec![
                Contains("[ Warning ]"),
                Matches(re(r"(?i)hidden file|hidden directory")),
            ],
        },
        Pass::Lines {
            name: "UID 0 entries",
            all_of: vec![Contains("UID 0")],
        },
        Pass::Lines {
            name: "Suspicious Network",
            all_of: vec![
                Matches(re(r"\[ (?:Warning|Error) \]")),
                Matches(re(r"(?i)port|connect|listen|network")),
            ],
        },
        // 6. Test configuration
        capture("Enabled Tests", r"Enabled tests are:\s+(.+)", Trim, false),
        capture(
            "Disabled Tests",
            r"Disabled tests are:\s+(.+)",
            TokenList(MAX_LISTED_TESTS),
            false,
        ),
    ]
});

/// Run every pass over `text` and cap the result.
pub fn extract_fields(text: &str) -> Vec<Field> {
    let mut fields = Vec::with_capacity(MAX_EMBED_FIELDS);
    for pass in PIPELINE.iter() {
        pass.run(text, &mut fields);
    }
    cap_fields(&mut fields);
    fields
}

/// Value of the first field called `name`, parsed as a count.
pub fn count_of(fields: &[Field], name: &str) -> usize {
    fields
        .iter()
        .find(|f| f.name() == name)
        .and_then(|f| f.value().trim().parse().ok())
        .unwrap_or(0)
}
