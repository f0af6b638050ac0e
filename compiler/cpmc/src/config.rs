//! Driver configuration.

use std::io::{self, Write};

use cpm_lexer::ScanOptions;
use cpm_segment::SegmentOptions;

/// What the driver prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Command {
    /// Group tokens into expressions and print the reportable ones.
    #[default]
    Segment,
    /// Print the raw token stream.
    Lex,
}

/// Everything a single driver run needs besides the input path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverConfig {
    pub command: Command,
    pub scan: ScanOptions,
    pub segment: SegmentOptions,
}

impl DriverConfig {
    /// Flags accepted by [`apply_flag`](Self::apply_flag), with their
    /// one-line descriptions.
    pub const FLAGS: [(&'static str, &'static str); 4] = [
        ("--nested-calls", "Close a call on its matching `)`"),
        (
            "--keep-lookahead",
            "Keep the token after a name instead of dropping it",
        ),
        ("--extended-symbols", "Scan `<` `<=` `>` `>=` `.` as symbols"),
        ("--block-comments", "Scan `/* ... */` as comments"),
    ];

    pub fn new(command: Command) -> Self {
        DriverConfig {
            command,
            ..DriverConfig::default()
        }
    }

    /// Write the `Flags:` help block, one aligned line per flag.
    pub fn write_flags(out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Flags:")?;
        for (flag, description) in Self::FLAGS {
            writeln!(out, "  {flag:<24} {description}")?;
        }
        Ok(())
    }

    /// Apply one command-line flag.
    ///
    /// Returns `false` if the flag is not recognised; the config is left
    /// untouched in that case.
    pub fn apply_flag(&mut self, flag: &str) -> bool {
        match flag {
            "--nested-calls" => self.segment.track_paren_depth = true,
            "--keep-lookahead" => self.segment.keep_lookahead = true,
            "--extended-symbols" => self.scan.extended_symbols = true,
            "--block-comments" => self.scan.block_comments = true,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests;
