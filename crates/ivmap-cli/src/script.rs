//! Line-oriented scripts driving an [`IntervalMap`]
//!
//! Each line holds one command, with arguments separated by whitespace.
//! Everything after a `#` is ignored, as are blank lines.
//!
//! | Command                   | Effect                                      |
//! |---------------------------|---------------------------------------------|
//! | `assign BEGIN END VALUE`  | assign `VALUE` to the keys `BEGIN..END`     |
//! | `lookup KEY`              | print the value of `KEY`                    |
//! | `expect KEY VALUE`        | stop with an error unless `KEY` is `VALUE`  |
//! | `dump`                    | print every run of the map                  |

use std::num::ParseIntError;

use crate::prelude::*;

/// A single parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Assign { begin: i64, end: i64, value: String },
    Lookup { key: i64 },
    Expect { key: i64, value: String },
    Dump,
}

/// An error arising from a malformed script line
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command {0:?}")]
    UnknownCommand(String),
    #[error("Missing {0} argument")]
    MissingArgument(&'static str),
    #[error("Unexpected trailing argument {0:?}")]
    TrailingArgument(String),
    #[error("Invalid key {0:?}")]
    InvalidKey(String, #[source] ParseIntError),
}

/// An error arising while running a script
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Syntax error on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error(
        "Expectation failed on line {line}: key {key} maps to {actual:?}, expected {expected:?}"
    )]
    Expectation {
        line: usize,
        key: i64,
        expected: String,
        actual: String,
    },
    #[error("IO error")]
    Io(#[from] io::Error),
}

fn word<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    args.next().ok_or(ParseError::MissingArgument(name))
}

fn key<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<i64, ParseError> {
    let s = word(args, name)?;
    s.parse()
        .map_err(|e| ParseError::InvalidKey(s.to_owned(), e))
}

impl Command {
    /// Parse one line of a script, returning `None` if it holds no command
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.split_once('#').map_or(line, |(l, _)| l);
        let mut args = line.split_whitespace();

        let Some(name) = args.next() else {
            return Ok(None);
        };

        let cmd = match name {
            "assign" => Self::Assign {
                begin: key(&mut args, "begin")?,
                end: key(&mut args, "end")?,
                value: word(&mut args, "value")?.to_owned(),
            },
            "lookup" => Self::Lookup {
                key: key(&mut args, "key")?,
            },
            "expect" => Self::Expect {
                key: key(&mut args, "key")?,
                value: word(&mut args, "value")?.to_owned(),
            },
            "dump" => Self::Dump,
            s => return Err(ParseError::UnknownCommand(s.to_owned())),
        };

        if let Some(extra) = args.next() {
            return Err(ParseError::TrailingArgument(extra.to_owned()));
        }

        Ok(Some(cmd))
    }
}

/// Execute every command read from `input` against `map`, writing lookup
/// and dump output to `out`
pub fn run<R: BufRead, W: Write>(
    map: &mut IntervalMap<i64, String>,
    input: R,
    mut out: W,
) -> Result<(), ScriptError> {
    for (line, text) in (1..).zip(input.lines()) {
        let text = text?;
        let cmd = match Command::parse(&text) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(source) => return Err(ScriptError::Parse { line, source }),
        };

        trace!(line, ?cmd, "Executing command");

        match cmd {
            Command::Assign { begin, end, value } => {
                if begin >= end {
                    warn!(line, begin, end, "Ignoring assignment to an empty interval");
                }

                map.assign(begin, end, value);
            },
            Command::Lookup { key } => writeln!(out, "{}", map.lookup(&key))?,
            Command::Expect { key, value } => {
                let actual = map.lookup(&key);

                if *actual != value {
                    return Err(ScriptError::Expectation {
                        line,
                        key,
                        expected: value,
                        actual: actual.clone(),
                    });
                }
            },
            Command::Dump => writeln!(out, "{map:?}")?,
        }
    }

    out.flush()?;

    Ok(())
}
