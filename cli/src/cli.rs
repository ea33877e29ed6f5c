use std::io::{self, Write};

use clap::Parser;
use thiserror::Error;
use tracing::debug;

use opt_core::EmptyValueAccess;
use opt_core::Option as Opt;

/// Wrap command-line values as present or absent options and print what each operation returns.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
  /// Values to wrap; values equal to the null marker become absent.
  #[arg()]
  pub values: Vec<String>,
  /// Fallback value used for absent values.
  #[arg(long, env = "OPT_DEFAULT", default_value = "")]
  pub default: String,
  /// Literal that is treated as a missing value.
  #[arg(long, env = "OPT_NULL_MARKER", default_value = "null")]
  pub null_marker: String,
  /// Fail on the first absent value instead of falling back to the default.
  #[arg(long, env = "OPT_STRICT")]
  pub strict: bool,
}

impl Cli {
  pub fn wrap(&self, value: &str) -> Opt<String> {
    let nullable = (value != self.null_marker).then(|| value.to_owned());
    Opt::from_nullable(nullable)
  }

  pub fn describe(&self, option: &Opt<String>) -> String {
    let value = option.as_ref().get_or_else(&self.default);
    format!("{} is_defined={} get_or_else={} items={}", option, option.is_defined(), value, option.iter().count())
  }
}


#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub struct Summary {
  pub present: usize,
  pub absent: usize,
}

#[derive(Debug, Error)]
pub enum RunError {
  #[error("value {index} is absent")]
  Absent { index: usize, source: EmptyValueAccess },
  #[error("failed to write output: {0}")]
  Write(#[from] io::Error),
}

/// Wraps every value of `cli`, writing a description line per value to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Summary, RunError> {
  let mut summary = Summary::default();
  for (index, value) in cli.values.iter().enumerate() {
    let option = cli.wrap(value);
    debug!(index, %value, is_defined = option.is_defined(), "wrapped value");
    if cli.strict {
      option.get_ref().map_err(|source| RunError::Absent { index, source })?;
    }
    writeln!(out, "{}", cli.describe(&option))?;
    if option.is_defined() {
      summary.present += 1;
    } else {
      summary.absent += 1;
    }
  }
  Ok(summary)
}


#[cfg(test)]
mod tests {
  use std::error::Error as _;

  use clap::CommandFactory;

  use super::*;

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("opt-cli").chain(args.iter().copied())).unwrap()
  }

  fn run_to_string(cli: &Cli) -> (Result<Summary, RunError>, String) {
    let mut out = Vec::new();
    let result = run(cli, &mut out);
    (result, String::from_utf8(out).unwrap())
  }

  #[test]
  fn command_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn null_marker_wraps_as_absent() {
    let cli = parse(&["--null-marker", "nil"]);
    assert_eq!(cli.wrap("nil"), Opt::absent());
    assert_eq!(cli.wrap("null"), Opt::present(String::from("null")));
  }

  #[test]
  fn describes_present_and_absent_values() {
    let cli = parse(&["--default", "fallback", "42", "null"]);
    let (result, output) = run_to_string(&cli);
    assert_eq!(result.unwrap(), Summary { present: 1, absent: 1 });
    assert_eq!(output, "Present{42} is_defined=true get_or_else=42 items=1\n\
                        Absent is_defined=false get_or_else=fallback items=0\n");
  }

  #[test]
  fn strict_fails_on_first_absent_value() {
    let cli = parse(&["--strict", "a", "null", "b"]);
    let (result, output) = run_to_string(&cli);
    match result {
      Err(RunError::Absent { index, source }) => {
        assert_eq!(index, 1);
        assert_eq!(source, EmptyValueAccess);
      }
      other => panic!("expected absent error, got {:?}", other),
    }
    assert_eq!(output, "Present{a} is_defined=true get_or_else=a items=1\n");
  }

  #[test]
  fn absent_error_reports_access_failure_as_source() {
    let error = RunError::Absent { index: 2, source: EmptyValueAccess };
    assert_eq!(error.to_string(), "value 2 is absent");
    let source = error.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("attempted to get the value of an absent option"));
  }

  #[test]
  fn no_values_is_empty_summary() {
    let cli = parse(&[]);
    let (result, output) = run_to_string(&cli);
    assert_eq!(result.unwrap(), Summary::default());
    assert!(output.is_empty());
  }
}
