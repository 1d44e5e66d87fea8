use std::{fmt::Debug, path::PathBuf};

use anyhow::Context;
use nom::{character, combinator::all_consuming, IResult};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod error;
pub mod grid;

pub use error::{ParseError, PreconditionError};
pub use grid::Grid;

pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::from_default_env().add_directive("info".parse()?);
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .with(env_filter)
        .init();
    Ok(())
}

pub fn input_path(day: u8) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("inputs")
        .join(format!("day-{day}.txt"))
}

pub fn read_input(day: u8) -> anyhow::Result<String> {
    let path = input_path(day);
    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("Could not read input {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = input.len(), "read input");
    Ok(input)
}

fn number(input: &str) -> IResult<&str, i64> {
    all_consuming(character::complete::i64)(input)
}

/// Whitespace-separated integers of one input line. `line` is 1-based and only used for errors.
pub fn parse_numbers(line: usize, text: &str) -> Result<Vec<i64>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            number(token)
                .map(|(_, n)| n)
                .map_err(|_| ParseError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Pairs up two sequences, stopping at the end of the shorter one.
pub fn zip<A, B>(a: A, b: B) -> impl Iterator<Item = (A::Item, B::Item)>
where
    A: IntoIterator,
    B: IntoIterator,
{
    a.into_iter().zip(b)
}

/// A worked example with its expected answer.
pub struct Example<T> {
    pub name: &'static str,
    pub solver: fn(&str) -> anyhow::Result<T>,
    pub input: &'static str,
    pub want: T,
}

/// Runs every example, failing with the example's name on the first mismatch.
pub fn run_examples<T: PartialEq + Debug>(examples: &[Example<T>]) {
    for example in examples {
        let got = (example.solver)(example.input)
            .unwrap_or_else(|e| panic!("{}: solver failed: {e:#}", example.name));
        assert_eq!(got, example.want, "{}", example.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_fields() {
        assert_eq!(parse_numbers(1, "3   -4  12"), Ok(vec![3, -4, 12]));
        assert_eq!(parse_numbers(1, "   "), Ok(vec![]));
    }

    #[test]
    fn rejects_malformed_token() {
        assert_eq!(
            parse_numbers(7, "3 4x"),
            Err(ParseError::InvalidNumber {
                line: 7,
                token: "4x".to_string()
            })
        );
    }

    #[test]
    fn zip_stops_at_shorter() {
        let pairs: Vec<_> = zip(vec![1, 2, 3], ["a", "b"]).collect();
        assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn input_path_follows_day_convention() {
        assert!(input_path(4).ends_with("inputs/day-4.txt"));
    }

    fn count_lines(input: &str) -> anyhow::Result<usize> {
        Ok(input.lines().count())
    }

    #[test]
    fn runs_examples() {
        run_examples(&[
            Example {
                name: "two lines",
                solver: count_lines,
                input: "a\nb",
                want: 2,
            },
            Example {
                name: "empty",
                solver: count_lines,
                input: "",
                want: 0,
            },
        ]);
    }

    #[test]
    #[should_panic(expected = "wrong")]
    fn reports_failing_example_by_name() {
        run_examples(&[Example {
            name: "wrong",
            solver: count_lines,
            input: "a",
            want: 2,
        }]);
    }
}
