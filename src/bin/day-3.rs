use std::str::FromStr;

use advent::PreconditionError;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    combinator::{map, map_res},
    sequence::{delimited, separated_pair},
    IResult,
};

fn main() -> anyhow::Result<()> {
    advent::init_tracing()?;
    let input = advent::read_input(3)?;
    let program = Program::scan(&input)?;
    tracing::debug!(muls = program.muls.len(), gates = program.gates.len());

    let part_1 = program.sum();
    tracing::info!(part_1);
    println!("{part_1}");

    let part_2 = program.gated_sum();
    tracing::info!(part_2);
    println!("{part_2}");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Do,
    Dont,
}

impl FromStr for Gate {
    type Err = PreconditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "do()" => Ok(Gate::Do),
            "don't()" => Ok(Gate::Dont),
            other => Err(PreconditionError::UnknownGate(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Mul(i64, i64),
    Gate(Gate),
}

/// A token and the byte offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Located<T> {
    offset: usize,
    value: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Program {
    muls: Vec<Located<(i64, i64)>>,
    gates: Vec<Located<Gate>>,
}

fn operand(input: &str) -> IResult<&str, i64> {
    map_res(take_while_m_n(1, 3, |c: char| c.is_ascii_digit()), str::parse::<i64>)(input)
}

fn mul(input: &str) -> IResult<&str, (i64, i64)> {
    delimited(
        tag("mul("),
        separated_pair(operand, tag(","), operand),
        tag(")"),
    )(input)
}

fn gate(input: &str) -> IResult<&str, &str> {
    alt((tag("do()"), tag("don't()")))(input)
}

enum Scanned<'a> {
    Mul(i64, i64),
    Gate(&'a str),
}

fn scanned(input: &str) -> IResult<&str, Scanned<'_>> {
    alt((
        map(mul, |(a, b)| Scanned::Mul(a, b)),
        map(gate, Scanned::Gate),
    ))(input)
}

/// Every recognised token in text order. Anything else is skipped one char at a time.
fn tokens(input: &str) -> Result<Vec<Located<Token>>, PreconditionError> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let offset = input.len() - rest.len();
        match scanned(rest) {
            Ok((next, token)) => {
                let value = match token {
                    Scanned::Mul(a, b) => Token::Mul(a, b),
                    Scanned::Gate(text) => Token::Gate(text.parse()?),
                };
                tracing::trace!(offset, ?value);
                tokens.push(Located { offset, value });
                rest = next;
            }
            Err(_) => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }
    Ok(tokens)
}

impl Program {
    fn scan(input: &str) -> Result<Self, PreconditionError> {
        Ok(tokens(input)?
            .into_iter()
            .fold(Program::default(), |mut program, Located { offset, value }| {
                match value {
                    Token::Mul(a, b) => program.muls.push(Located {
                        offset,
                        value: (a, b),
                    }),
                    Token::Gate(gate) => program.gates.push(Located {
                        offset,
                        value: gate,
                    }),
                }
                program
            }))
    }

    fn sum(&self) -> i64 {
        self.muls.iter().map(|Located { value: (a, b), .. }| a * b).sum()
    }

    /// Only gates that start before a mul decide whether it counts. Enabled until the first `don't()`.
    fn gated_sum(&self) -> i64 {
        let mut gates = self.gates.iter().peekable();
        let mut enabled = true;
        let mut sum = 0;
        for Located {
            offset,
            value: (a, b),
        } in &self.muls
        {
            while let Some(gate) = gates.next_if(|gate| gate.offset < *offset) {
                enabled = gate.value == Gate::Do;
            }
            if enabled {
                sum += a * b;
            }
        }
        sum
    }
}
