use crate::common::*;
use std::num::IntErrorKind;

/// States of the selection input validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputState {
    /// Waiting for the annotator to type a line.
    AwaitingInput,
    /// Deduplicated caption positions in ascending order. Empty if the
    /// annotator submitted a blank line.
    ParsedOk(Vec<usize>),
    /// Tokens that are not integers.
    ParseError { tokens: Vec<String> },
    /// Integers outside of `0..bound`, as typed.
    RangeError { values: Vec<String>, bound: usize },
}

impl InputState {
    /// Consumes one input line and returns the next state.
    ///
    /// Only `AwaitingInput` and the two error states accept input. Lines
    /// fed to a `ParsedOk` state are ignored.
    pub fn feed(self, line: &str, bound: usize) -> Self {
        match self {
            Self::ParsedOk(_) => self,
            Self::AwaitingInput | Self::ParseError { .. } | Self::RangeError { .. } => {
                parse_selection(line, bound)
            }
        }
    }
}

impl fmt::Display for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingInput => write!(f, "awaiting input"),
            Self::ParsedOk(positions) => write!(f, "captions {:?} selected", positions),
            Self::ParseError { tokens } => write!(f, "Inputs {:?} not numbers", tokens),
            Self::RangeError { values, bound } => {
                write!(f, "Inputs [{}] not in range(0, {})", values.join(", "), bound)
            }
        }
    }
}

/// Parses a line of whitespace separated caption positions.
///
/// Positions must lie in `0..bound`. A blank line selects nothing.
pub fn parse_selection(line: &str, bound: usize) -> InputState {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.is_empty() {
        return InputState::ParsedOk(vec![]);
    }

    let mut values: Vec<i64> = vec![];
    let mut overflowed: Vec<String> = vec![];
    let mut failed: Vec<String> = vec![];

    for token in tokens {
        match token.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    overflowed.push(token.to_string())
                }
                _ => failed.push(token.to_string()),
            },
        }
    }

    if !failed.is_empty() {
        return InputState::ParseError { tokens: failed };
    }

    let values: Vec<i64> = values.into_iter().sorted().dedup().collect();
    let out_of_range: Vec<String> = values
        .iter()
        .filter(|&&value| value < 0 || value as u64 >= bound as u64)
        .map(|value| value.to_string())
        .chain(overflowed.into_iter().unique())
        .collect();

    if !out_of_range.is_empty() {
        return InputState::RangeError {
            values: out_of_range,
            bound,
        };
    }

    InputState::ParsedOk(values.into_iter().map(|value| value as usize).collect())
}
