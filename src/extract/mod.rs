/*!
Extraction of factors from a solution to a formula written by [write_dimacs](crate::context::Context::write_dimacs).

Extraction requires two things:
- The half size of the formula, read from the `c half size = ` comment of the formula.
- A solution, as a list of literals, of which the first 2 × *half size* literals give the values of the factor atoms, in order.
  Any tokens after these are ignored.

A solution is read from the first of the following which is found:
1. A line containing `solution =`, followed by literals.
2. If the solution is exactly one line, a line of literals (and nothing else).
3. Lines beginning `v `, as written by solvers following the SAT competition format, whose literals are read in order up to a terminating `0`.

If no solution is found, the formula is taken to be unsatisfiable, and so the number to be factored prime.

```rust
# use ifactor::extract::{extract, Extraction};
let wff = b"c half size = 3\np cnf 1 1\n1 0\n";

let solution = b"solution = 1 1 -3 1 -5 -6 7\n";
let extraction = extract(&wff[..], &solution[..]).unwrap();
assert_eq!(
    extraction.to_string(),
    "First Factor:  011\nSecond Factor: 001"
);

let no_solution = b"s UNSATISFIABLE\n";
assert_eq!(extract(&wff[..], &no_solution[..]), Ok(Extraction::Prime));
```
*/

use std::io::BufRead;

use crate::{
    builder::dimacs::HALF_SIZE_KEY,
    misc::log::targets::{self},
    structures::literal::{IntLiteral, Literal},
    types::err::{self},
};

/// The tag preceding the literals of a solution.
pub const SOLUTION_TAG: &str = "solution =";

/// The prefix of a line of literals in the SAT competition format.
pub const VALUE_PREFIX: &str = "v ";

/// Two factors, each as a sequence of bits, most significant bit first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factors {
    pub first: Vec<bool>,
    pub second: Vec<bool>,
}

/// The result of an extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Extraction {
    /// Factors were found in a solution.
    Factors(Factors),

    /// No solution was found, and so the number is prime.
    Prime,
}

/// A binary string of bits, most significant bit first.
pub fn binary_string(bits: &[bool]) -> String {
    bits.iter()
        .map(|bit| match bit {
            true => '1',
            false => '0',
        })
        .collect()
}

/// The value of bits, most significant bit first, if the value fits in a u128.
pub fn binary_value(bits: &[bool]) -> Option<u128> {
    bits.iter().try_fold(0_u128, |value, bit| {
        value
            .checked_mul(2)
            .map(|value| value + u128::from(*bit))
    })
}

impl Factors {
    /// The factors given by the first 2 × `half_size` literals of a solution.
    ///
    /// The first `half_size` literals are the bits of the first factor, and the next `half_size` literals the bits of the second factor, each least significant bit first.
    /// The polarity of a literal is the value of the bit.
    pub fn from_solution(literals: &[IntLiteral], half_size: usize) -> Result<Self, err::ExtractError> {
        let required = factor_width(half_size)?;
        if literals.len() < required {
            return Err(err::ExtractError::ShortSolution {
                required,
                found: literals.len(),
            });
        }

        let bits = |slice: &[IntLiteral]| {
            slice
                .iter()
                .rev()
                .map(|literal| literal.polarity())
                .collect::<Vec<_>>()
        };

        Ok(Factors {
            first: bits(&literals[..half_size]),
            second: bits(&literals[half_size..required]),
        })
    }

    /// The values of the factors, if each fits in a u128.
    pub fn values(&self) -> Option<(u128, u128)> {
        Some((binary_value(&self.first)?, binary_value(&self.second)?))
    }
}

impl std::fmt::Display for Extraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Factors(factors) => write!(
                f,
                "First Factor:  {}\nSecond Factor: {}",
                binary_string(&factors.first),
                binary_string(&factors.second)
            ),
            Self::Prime => write!(f, "No Solution Found: Number is PRIME"),
        }
    }
}

/// The count of literals given to the factors of a formula with the given half size.
fn factor_width(half_size: usize) -> Result<usize, err::ExtractError> {
    half_size
        .checked_mul(2)
        .ok_or(err::ExtractError::HalfSize(half_size.to_string()))
}

/// Reads the lines of some input.
fn read_lines(reader: impl BufRead) -> Result<Vec<String>, err::ExtractError> {
    reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map_err(|_| err::ExtractError::Line(index + 1)))
        .collect()
}

/// Reads at most `limit` whitespace separated literals, ignoring any further tokens.
fn read_literals<'a>(
    tokens: impl Iterator<Item = &'a str>,
    limit: usize,
) -> Result<Vec<IntLiteral>, err::ExtractError> {
    tokens
        .take(limit)
        .map(|token| {
            token
                .parse::<IntLiteral>()
                .map_err(|_| err::ExtractError::Literal(token.to_string()))
        })
        .collect()
}

/// Reads the half size of a formula from the first line containing the half size comment.
pub fn read_half_size(reader: impl BufRead) -> Result<usize, err::ExtractError> {
    for line in read_lines(reader)? {
        if let Some(position) = line.find(HALF_SIZE_KEY) {
            let value = line[position + HALF_SIZE_KEY.len()..].trim_end();

            if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
                return Err(err::ExtractError::HalfSize(value.to_string()));
            }

            return match value.parse::<usize>() {
                Ok(half_size) if half_size > 0 => {
                    log::debug!(target: targets::EXTRACT, "Half size: {half_size}");
                    Ok(half_size)
                }
                _ => Err(err::ExtractError::HalfSize(value.to_string())),
            };
        }
    }

    Err(err::ExtractError::MissingHalfSize)
}

/// Reads at most `limit` literals of a solution, if a solution is found.
pub fn read_solution(
    reader: impl BufRead,
    limit: usize,
) -> Result<Option<Vec<IntLiteral>>, err::ExtractError> {
    let lines = read_lines(reader)?;

    for line in &lines {
        if let Some(position) = line.find(SOLUTION_TAG) {
            log::debug!(target: targets::EXTRACT, "Tagged solution");
            let literals = read_literals(line[position + SOLUTION_TAG.len()..].split_whitespace(), limit)?;
            return Ok(Some(literals));
        }
    }

    if let [line] = lines.as_slice() {
        let bare = line.trim_start_matches(' ');
        if !bare.is_empty() && bare.chars().all(|c| c == ' ' || c == '-' || c.is_ascii_digit()) {
            log::debug!(target: targets::EXTRACT, "Bare solution");
            return Ok(Some(read_literals(bare.split_whitespace(), limit)?));
        }
    }

    let mut value_lines = lines
        .iter()
        .filter_map(|line| line.strip_prefix(VALUE_PREFIX))
        .peekable();

    if value_lines.peek().is_some() {
        log::debug!(target: targets::EXTRACT, "Value line solution");
        let tokens = value_lines
            .flat_map(|line| line.split_whitespace())
            .take_while(|token| *token != "0");
        return Ok(Some(read_literals(tokens, limit)?));
    }

    log::debug!(target: targets::EXTRACT, "No solution");
    Ok(None)
}

/// Extracts factors from a formula and a solution to the formula.
pub fn extract(wff: impl BufRead, solution: impl BufRead) -> Result<Extraction, err::ExtractError> {
    let half_size = read_half_size(wff)?;
    let required = factor_width(half_size)?;

    match read_solution(solution, required)? {
        Some(literals) => Ok(Extraction::Factors(Factors::from_solution(
            &literals, half_size,
        )?)),
        None => Ok(Extraction::Prime),
    }
}
