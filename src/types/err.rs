//! Error types used in the library.
//!
//! - Build errors are returned if some circuit cannot be constructed from the given inputs.
//!   These are checked before anything is stored, so a context is never left with part of a circuit.
//! - Parse errors concern the binary representation of a number.
//! - Extract errors concern the formula and solution files read when extracting factors.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::ATOM_MAX;

/// A general error, wrapping the specific errors of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Build(BuildError),
    Extract(ExtractError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "{e}"),
            Self::Build(e) => write!(f, "{e}"),
            Self::Extract(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl std::fmt::Display for AtomDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomsExhausted => {
                write!(f, "The encoding requires more than {ATOM_MAX} atoms")
            }
        }
    }
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors when building a circuit.
///
/// Each of these is a misuse of a procedure, rather than an issue with some number given to the library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A ripple adder was requested over no pairs of bits.
    EmptyAdder,

    /// A multiplier was requested for a number with no bits.
    EmptyNumber,

    /// The factor and product given to a bound differ in width, or are empty.
    BoundWidth,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAdder => write!(f, "An adder requires at least one pair of bits"),
            Self::EmptyNumber => write!(f, "A multiplier requires at least one bit"),
            Self::BoundWidth => {
                write!(f, "A bound requires a factor and product of the same (non-zero) width")
            }
        }
    }
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing of a binary number.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A character other than `0` or `1`, at the given (character) index.
    NonBinary(usize, char),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Non Binary # passed in: no digits were given"),
            Self::NonBinary(index, character) => {
                write!(f, "Non Binary # passed in: '{character}' at position {index}")
            }
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when extracting factors from a formula and a solution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExtractError {
    /// The formula does not contain a half size comment.
    MissingHalfSize,

    /// A half size comment was found, but the value is not a positive integer.
    HalfSize(String),

    /// Some token of a solution is not an integer.
    Literal(String),

    /// The solution has fewer literals than the two factors require.
    ShortSolution { required: usize, found: usize },

    /// Some line could not be read.
    Line(usize),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHalfSize => write!(f, "Unable to find: 'c half size = ' in WFF input file"),
            Self::HalfSize(value) => {
                write!(f, "Could not find half size value in WFF input file (read '{value}')")
            }
            Self::Literal(token) => write!(f, "Unable to read '{token}' as a literal"),
            Self::ShortSolution { required, found } => write!(
                f,
                "The solution has {found} literals, while the factors require {required}"
            ),
            Self::Line(line) => write!(f, "Unable to read line {line}"),
        }
    }
}

impl From<ExtractError> for ErrorKind {
    fn from(e: ExtractError) -> Self {
        ErrorKind::Extract(e)
    }
}
