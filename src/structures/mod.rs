//! Key structures, such as atoms, literals, and clauses.
//!
//! As in the DIMACS format, a literal is a non-zero integer whose sign is the polarity of the literal and whose magnitude is an atom.
//!
//! ## Formulas
//!
//! A formula is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! Within a [context](crate::context) the formula is the content of the [clause database](crate::db::clause).
//!
//! ## Wires
//!
//! Circuits are described in terms of wires, and each wire is an atom.
//! - *Input* wires are free, and hold the bits of the factors to be found.
//! - *Output* wires have their value fixed by a unit clause to some bit of the number to be factored.
//! - *Internal* wires are introduced for each gate, and are equivalent to the output of the gate.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
