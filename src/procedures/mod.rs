//! Procedures for building circuits within a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//!
//! Each procedure issues fresh atoms for the wires it introduces and stores clauses which make each of those wires *equivalent* to the output of the relevant gate.
//! Equivalence, rather than implication, ensures a valuation of the input wires of a circuit determines the value of every other wire.
//!
//! - [gate]: AND gates.
//! - [adder]: full adders, and ripple adders built from full adders.
//! - [multiplier]: a multiplier built from AND gates and ripple adders, with output wires fixed to some number.
//! - [bound]: a bound on the magnitude of a factor, and the exclusion of 1 as a factor.

pub mod adder;
pub mod bound;
pub mod gate;
pub mod multiplier;
