//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use ifactor::structures::clause::Clause;
//! let clause = vec![-3, 1, 2];
//!
//! assert_eq!(clause.as_dimacs(true), "-3 1 2 0");
//!
//! let mut some_valuation = vec![Some(true), Some(false), Some(false), Some(true)];
//! assert!(clause.unsatisfiable_on(&some_valuation));
//!
//! some_valuation[2] = None;
//! assert_eq!(clause.asserts(&some_valuation), Some(2));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).
//! - A clause is a *set* of literals, and so the order of literals and any duplicates are of no importance.
//!   Still, for the sake of stable output, the [clause database](crate::db::clause) sorts and deduplicates clauses as they are stored.

use crate::structures::{
    atom::TERMINATOR,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and for every other literal *l'* in the clause the polarity of *l'* conflicts with the value of the atom of *l'*.
    /// - None, otherwise.
    fn asserts(&self, val: &impl Valuation) -> Option<CLiteral>;

    /// An iterator over all literals in the clause.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// Returns whether the clause is unsatisfiable on the given valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !dimacs_string.is_empty() {
                dimacs_string.push(' ');
            }
            dimacs_string.push_str(&TERMINATOR.to_string());
        }
        dimacs_string
    }

    fn asserts(&self, val: &impl Valuation) -> Option<CLiteral> {
        let mut asserted_literal = None;
        for literal in self.literals() {
            match val.value_of(literal.atom()).flatten() {
                Some(value) if value == literal.polarity() => return None,
                Some(_) => continue,
                None if asserted_literal.is_none() => asserted_literal = Some(literal),
                None => return None,
            }
        }
        asserted_literal
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.literals().all(|literal| {
            valuation
                .value_of(literal.atom())
                .flatten()
                .is_some_and(|value| value != literal.polarity())
        })
    }
}

/// Sorts the literals of a clause by (signed) value and removes any duplicate literals.
///
/// Both polarities of an atom may remain, as no check for tautologies is made.
pub fn normalise(mut clause: CClause) -> CClause {
    clause.sort_unstable();
    clause.dedup();
    clause
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalise_collapses_duplicates() {
        assert_eq!(normalise(vec![3, -1, 3, 2, -1]), vec![-1, 2, 3]);
    }

    #[test]
    fn normalise_keeps_tautologies() {
        assert_eq!(normalise(vec![4, -4]), vec![-4, 4]);
    }

    #[test]
    fn dimacs_of_empty_clause() {
        let clause: CClause = vec![];
        assert_eq!(clause.as_dimacs(true), "0");
        assert_eq!(clause.as_dimacs(false), "");
    }

    #[test]
    fn dimacs_terminator() {
        let clause: CClause = vec![-2, 5];
        assert_eq!(clause.as_dimacs(true), format!("-2 5 {TERMINATOR}"));
        assert_eq!(clause.as_dimacs(false), "-2 5");
    }

    #[test]
    fn unit_assertion() {
        let valuation = vec![Some(true), None];
        assert_eq!(vec![-1].asserts(&valuation), Some(-1));

        let valuation = vec![Some(true), Some(true)];
        assert_eq!(vec![-1].asserts(&valuation), None);
        assert!(vec![-1].unsatisfiable_on(&valuation));
    }
}
