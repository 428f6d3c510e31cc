/*!
A database of clauses.

Clauses are appended to the database and are never removed or revised.
On storage each clause is [normalised](crate::structures::clause::normalise), and so the database holds each clause as a sorted set of literals.

```rust
# use ifactor::db::clause::ClauseDB;
let mut clause_db = ClauseDB::default();

clause_db.store(vec![2, -1, 2]);
clause_db.store(vec![-2]);

assert_eq!(clause_db.clause_count(), 2);
assert_eq!(clause_db.clauses().next(), Some(&vec![-1, 2]));

// Atom 1 only appears negatively.
assert_eq!(clause_db.positive_atom_count(), 1);
```
*/

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{normalise, CClause, Clause},
        literal::Literal,
    },
};

/// The clause database.
#[derive(Debug, Default)]
pub struct ClauseDB {
    clauses: Vec<CClause>,
}

impl ClauseDB {
    /// Stores a clause, after the clause has been normalised.
    pub fn store(&mut self, clause: CClause) {
        let clause = normalise(clause);
        log::trace!(target: targets::CLAUSE_DB, "Stored: {}", clause.as_dimacs(false));
        self.clauses.push(clause);
    }

    /// Stores each clause in order.
    pub fn store_all(&mut self, clauses: impl IntoIterator<Item = CClause>) {
        for clause in clauses {
            self.store(clause);
        }
    }

    /// A count of clauses stored.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the stored clauses, in the order they were stored.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// The stored clause at the given index, if it exists.
    pub fn get(&self, index: usize) -> Option<&CClause> {
        self.clauses.get(index)
    }

    /// The distinct atoms which appear as a positive literal in some stored clause.
    pub fn positive_atoms(&self) -> BTreeSet<Atom> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .filter(|literal| literal.polarity())
            .map(|literal| literal.atom())
            .collect()
    }

    /// A count of the distinct atoms which appear as a positive literal in some stored clause.
    ///
    /// This is the count of atoms reported in the problem line of a DIMACS representation of the database.
    /// Any atom which has been issued but appears only negatively (or not at all) is not counted.
    pub fn positive_atom_count(&self) -> usize {
        self.positive_atoms().len()
    }
}
