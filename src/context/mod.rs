/*!
The context --- within which circuits are built and to which clauses are added.

A context owns an [atom database](crate::db::atom) and a [clause database](crate::db::clause), and every [procedure](crate::procedures) takes the context by mutable reference.
So, the issue of atoms and the storage of clauses happen in a single sequence, without any shared state beyond the context.

# Example
```rust
# use ifactor::config::Config;
# use ifactor::context::Context;
# use ifactor::structures::literal::{IntLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let p_and_q = the_context
    .and_gate(IntLiteral::new(p, true), IntLiteral::new(q, true))
    .unwrap();

assert_eq!(p_and_q, 3);
assert_eq!(the_context.clause_db.clause_count(), 3);
```
*/

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// A context for building a formula.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The clause database.
    pub clause_db: ClauseDB,
}

impl Context {
    /// A fresh context, without any atoms or clauses.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
        }
    }

    /// Returns a fresh atom.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        self.atom_db.fresh_atom()
    }

    /// Stores a clause in the clause database.
    pub fn add_clause(&mut self, clause: CClause) {
        self.clause_db.store(clause);
    }

    /// Fixes the value of an atom, by way of a unit clause.
    pub fn fix_value(&mut self, atom: Atom, value: bool) {
        self.clause_db.store(vec![IntLiteral::new(atom, value)]);
    }
}
