/*!
AND gates.

An AND gate over literals *a* and *b* is encoded by a fresh atom *v* and three clauses which together make *v* equivalent to *a* ∧ *b*:

| Clause     | Reading      |
|------------|--------------|
| ¬v ∨ a     | v → a        |
| ¬v ∨ b     | v → b        |
| ¬a ∨ ¬b ∨ v | a ∧ b → v    |

Within a multiplier, AND gates form the partial products of the bits of the two factors.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// The clauses making `v` equivalent to `a` ∧ `b`.
pub fn and_equivalence(v: IntLiteral, a: IntLiteral, b: IntLiteral) -> [CClause; 3] {
    [vec![-v, a], vec![-v, b], vec![-a, -b, v]]
}

impl Context {
    /// Returns a fresh atom equivalent to `a` ∧ `b`, after storing the clauses of the equivalence.
    pub fn and_gate(&mut self, a: IntLiteral, b: IntLiteral) -> Result<Atom, err::ErrorKind> {
        let v = self.fresh_atom()?;
        log::trace!(target: targets::GATE, "{v} ⇔ {a} ∧ {b}");

        self.clause_db
            .store_all(and_equivalence(IntLiteral::new(v, true), a, b));

        Ok(v)
    }
}
