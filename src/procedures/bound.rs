/*!
A bound on the magnitude of a factor, and the exclusion of 1 as a factor.

# Magnitude

A proper factor of *N* is at most *N*, and so a factor *F* may be bounded by the product wires *P* of a [multiplier](crate::procedures::multiplier) without excluding any factorization.
The bound is not required for the formula to be correct, though it may help a solver to prune a search.

The bound is a comparator, built from the most significant bit to the least.
For each bit *i* an atom *e*ᵢ is issued, together with clauses for *e*ᵢ ⇔ (*F*ᵢ ⇔ *P*ᵢ).
And, before *e*ᵢ is issued, a clause requires *F*ᵢ ≤ *P*ᵢ if each more significant bit has matched:

¬*F*ᵢ ∨ *P*ᵢ ∨ ¬*e*ᵢ₊₁ ∨ … ∨ ¬*e*ₖ₋₁

In total, five clauses for each bit.

# Triviality

The factorization *N* × 1 is always possible, and so a solution to the formula would not be informative without excluding 1 as a factor.
This is done by a single clause requiring some bit other than the least significant bit to be set, if the least significant bit is set.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

impl Context {
    /// Bounds the value of `factor` by the value of `product`, and excludes 1 as the value of `factor`.
    ///
    /// Both `factor` and `product` are given least significant bit first, and must be of the same (non-zero) width.
    pub fn bound_factor(&mut self, factor: &[Atom], product: &[Atom]) -> Result<(), err::ErrorKind> {
        if factor.is_empty() || factor.len() != product.len() {
            log::error!(target: targets::BOUND, "Bound of {} bits by {} bits", factor.len(), product.len());
            return Err(err::ErrorKind::from(err::BuildError::BoundWidth));
        }

        let mut matched: Vec<IntLiteral> = Vec::with_capacity(factor.len());

        for (f, p) in factor.iter().zip(product.iter()).rev() {
            let f = IntLiteral::new(*f, true);
            let p = IntLiteral::new(*p, true);

            let mut clause = vec![-f, p];
            clause.extend(matched.iter().copied());
            self.add_clause(clause);

            let e = IntLiteral::new(self.fresh_atom()?, true);
            self.clause_db.store_all([
                vec![-e, -f, p],
                vec![-e, f, -p],
                vec![e, f, p],
                vec![e, -f, -p],
            ]);

            matched.push(-e);
        }

        log::debug!(target: targets::BOUND, "Bounded {factor:?} by {product:?}");
        self.exclude_one(factor)
    }

    /// Excludes 1 as the value of `factor`, given least significant bit first.
    pub fn exclude_one(&mut self, factor: &[Atom]) -> Result<(), err::ErrorKind> {
        let Some((lowest, rest)) = factor.split_first() else {
            return Err(err::ErrorKind::from(err::BuildError::BoundWidth));
        };

        let mut clause = vec![IntLiteral::new(*lowest, false)];
        clause.extend(rest.iter().map(|atom| IntLiteral::new(*atom, true)));
        self.add_clause(clause);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    use super::*;

    #[test]
    fn five_clauses_a_bit() {
        let mut ctx = Context::from_config(Config::default());
        let factor = ctx.atom_db.fresh_atoms(4).unwrap();
        let product = ctx.atom_db.fresh_atoms(4).unwrap();

        assert!(ctx.bound_factor(&factor, &product).is_ok());
        assert_eq!(ctx.clause_db.clause_count(), 4 * 5 + 1);
        assert_eq!(ctx.atom_db.count(), 8 + 4);
    }

    #[test]
    fn exclusion_of_one() {
        let mut ctx = Context::from_config(Config::default());
        let factor = ctx.atom_db.fresh_atoms(3).unwrap();

        assert!(ctx.exclude_one(&factor).is_ok());
        assert_eq!(ctx.clause_db.get(0), Some(&vec![-1, 2, 3]));
    }

    #[test]
    fn mismatched_widths() {
        let mut ctx = Context::from_config(Config::default());
        let factor = ctx.atom_db.fresh_atoms(3).unwrap();
        let product = ctx.atom_db.fresh_atoms(2).unwrap();

        assert_eq!(
            ctx.bound_factor(&factor, &product),
            Err(err::ErrorKind::Build(err::BuildError::BoundWidth))
        );
        assert_eq!(ctx.clause_db.clause_count(), 0);
    }
}
