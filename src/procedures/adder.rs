/*!
Full adders, and ripple adders built from full adders.

# Full adders

A full adder over a carry-in *x* and bits *y* and *z* is encoded by a sum atom *s* and a carry-out atom *c* such that:
- *s* ⇔ *x* ⊕ *y* ⊕ *z*, by eight clauses.
- *c* ⇔ maj(*x*, *y*, *z*), by six clauses.

The carry-in of a full adder is a [Carry], which is either a wire or [Carry::Zero].
With a zero carry-in no atom stands for *x*, and the clauses are revised as though *x* were false:
- Any clause containing ¬*x* is satisfied, and is omitted.
- Any clause containing *x* is stored without *x*.

This leaves four clauses for *s* ⇔ *y* ⊕ *z* and four clauses for *c* ⇔ *y* ∧ *z*, the clauses of a half adder.

# Ripple adders

A ripple adder sums two multi-bit values given as a sequence of pairs of bits of equal weight, least significant pair first.
The first pair is summed with a given carry-in, and each following pair with the carry-out of the previous pair.

```rust
# use ifactor::config::Config;
# use ifactor::context::Context;
# use ifactor::procedures::adder::Carry;
let mut the_context = Context::from_config(Config::default());
let bits = the_context.atom_db.fresh_atoms(4).unwrap();

let pairs = [(bits[0] as i32, bits[2] as i32), (bits[1] as i32, bits[3] as i32)];
let sum = the_context.ripple_add(&pairs, Carry::Zero).unwrap();

assert_eq!(sum.sums.len(), 2);
assert_eq!(sum.bits().len(), 3);

// A half adder and a full adder.
assert_eq!(the_context.clause_db.clause_count(), 8 + 14);
```
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

/// The carry-in of a full adder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Carry {
    /// A carry-in hard-wired to zero, without any atom.
    Zero,

    /// A carry-in given by a wire.
    Wire(IntLiteral),
}

/// A full adder, over a carry-in and two bits.
#[derive(Clone, Copy, Debug)]
pub struct FullAdder {
    /// The carry-in.
    pub carry: Carry,

    pub y: IntLiteral,

    pub z: IntLiteral,
}

/// A template for a clause of a full adder, given by the polarity of each literal in the clause.
///
/// A literal is absent from the clause if the polarity is None.
struct Template {
    x: Option<bool>,
    out: bool,
    y: Option<bool>,
    z: Option<bool>,
}

const fn template(x: Option<bool>, out: bool, y: Option<bool>, z: Option<bool>) -> Template {
    Template { x, out, y, z }
}

const POS: Option<bool> = Some(true);
const NEG: Option<bool> = Some(false);
const NONE: Option<bool> = None;

/// Clauses for s ⇔ x ⊕ y ⊕ z.
const SUM_TEMPLATES: [Template; 8] = [
    template(POS, false, POS, POS),
    template(POS, false, NEG, NEG),
    template(NEG, false, POS, NEG),
    template(NEG, false, NEG, POS),
    template(NEG, true, POS, POS),
    template(POS, true, NEG, POS),
    template(NEG, true, NEG, NEG),
    template(POS, true, POS, NEG),
];

/// Clauses for c ⇔ maj(x, y, z).
const CARRY_TEMPLATES: [Template; 6] = [
    template(POS, false, POS, NONE),
    template(POS, false, NONE, POS),
    template(NONE, false, POS, POS),
    template(NEG, true, POS, NEG),
    template(POS, true, NEG, NEG),
    template(NEG, true, NEG, NONE),
];

fn with_polarity(literal: IntLiteral, polarity: bool) -> IntLiteral {
    match polarity {
        true => literal,
        false => literal.negate(),
    }
}

impl FullAdder {
    /// The clauses making `sum` equivalent to the sum bit of the adder, and `carry_out` equivalent to the carry bit of the adder.
    ///
    /// With a wire as carry-in these are eight and six clauses, otherwise four and four clauses.
    pub fn equivalence(&self, sum: IntLiteral, carry_out: IntLiteral) -> (Vec<CClause>, Vec<CClause>) {
        (
            self.instantiate(&SUM_TEMPLATES, sum),
            self.instantiate(&CARRY_TEMPLATES, carry_out),
        )
    }

    fn instantiate(&self, templates: &[Template], out: IntLiteral) -> Vec<CClause> {
        templates
            .iter()
            .filter_map(|template| self.clause(template, out))
            .collect()
    }

    /// The clause of a template, or None if the clause is satisfied by a zero carry-in.
    fn clause(&self, template: &Template, out: IntLiteral) -> Option<CClause> {
        let mut clause = Vec::with_capacity(4);

        match (template.x, self.carry) {
            (Some(polarity), Carry::Wire(x)) => clause.push(with_polarity(x, polarity)),
            (Some(false), Carry::Zero) => return None,
            (Some(true), Carry::Zero) | (None, _) => {}
        }

        clause.push(with_polarity(out, template.out));

        if let Some(polarity) = template.y {
            clause.push(with_polarity(self.y, polarity));
        }

        if let Some(polarity) = template.z {
            clause.push(with_polarity(self.z, polarity));
        }

        Some(clause)
    }
}

/// The outputs of a ripple adder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RippleSum {
    /// The sum bits, least significant first.
    pub sums: Vec<Atom>,

    /// The carry-out of the most significant pair.
    pub carry: Atom,
}

impl RippleSum {
    /// All output bits of the adder, least significant first, and so ending with the carry.
    pub fn bits(&self) -> Vec<Atom> {
        let mut bits = self.sums.clone();
        bits.push(self.carry);
        bits
    }
}

impl Context {
    /// Returns a fresh sum atom and a fresh carry atom for the adder, after storing the clauses of the adder.
    ///
    /// Clauses for the sum are stored before clauses for the carry.
    pub fn full_adder(&mut self, adder: &FullAdder) -> Result<(Atom, Atom), err::ErrorKind> {
        let sum = self.fresh_atom()?;
        let carry = self.fresh_atom()?;
        log::trace!(target: targets::ADDER, "Full adder {adder:?} to sum {sum} and carry {carry}");

        let (sum_clauses, carry_clauses) =
            adder.equivalence(IntLiteral::new(sum, true), IntLiteral::new(carry, true));
        self.clause_db.store_all(sum_clauses);
        self.clause_db.store_all(carry_clauses);

        Ok((sum, carry))
    }

    /// Sums pairs of bits by a chain of full adders, where `carry` is the carry-in of the first pair.
    ///
    /// Pairs are summed in the order given, and so the first pair should be the least significant.
    pub fn ripple_add(
        &mut self,
        pairs: &[(IntLiteral, IntLiteral)],
        carry: Carry,
    ) -> Result<RippleSum, err::ErrorKind> {
        let Some(((y, z), rest)) = pairs.split_first() else {
            log::error!(target: targets::ADDER, "Ripple adder over no pairs");
            return Err(err::ErrorKind::from(err::BuildError::EmptyAdder));
        };

        let mut sums = Vec::with_capacity(pairs.len());

        let (sum, mut carry) = self.full_adder(&FullAdder {
            carry,
            y: *y,
            z: *z,
        })?;
        sums.push(sum);

        for (y, z) in rest {
            let (sum, carry_out) = self.full_adder(&FullAdder {
                carry: Carry::Wire(IntLiteral::new(carry, true)),
                y: *y,
                z: *z,
            })?;
            sums.push(sum);
            carry = carry_out;
        }

        log::debug!(target: targets::ADDER, "Ripple adder over {} pairs, carry {carry}", pairs.len());
        Ok(RippleSum { sums, carry })
    }
}
