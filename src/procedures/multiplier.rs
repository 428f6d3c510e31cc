/*!
A multiplier for two factors of *k* bits, with the low *k* bits of the product fixed to the bits of some number *N*.

The multiplier follows the shift-and-add schedule:
- Atoms are issued for the bits of a first factor *A* and then for the bits of a second factor *B*, least significant first.
  These are the only free atoms of the formula, as every other atom is equivalent to some gate over these atoms.
- Row *i* is made of the AND gates *A*ᵢ ∧ *B*ⱼ, for each *j*, and the gate *A*ᵢ ∧ *B*ⱼ has weight *i* + *j*.
- The lowest gate of the first row is the first bit of the product.
  The remaining gates of the first row, together with a padding atom fixed to zero, are the first *partial sum*.
- Each following row is added to the partial sum by a [ripple adder](crate::procedures::adder).
  The lowest bit of the sum is the next bit of the product, and the remaining bits (including the carry) are the next partial sum.

As each bit of the product is found it is fixed to the corresponding bit of *N*.
After the last row, the partial sum holds the high *k* bits of the product, and these are fixed to zero.

So, the formula holds exactly when *A* × *B* = *N*.

```rust
# use ifactor::config::Config;
# use ifactor::context::Context;
let mut the_context = Context::from_config(Config::default());

// 6, least significant bit first.
let multiplier = the_context.multiplier(&[false, true, true]).unwrap();

assert_eq!(multiplier.a, vec![1, 2, 3]);
assert_eq!(multiplier.b, vec![4, 5, 6]);
assert_eq!(multiplier.product.len(), 3);
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::adder::Carry,
    structures::{
        atom::Atom,
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// The wires of a multiplier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multiplier {
    /// The bits of the first factor, least significant first.
    pub a: Vec<Atom>,

    /// The bits of the second factor, least significant first.
    pub b: Vec<Atom>,

    /// The low bits of the product, least significant first, each fixed to the corresponding bit of the number.
    pub product: Vec<Atom>,

    /// The number of bits of each factor.
    pub half_size: usize,
}

impl Context {
    /// Builds a multiplier whose product is fixed to `bits`, given least significant bit first.
    ///
    /// Each factor has as many bits as `bits`, and so leading zeros in `bits` widen the factors.
    pub fn multiplier(&mut self, bits: &[bool]) -> Result<Multiplier, err::ErrorKind> {
        if bits.is_empty() {
            log::error!(target: targets::MULTIPLIER, "Multiplier requested for no bits");
            return Err(err::ErrorKind::from(err::BuildError::EmptyNumber));
        }

        let half_size = bits.len();
        let a = self.atom_db.fresh_atoms(half_size)?;
        let b = self.atom_db.fresh_atoms(half_size)?;
        log::debug!(target: targets::MULTIPLIER, "Factor atoms: {a:?} and {b:?}");

        let mut product = Vec::with_capacity(half_size);

        let first_row = self.partial_products(a[0], &b)?;
        let (lowest, rest) = first_row
            .split_first()
            .ok_or(err::ErrorKind::from(err::BuildError::EmptyNumber))?;
        self.fix_value(*lowest, bits[0]);
        product.push(*lowest);

        let mut partial_sum = rest.to_vec();
        let padding = self.fresh_atom()?;
        self.fix_value(padding, false);
        partial_sum.push(padding);

        for (index, a_bit) in a.iter().enumerate().skip(1) {
            let row = self.partial_products(*a_bit, &b)?;

            let pairs = partial_sum
                .iter()
                .zip(row.iter())
                .map(|(p, r)| (IntLiteral::new(*p, true), IntLiteral::new(*r, true)))
                .collect::<Vec<_>>();

            let sum = self.ripple_add(&pairs, Carry::Zero)?;
            let mut sum_bits = sum.bits();
            let lowest = sum_bits.remove(0);
            self.fix_value(lowest, bits[index]);
            product.push(lowest);

            log::trace!(target: targets::MULTIPLIER, "Row {index} fixed {lowest} to {}", bits[index]);
            partial_sum = sum_bits;
        }

        // The high bits of the product, and the number has no high bits.
        for atom in partial_sum {
            self.fix_value(atom, false);
        }

        match self.config.magnitude_bound.value {
            true => {
                self.bound_factor(&a, &product)?;
                self.bound_factor(&b, &product)?;
            }
            false => {
                self.exclude_one(&a)?;
                self.exclude_one(&b)?;
            }
        }

        log::info!(target: targets::MULTIPLIER, "Multiplier over {half_size} bits with {} atoms and {} clauses", self.atom_db.count(), self.clause_db.clause_count());

        Ok(Multiplier {
            a,
            b,
            product,
            half_size,
        })
    }

    /// The AND gates of `bit` with each bit of `factor`, in the order of `factor`.
    fn partial_products(&mut self, bit: Atom, factor: &[Atom]) -> Result<Vec<Atom>, err::ErrorKind> {
        let bit = IntLiteral::new(bit, true);
        factor
            .iter()
            .map(|other| self.and_gate(bit, IntLiteral::new(*other, true)))
            .collect()
    }
}
