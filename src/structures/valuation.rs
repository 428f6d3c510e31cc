/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where the index of each element is an atom.
As atoms are issued from 1, the zero index element is unused and, by convention, true.

```rust
# use ifactor::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(true), Some(false)];

assert_eq!(valuation.value_of(1), Some(None));
assert_eq!(valuation.value_of(3), Some(Some(false)));
assert_eq!(valuation.value_of(4), None);
assert_eq!(valuation.unvalued_atoms().count(), 1);
```
*/

use super::atom::Atom;

/// The canonical implementation of a valuation.
#[allow(non_camel_case_types)]
pub type vValuation = Vec<Option<bool>>;

/// Something which may assign a value to an atom.
pub trait Valuation {
    /// Some(v) if the atom is part of the valuation, where v is the (optional) value of the atom, and None otherwise.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator over (atom, value) pairs, excluding the unused zero atom.
    fn atom_values(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator over atoms without a value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_values()
            .filter_map(|(atom, value)| value.is_none().then_some(atom))
    }
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn atom_values(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(index, value)| (index as Atom, *value))
    }
}
