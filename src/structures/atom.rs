/*!
(The representation of) an atom (aka. a 'variable', or a 'wire' of a circuit).

Each atom is a positive u32 issued by the [atom database](crate::db::atom).

```rust
# use ifactor::structures::atom::{Atom, ATOM_MAX};
let atoms = (1..=4).collect::<Vec<Atom>>();
assert!(atoms.iter().all(|atom| *atom <= ATOM_MAX));
```

# Notes
- The atom `0` is never issued, as `0` terminates a clause in the DIMACS format.
- Atoms are limited by the representation of [literals](crate::structures::literal) as signed integers, and so [ATOM_MAX] is less than [u32::MAX].
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom reserved as the terminator of a clause.
pub const TERMINATOR: Atom = 0;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
