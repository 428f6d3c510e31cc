/*!
A database of atoms, from which fresh atoms are issued.

Atoms are issued in order from 1, and no atom is issued twice.

```rust
# use ifactor::db::atom::AtomDB;
let mut atom_db = AtomDB::default();

assert_eq!(atom_db.fresh_atom(), Ok(1));
assert_eq!(atom_db.fresh_atom(), Ok(2));
assert_eq!(atom_db.count(), 2);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::atom::{Atom, ATOM_MAX},
    types::err::{self},
};

/// The atom database.
#[derive(Debug, Default)]
pub struct AtomDB {
    /// The most recently issued atom, or 0 if no atom has been issued.
    last: Atom,
}

impl AtomDB {
    /// A fresh atom, strictly greater than any atom previously issued.
    ///
    /// Fails only if all atoms which may be represented as a literal have been issued.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        match self.last < ATOM_MAX {
            true => {
                self.last += 1;
                log::trace!(target: targets::ATOM_DB, "Fresh atom: {}", self.last);
                Ok(self.last)
            }
            false => {
                log::error!(target: targets::ATOM_DB, "Atoms exhausted");
                Err(err::AtomDBError::AtomsExhausted)
            }
        }
    }

    /// A collection of `count` fresh atoms, in order.
    pub fn fresh_atoms(&mut self, count: usize) -> Result<Vec<Atom>, err::AtomDBError> {
        (0..count).map(|_| self.fresh_atom()).collect()
    }

    /// A count of atoms issued, which is also the most recently issued atom.
    pub fn count(&self) -> usize {
        self.last as usize
    }
}
