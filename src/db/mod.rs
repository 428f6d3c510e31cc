/*!
Databases for holding information relevant to an encoding.

- The [atom database](atom) issues fresh atoms, each strictly greater than any atom issued before.
- The [clause database](clause) holds the clauses of the formula, in the order the clauses were stored.

Both databases only grow.
Nothing is removed or revised until the databases are dropped along with their [context](crate::context).
*/

pub mod atom;
pub mod clause;
