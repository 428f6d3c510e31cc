/*!
Writing the formula of a context in the DIMACS format.

```text
c half size = <k>
p cnf <atoms> <clauses>
<literal> <literal> … 0
…
```

- The half size is the number of bits of each factor, and is read when [extracting](crate::extract) factors from a solution.
- The count of atoms is the count of distinct atoms which appear positively in some clause, following [positive_atom_count](crate::db::clause::ClauseDB::positive_atom_count).
- Each clause is written on a line, with literals in the order of the clause database and terminated by `0`.
*/

use std::io::Write;

use crate::{context::Context, structures::clause::Clause};

/// The key of the comment which records the half size of a formula.
pub const HALF_SIZE_KEY: &str = "c half size = ";

impl Context {
    /// Writes the formula of the context in DIMACS form, with a comment recording the given half size.
    ///
    /// ```rust
    /// # use ifactor::config::Config;
    /// # use ifactor::context::Context;
    /// let mut the_context = Context::from_config(Config::default());
    /// the_context.add_clause(vec![2, -1]);
    /// the_context.add_clause(vec![-2]);
    ///
    /// let mut dimacs = vec![];
    /// assert!(the_context.write_dimacs(&mut dimacs, 1).is_ok());
    ///
    /// assert_eq!(
    ///     String::from_utf8(dimacs).unwrap(),
    ///     "c half size = 1\np cnf 1 2\n-1 2 0\n-2 0\n"
    /// );
    /// ```
    pub fn write_dimacs(&self, mut writer: impl Write, half_size: usize) -> std::io::Result<()> {
        writeln!(writer, "{HALF_SIZE_KEY}{half_size}")?;
        writeln!(
            writer,
            "p cnf {} {}",
            self.clause_db.positive_atom_count(),
            self.clause_db.clause_count()
        )?;

        for clause in self.clause_db.clauses() {
            writeln!(writer, "{}", clause.as_dimacs(true))?;
        }

        writer.flush()
    }
}
