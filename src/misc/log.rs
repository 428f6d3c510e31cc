/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for inspecting an encoding and/or fixing issues.

Note, no log implementation is provided by the library.
The binaries initialise [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [atom database](crate::db::atom)
    pub const ATOM_DB: &str = "atom_db";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [AND gates](crate::procedures::gate)
    pub const GATE: &str = "gate";

    /// Logs related to [full and ripple adders](crate::procedures::adder)
    pub const ADDER: &str = "adder";

    /// Logs related to the [multiplier](crate::procedures::multiplier)
    pub const MULTIPLIER: &str = "multiplier";

    /// Logs related to [bounds on factors](crate::procedures::bound)
    pub const BOUND: &str = "bound";

    /// Logs related to [extraction](crate::extract)
    pub const EXTRACT: &str = "extract";
}
