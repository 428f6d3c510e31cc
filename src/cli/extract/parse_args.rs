use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

/// A note on how to use the binary, written alongside any error.
pub const ERROR: &str = "Bad Input: Expect 2 arguments
Arg1 = WFF input file
Arg2 = Solution file

use extract -h for more help";

pub fn cli() -> Command {
    Command::new("extract")
        .about("Extracts two factors of a number from the solution to a problem written by iencode")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help("The solution must contain the literals of a solution in one of the following forms:
  A line containing 'solution =' followed by the literals.
    Example:  solution = 1 -2 3 4 -5 ...
  A single line of literals, and nothing else.
    Example:  1 -2 3 4 -5 ...
  Lines beginning 'v', as written by solvers following the SAT competition format.
    Example:  v 1 -2 3 4 -5 ... 0

If no solution is found, the number is reported as prime.")

        .arg(Arg::new("wff")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The problem given to the solver, as written by iencode."))

        .arg(Arg::new("solution")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The solution written by the solver."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn two_paths() {
        let matches = cli()
            .try_get_matches_from(["extract", "problem.cnf", "solution.txt"])
            .unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("solution"),
            Some(&PathBuf::from("solution.txt"))
        );
    }

    #[test]
    fn argument_count() {
        assert!(cli().try_get_matches_from(["extract", "problem.cnf"]).is_err());
        assert!(cli().try_get_matches_from(["extract", "a", "b", "c"]).is_err());
    }

    #[test]
    fn help_in_either_position() {
        let help = clap::error::ErrorKind::DisplayHelp;
        let first = cli().try_get_matches_from(["extract", "-h", "solution.txt"]);
        assert_eq!(first.map_err(|e| e.kind()).err(), Some(help));

        let second = cli().try_get_matches_from(["extract", "problem.cnf", "--help"]);
        assert_eq!(second.map_err(|e| e.kind()).err(), Some(help));
    }
}
