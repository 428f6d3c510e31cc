use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use ifactor::config::Config;

pub fn cli() -> Command {
    Command::new("iencode")
        .about("Encodes the factorization of a binary number as a satisfiability problem")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help("Example: iencode 10101
  to encode decimal 21 as a SATISFIABILITY problem.

A solution to the problem contains two factors of the number, neither of which is 1.
If the number is prime, the problem is unsatisfiable.")

        .arg(Arg::new("number")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(String))
            .help("The number to factor, written in binary with the most significant bit first."))

        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .required(false)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("Write the problem to the given path, rather than to standard output."))

        .arg(Arg::new("no_bound")
            .long("no-bound")
            .required(false)
            .action(ArgAction::SetTrue)
            .help("Do not bound each factor by the number.")
            .long_help("Do not bound each factor by the number.

A bound is entailed by any factorization, and is added to help a solver prune its search.
Without the bound the problem is smaller, and 1 remains excluded as a factor."))
}

/// Updates `config` with any configuration found in `args`.
pub fn config_from_args(args: &ArgMatches, config: &mut Config) {
    if args.get_flag("no_bound") {
        config.magnitude_bound.set(false);
    }
}
