#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{fs::File, io::BufWriter, path::PathBuf};

use ifactor::{config::Config, context::Context};

mod parse_args;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse_args::cli().get_matches();

    let mut config = Config::default();
    parse_args::config_from_args(&matches, &mut config);

    // Required by the cli, and an empty string is rejected when encoding.
    let digits = matches
        .get_one::<String>("number")
        .map(String::as_str)
        .unwrap_or_default();

    let mut the_context = Context::from_config(config);

    let multiplier = match the_context.encode_binary(digits) {
        Ok(multiplier) => multiplier,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("use iencode -h for help");
            std::process::exit(1);
        }
    };

    let written = match matches.get_one::<PathBuf>("output") {
        Some(path) => match File::create(path) {
            Ok(file) => the_context.write_dimacs(BufWriter::new(file), multiplier.half_size),
            Err(e) => {
                eprintln!("Failed to create {path:?}: {e}");
                std::process::exit(1);
            }
        },

        None => the_context.write_dimacs(BufWriter::new(std::io::stdout().lock()), multiplier.half_size),
    };

    if let Err(e) = written {
        eprintln!("Failed to write formula: {e}");
        std::process::exit(1);
    }
}
