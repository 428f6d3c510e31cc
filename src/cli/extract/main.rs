#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use ifactor::extract::extract;

mod parse_args;
mod read;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse_args::cli().get_matches();

    let (Some(wff_path), Some(solution_path)) = (
        matches.get_one::<PathBuf>("wff"),
        matches.get_one::<PathBuf>("solution"),
    ) else {
        eprintln!("{}", parse_args::ERROR);
        std::process::exit(1);
    };

    let wff = match read::open(wff_path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("{}", parse_args::ERROR);
            eprintln!("Can't read WFF input file: {e}");
            std::process::exit(1);
        }
    };

    let solution = match read::open(solution_path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("{}", parse_args::ERROR);
            eprintln!("Can't read solution file: {e}");
            std::process::exit(1);
        }
    };

    match extract(wff, solution) {
        Ok(extraction) => println!("{extraction}"),
        Err(e) => {
            eprintln!("{}", parse_args::ERROR);
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
