//! A library for encoding the factorization of a number as a boolean formula in conjunctive normal form.
//!
//! ifactor takes a number *N*, written in binary, and synthesizes a combinational circuit for unsigned multiplication whose output wires are fixed to the bits of *N*.
//! The circuit is then lowered to clauses by a Tseitin-style transformation, where each gate is given a fresh atom which is *equivalent* to the output of the gate.
//!
//! A satisfying valuation of the resulting formula contains, on the input wires of the circuit, two factors of *N*.
//! And, as the trivial factorization *N* × 1 is excluded, the formula is unsatisfiable exactly when *N* is prime.
//!
//! # Orientation
//!
//! The library is designed around a [context], which owns:
//! - An [atom database](db::atom), from which fresh atoms are issued.
//! - A [clause database](db::clause), to which clauses are appended.
//!
//! Circuits are built by a handful of [procedures] on a context:
//! - [AND gates](procedures::gate), used to form partial products.
//! - [Full adders](procedures::adder), and ripple adders made of full adders.
//! - The [multiplier](procedures::multiplier) itself.
//! - A [bound](procedures::bound) on the magnitude of each factor, together with a clause excluding 1 as a factor.
//!
//! The formula may then be written in [DIMACS](builder::dimacs) form, and a solution to the formula read back with [extract].
//!
//! # Example
//!
//! ```rust
//! # use ifactor::config::Config;
//! # use ifactor::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//!
//! // 21, written with the most significant bit first.
//! let multiplier = the_context.encode_binary("10101").expect("encoding failed");
//! assert_eq!(multiplier.half_size, 5);
//!
//! let mut dimacs = vec![];
//! assert!(the_context.write_dimacs(&mut dimacs, multiplier.half_size).is_ok());
//!
//! let dimacs = String::from_utf8(dimacs).unwrap();
//! assert!(dimacs.starts_with("c half size = 5\np cnf "));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log].
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) and the `log` feature of the binaries, the adders used by a multiplier can be traced with `RUST_LOG=adder=trace …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod extract;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
