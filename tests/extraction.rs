mod common;

use ifactor::{
    config::Config,
    context::Context,
    extract::{extract, read_half_size, Extraction},
    procedures::multiplier::Multiplier,
    types::err,
};

/// A context with the formula for `digits`, the multiplier of the formula, and the formula in DIMACS form.
fn encoded(digits: &str) -> (Context, Multiplier, Vec<u8>) {
    let mut ctx = Context::from_config(Config::default());
    let multiplier = ctx.encode_binary(digits).unwrap();

    let mut dimacs = vec![];
    assert!(ctx.write_dimacs(&mut dimacs, multiplier.half_size).is_ok());
    (ctx, multiplier, dimacs)
}

/// Some valuation which satisfies the formula, found by trying each pair of factors.
fn some_solution(ctx: &Context, multiplier: &Multiplier) -> Option<String> {
    let limit = 1_u128 << multiplier.half_size;
    for a in 0..limit {
        for b in 0..limit {
            if let Some(valuation) = common::valuation_for(ctx, &multiplier.a, &multiplier.b, a, b) {
                return Some(common::solution_line(&valuation));
            }
        }
    }
    None
}

mod round_trip {
    use super::*;

    #[test]
    fn composites() {
        for n in [4_u128, 6, 9, 15, 21, 25, 35, 49] {
            let (ctx, multiplier, dimacs) = encoded(&common::binary(n));
            assert_eq!(read_half_size(dimacs.as_slice()), Ok(multiplier.half_size));

            let solution = some_solution(&ctx, &multiplier).expect("a solution");
            match extract(dimacs.as_slice(), solution.as_bytes()) {
                Ok(Extraction::Factors(factors)) => {
                    assert_eq!(factors.first.len(), multiplier.half_size);
                    assert_eq!(factors.second.len(), multiplier.half_size);

                    let (a, b) = factors.values().unwrap();
                    assert_eq!(a * b, n);
                    assert!(a != 1 && b != 1);
                }
                otherwise => panic!("{n}: {otherwise:?}"),
            }
        }
    }

    #[test]
    fn twenty_one() {
        let (ctx, multiplier, dimacs) = encoded("10101");

        let valuation = common::valuation_for(&ctx, &multiplier.a, &multiplier.b, 3, 7).unwrap();
        let solution = common::solution_line(&valuation);

        let extraction = extract(dimacs.as_slice(), solution.as_bytes()).unwrap();
        assert_eq!(
            extraction.to_string(),
            "First Factor:  00011\nSecond Factor: 00111"
        );
    }

    #[test]
    fn solution_shapes() {
        let (ctx, multiplier, dimacs) = encoded("1111");
        let valuation = common::valuation_for(&ctx, &multiplier.a, &multiplier.b, 5, 3).unwrap();

        let tagged = common::solution_line(&valuation);
        let bare = tagged.trim_start_matches("solution = ").to_string();
        let value_lines = format!("s SATISFIABLE\nv {bare} 0\n");
        let with_noise = format!("c solved in 0.01s\n{tagged}\nc done\n");

        for solution in [tagged, bare, value_lines, with_noise] {
            match extract(dimacs.as_slice(), solution.as_bytes()) {
                Ok(Extraction::Factors(factors)) => assert_eq!(factors.values(), Some((5, 3))),
                otherwise => panic!("{solution}: {otherwise:?}"),
            }
        }
    }
}

mod primes {
    use super::*;

    #[test]
    fn seven() {
        let (ctx, multiplier, dimacs) = encoded("111");
        assert_eq!(some_solution(&ctx, &multiplier), None);

        let extraction = extract(dimacs.as_slice(), &b"s UNSATISFIABLE\n"[..]).unwrap();
        assert_eq!(extraction, Extraction::Prime);
        assert_eq!(extraction.to_string(), "No Solution Found: Number is PRIME");

        let extraction = extract(dimacs.as_slice(), &b""[..]).unwrap();
        assert_eq!(extraction, Extraction::Prime);
    }
}

mod malformed {
    use super::*;

    #[test]
    fn missing_half_size() {
        let (_, _, dimacs) = encoded("110");
        let text = String::from_utf8(dimacs).unwrap();
        let without_comment = text.lines().skip(1).collect::<Vec<_>>().join("\n");

        assert_eq!(
            extract(without_comment.as_bytes(), &b"1 2 3 4 5 6"[..]),
            Err(err::ExtractError::MissingHalfSize)
        );
    }

    #[test]
    fn short_solution() {
        let (_, _, dimacs) = encoded("110");
        assert_eq!(
            extract(dimacs.as_slice(), &b"solution = 1 -2 3 -4"[..]),
            Err(err::ExtractError::ShortSolution {
                required: 6,
                found: 4
            })
        );
    }
}
