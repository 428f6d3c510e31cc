mod common;

use ifactor::{
    config::Config,
    context::Context,
    procedures::adder::Carry,
    structures::literal::{IntLiteral, Literal},
    types::err,
};

mod ripple {
    use super::*;

    fn check_ripple(width: usize, with_carry: bool) {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.atom_db.fresh_atoms(width).unwrap();
        let y = ctx.atom_db.fresh_atoms(width).unwrap();
        let carry_atom = ctx.fresh_atom().unwrap();

        let carry = match with_carry {
            true => Carry::Wire(IntLiteral::new(carry_atom, true)),
            false => Carry::Zero,
        };

        let pairs = x
            .iter()
            .zip(y.iter())
            .map(|(a, b)| (IntLiteral::new(*a, true), IntLiteral::new(*b, true)))
            .collect::<Vec<_>>();
        let sum = ctx.ripple_add(&pairs, carry).unwrap();
        assert_eq!(sum.sums.len(), width);

        let carry_values: &[u128] = match with_carry {
            true => &[0, 1],
            false => &[0],
        };

        for x_value in 0..(1 << width) {
            for y_value in 0..(1 << width) {
                for carry_value in carry_values {
                    let mut assumptions = common::value_literals(&x, x_value);
                    assumptions.extend(common::value_literals(&y, y_value));
                    if with_carry {
                        assumptions.push(IntLiteral::new(carry_atom, *carry_value == 1));
                    }

                    let valuation = common::propagate(&ctx, &assumptions).expect("conflict");
                    assert_eq!(
                        common::value_of(&sum.bits(), &valuation),
                        x_value + y_value + carry_value
                    );
                }
            }
        }
    }

    #[test]
    fn single_pair() {
        check_ripple(1, false);
        check_ripple(1, true);
    }

    #[test]
    fn three_pairs() {
        check_ripple(3, false);
        check_ripple(3, true);
    }

    #[test]
    fn clause_counts() {
        let mut ctx = Context::from_config(Config::default());
        let atoms = ctx.atom_db.fresh_atoms(7).unwrap();
        let pairs = atoms
            .chunks(2)
            .take(3)
            .map(|pair| (pair[0] as IntLiteral, pair[1] as IntLiteral))
            .collect::<Vec<_>>();

        assert!(ctx.ripple_add(&pairs, Carry::Wire(atoms[6] as IntLiteral)).is_ok());
        assert_eq!(ctx.clause_db.clause_count(), 3 * 14);

        // A sum and carry atom for each pair.
        assert_eq!(ctx.atom_db.count(), 7 + 3 * 2);
    }

    #[test]
    fn sum_before_carry() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.atom_db.fresh_atoms(4).is_ok());
        let sum = ctx.ripple_add(&[(1, 2), (3, 4)], Carry::Zero).unwrap();

        // Atoms are issued sum then carry, pair by pair.
        assert_eq!(sum.sums, vec![5, 7]);
        assert_eq!(sum.carry, 8);
        assert_eq!(sum.bits(), vec![5, 7, 8]);
    }

    #[test]
    fn empty() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.ripple_add(&[], Carry::Zero),
            Err(err::ErrorKind::Build(err::BuildError::EmptyAdder))
        );
        assert_eq!(ctx.clause_db.clause_count(), 0);
        assert_eq!(ctx.atom_db.count(), 0);
    }
}

mod gates {
    use super::*;

    #[test]
    fn and_gate_follows_inputs() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom().unwrap();
        let b = ctx.fresh_atom().unwrap();

        let v = ctx
            .and_gate(IntLiteral::new(a, true), IntLiteral::new(b, false))
            .unwrap();
        assert_eq!(v, 3);

        for a_value in [false, true] {
            for b_value in [false, true] {
                let valuation = common::propagate(
                    &ctx,
                    &[IntLiteral::new(a, a_value), IntLiteral::new(b, b_value)],
                )
                .expect("conflict");
                assert_eq!(valuation[v as usize], Some(a_value && !b_value));
            }
        }
    }
}

mod bounds {
    use super::*;

    #[test]
    fn exhaustive() {
        let width = 3;
        let mut ctx = Context::from_config(Config::default());
        let factor = ctx.atom_db.fresh_atoms(width).unwrap();
        let product = ctx.atom_db.fresh_atoms(width).unwrap();
        assert!(ctx.bound_factor(&factor, &product).is_ok());

        for f in 0..(1 << width) {
            for p in 0..(1 << width) {
                let mut assumptions = common::value_literals(&factor, f);
                assumptions.extend(common::value_literals(&product, p));

                let permitted = common::propagate(&ctx, &assumptions).is_some();
                assert_eq!(permitted, f <= p && f != 1, "factor {f} and product {p}");
            }
        }
    }

    #[test]
    fn exclusion_alone() {
        let width = 3;
        let mut ctx = Context::from_config(Config::default());
        let factor = ctx.atom_db.fresh_atoms(width).unwrap();
        assert!(ctx.exclude_one(&factor).is_ok());

        for f in 0..(1 << width) {
            let permitted = common::propagate(&ctx, &common::value_literals(&factor, f)).is_some();
            assert_eq!(permitted, f != 1);
        }
    }
}
