#![allow(dead_code)]

use ifactor::{
    context::Context,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{IntLiteral, Literal},
        valuation::{vValuation, Valuation},
    },
};

/// The valuation given by propagating `assumptions` through the clauses of `context`, or None on a conflict.
///
/// Propagation repeats over all clauses until no clause asserts a literal.
pub fn propagate(context: &Context, assumptions: &[IntLiteral]) -> Option<vValuation> {
    let clauses = context.clause_db.clauses().collect::<Vec<&CClause>>();
    let mut valuation: vValuation = vec![None; context.atom_db.count() + 1];
    valuation[0] = Some(true);

    for literal in assumptions {
        match valuation[literal.atom() as usize] {
            Some(value) if value != literal.polarity() => return None,
            _ => valuation[literal.atom() as usize] = Some(literal.polarity()),
        }
    }

    loop {
        let mut asserted = false;
        for clause in &clauses {
            if clause.unsatisfiable_on(&valuation) {
                return None;
            }
            if let Some(literal) = clause.asserts(&valuation) {
                valuation[literal.atom() as usize] = Some(literal.polarity());
                asserted = true;
            }
        }

        if !asserted {
            return Some(valuation);
        }
    }
}

/// Literals for the bits of `value` on `atoms`, least significant bit first.
pub fn value_literals(atoms: &[Atom], value: u128) -> Vec<IntLiteral> {
    atoms
        .iter()
        .enumerate()
        .map(|(index, atom)| IntLiteral::new(*atom, (value >> index) & 1 == 1))
        .collect()
}

/// The value of `atoms` on a valuation, least significant bit first.
pub fn value_of(atoms: &[Atom], valuation: &vValuation) -> u128 {
    atoms
        .iter()
        .enumerate()
        .map(|(index, atom)| match valuation.value_of(*atom).flatten() {
            Some(true) => 1_u128 << index,
            _ => 0,
        })
        .sum()
}

/// The valuation of the context on which the factor atoms `a` and `b` take the values `a_value` and `b_value`, if the clauses of the context permit it.
pub fn valuation_for(
    context: &Context,
    a: &[Atom],
    b: &[Atom],
    a_value: u128,
    b_value: u128,
) -> Option<vValuation> {
    let mut assumptions = value_literals(a, a_value);
    assumptions.extend(value_literals(b, b_value));
    propagate(context, &assumptions)
}

/// A solution line, as written by a solver, for a full valuation.
pub fn solution_line(valuation: &vValuation) -> String {
    let literals = valuation
        .atom_values()
        .map(|(atom, value)| IntLiteral::new(atom, value.unwrap_or(false)).to_string())
        .collect::<Vec<_>>();
    format!("solution = {}", literals.join(" "))
}

/// The binary representation of `value`, most significant bit first.
pub fn binary(value: u128) -> String {
    format!("{value:b}")
}

pub fn is_prime(value: u128) -> bool {
    value >= 2 && (2..value).take_while(|d| d * d <= value).all(|d| value % d != 0)
}
