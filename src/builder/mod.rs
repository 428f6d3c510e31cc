/*!
Methods for building a formula from a number, and for writing the formula.

A number is given as a string of binary digits, most significant digit first, as it would usually be written.
The digits are read to a vector of booleans, least significant digit first, as expected by the [multiplier](crate::procedures::multiplier).

```rust
# use ifactor::builder::parse_binary;
# use ifactor::types::err::ParseError;
assert_eq!(parse_binary("110"), Ok(vec![false, true, true]));
assert_eq!(parse_binary("12"), Err(ParseError::NonBinary(1, '2')));
```
*/

pub mod dimacs;

use crate::{
    context::Context,
    procedures::multiplier::Multiplier,
    types::err::{self},
};

/// The bits of a binary string, least significant bit first.
pub fn parse_binary(digits: &str) -> Result<Vec<bool>, err::ParseError> {
    if digits.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let mut bits = Vec::with_capacity(digits.len());
    for (index, character) in digits.chars().enumerate() {
        match character {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(err::ParseError::NonBinary(index, character)),
        }
    }
    bits.reverse();

    Ok(bits)
}

impl Context {
    /// Builds a multiplier whose product is fixed to the number written by `digits` in binary, most significant digit first.
    ///
    /// The digits are checked before the multiplier is built, and so on an error the context is unchanged.
    pub fn encode_binary(&mut self, digits: &str) -> Result<Multiplier, err::ErrorKind> {
        let bits = parse_binary(digits)?;
        self.multiplier(&bits)
    }
}
