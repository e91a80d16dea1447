use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::anychar,
        combinator::map,
        error::Error,
        multi::many0,
        sequence::tuple,
        Err, IResult,
    },
};

/* --- Day 3: Mull It Over ---

Corrupted program memory. Only `mul(a,b)` invocations with no stray characters count; part two
additionally honors `do()` and `don't()` instructions toggling whether subsequent multiplications
are enabled. Everything else in the memory is noise to skip over. */

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
struct MultiplyInstruction {
    a: i32,
    b: i32,
}

impl MultiplyInstruction {
    fn multiply(self) -> i32 {
        self.a * self.b
    }
}

impl Parse for MultiplyInstruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                tag("mul("),
                parse_integer,
                tag(","),
                parse_integer,
                tag(")"),
            )),
            |(_, a, _, b, _)| Self { a, b },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instruction {
    Multiply(MultiplyInstruction),
    Do,
    Dont,
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(MultiplyInstruction::parse, Self::Multiply),
            map(tag("do()"), |_| Self::Do),
            map(tag("don't()"), |_| Self::Dont),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Instruction>);

impl Solution {
    pub fn multiplication_sum(&self) -> i32 {
        self.0
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Multiply(multiply_instruction) => Some(*multiply_instruction),
                _ => None,
            })
            .map(MultiplyInstruction::multiply)
            .sum()
    }

    pub fn enabled_multiplication_sum(&self) -> i32 {
        let mut is_enabled: bool = true;

        self.0
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Multiply(multiply_instruction) => {
                    is_enabled.then(|| multiply_instruction.multiply())
                }
                Instruction::Do => {
                    is_enabled = true;

                    None
                }
                Instruction::Dont => {
                    is_enabled = false;

                    None
                }
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        // Try to parse an instruction at every offset, consuming one corrupted character on
        // failure.
        map(
            many0(alt((map(Instruction::parse, Some), map(anychar, |_| None)))),
            |instructions| Self(instructions.into_iter().flatten().collect()),
        )(input)
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &[
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))",
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
    ];

    fn solution(index: usize) -> &'static Solution {
        use Instruction::{Do, Dont, Multiply};

        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        fn mul(a: i32, b: i32) -> Instruction {
            Multiply(MultiplyInstruction { a, b })
        }

        &ONCE_LOCK.get_or_init(|| {
            vec![
                Solution(vec![mul(2, 4), mul(5, 5), mul(11, 8), mul(8, 5)]),
                Solution(vec![
                    mul(2, 4),
                    Dont,
                    mul(5, 5),
                    mul(11, 8),
                    Do,
                    mul(8, 5),
                ]),
            ]
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        for (index, solution_str) in SOLUTION_STRS.iter().copied().enumerate() {
            assert_eq!(
                Solution::try_from(solution_str).as_ref(),
                Ok(solution(index))
            );
        }
    }

    #[test]
    fn test_multiplication_sum() {
        for (index, multiplication_sum) in [161_i32, 161_i32].into_iter().enumerate() {
            assert_eq!(solution(index).multiplication_sum(), multiplication_sum);
        }
    }

    #[test]
    fn test_enabled_multiplication_sum() {
        for (index, enabled_multiplication_sum) in [161_i32, 48_i32].into_iter().enumerate() {
            assert_eq!(
                solution(index).enabled_multiplication_sum(),
                enabled_multiplication_sum
            );
        }
    }
}
