use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
};

/* --- Day 7: Bridge Repair ---

Each equation is a test value and a list of operands; operators are applied strictly left to right
with no precedence. Part one admits `+` and `*`; part two adds a digit-concatenation operator
(`12 || 345 = 12345`). An equation counts if any operator assignment reaches the test value. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

impl Equation {
    fn concatenate(left: u64, right: u64) -> u64 {
        left * 10_u64.pow(right.checked_ilog10().unwrap_or_default() + 1_u32) + right
    }

    /// Depth-first search over operator assignments
    ///
    /// All operators are monotonically non-decreasing on positive operands, so any accumulator
    /// past the test value prunes its whole subtree.
    fn can_reach(&self, accumulator: u64, operands: &[u64], enable_concatenation: bool) -> bool {
        if accumulator > self.test_value {
            false
        } else {
            match operands.split_first() {
                None => accumulator == self.test_value,
                Some((&operand, operands)) => {
                    self.can_reach(accumulator + operand, operands, enable_concatenation)
                        || self.can_reach(accumulator * operand, operands, enable_concatenation)
                        || (enable_concatenation
                            && self.can_reach(
                                Self::concatenate(accumulator, operand),
                                operands,
                                enable_concatenation,
                            ))
                }
            }
        }
    }

    fn is_solvable(&self, enable_concatenation: bool) -> bool {
        self.operands
            .split_first()
            .map_or(false, |(&first_operand, operands)| {
                self.can_reach(first_operand, operands, enable_concatenation)
            })
    }
}

impl Parse for Equation {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                parse_integer,
                tag(": "),
                separated_list1(space1, parse_integer),
            ),
            |(test_value, operands)| Self {
                test_value,
                operands,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Equation>);

impl Solution {
    fn solvable_test_value_sum(&self, enable_concatenation: bool) -> u64 {
        self.0
            .iter()
            .filter(|equation| equation.is_solvable(enable_concatenation))
            .map(|equation| equation.test_value)
            .sum()
    }

    pub fn calibration_result(&self) -> u64 {
        self.solvable_test_value_sum(false)
    }

    pub fn concatenating_calibration_result(&self) -> u64 {
        self.solvable_test_value_sum(true)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Equation::parse, opt(line_ending))), Self)(input)
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

    const SOLUTION_STRS: &'static [&'static str] = &["\
        190: 10 19\n\
        3267: 81 40 27\n\
        83: 17 5\n\
        156: 15 6\n\
        7290: 6 8 6 15\n\
        161011: 16 10 13\n\
        192: 17 8 14\n\
        21037: 9 7 18 13\n\
        292: 11 6 16 20\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .copied()
                .map(|solution_str| Solution::try_from(solution_str).unwrap())
                .collect()
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        let solution: &Solution = solution(0_usize);

        assert_eq!(solution.0.len(), 9_usize);
        assert_eq!(
            solution.0[1_usize],
            Equation {
                test_value: 3267_u64,
                operands: vec![81_u64, 40_u64, 27_u64],
            }
        );
    }

    #[test]
    fn test_concatenate() {
        assert_eq!(Equation::concatenate(12_u64, 345_u64), 12345_u64);
        assert_eq!(Equation::concatenate(15_u64, 6_u64), 156_u64);
        assert_eq!(Equation::concatenate(48_u64, 0_u64), 480_u64);
    }

    #[test]
    fn test_is_solvable() {
        assert_eq!(
            solution(0_usize)
                .0
                .iter()
                .map(|equation| equation.is_solvable(false))
                .collect::<Vec<bool>>(),
            vec![true, true, false, false, false, false, false, false, true]
        );
    }

    #[test]
    fn test_calibration_result() {
        for (index, calibration_result) in [3749_u64].into_iter().enumerate() {
            assert_eq!(solution(index).calibration_result(), calibration_result);
        }
    }

    #[test]
    fn test_concatenating_calibration_result() {
        for (index, calibration_result) in [11387_u64].into_iter().enumerate() {
            assert_eq!(
                solution(index).concatenating_calibration_result(),
                calibration_result
            );
        }
    }
}
