use {
    crate::*,
    nom::{
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::terminated,
        Err, IResult,
    },
};

/* --- Day 2: Red-Nosed Reports ---

Each report is a line of levels. A report is safe when its adjacent differences are all within
1..=3 in a single direction. Part two tolerates one bad level per report: removing any single
level that yields a safe report makes the whole report count. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Report(Vec<i32>);

impl Report {
    fn levels_are_safe(levels: &[i32]) -> bool {
        levels
            .windows(2_usize)
            .all(|pair| (1_i32..=3_i32).contains(&(pair[1_usize] - pair[0_usize])))
            || levels
                .windows(2_usize)
                .all(|pair| (-3_i32..=-1_i32).contains(&(pair[1_usize] - pair[0_usize])))
    }

    fn is_safe(&self) -> bool {
        Self::levels_are_safe(&self.0)
    }

    fn is_safe_with_dampener(&self) -> bool {
        self.is_safe()
            || (0_usize..self.0.len()).any(|skip| {
                let mut levels: Vec<i32> = self.0.clone();

                levels.remove(skip);

                Self::levels_are_safe(&levels)
            })
    }
}

impl Parse for Report {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(space1, parse_integer), Self)(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Report>);

impl Solution {
    pub fn safe_report_count(&self) -> usize {
        self.0.iter().filter(|report| report.is_safe()).count()
    }

    pub fn dampened_safe_report_count(&self) -> usize {
        self.0
            .iter()
            .filter(|report| report.is_safe_with_dampener())
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Report::parse, opt(line_ending))), Self)(input)
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
        7 6 4 2 1\n\
        1 2 7 8 9\n\
        9 7 6 2 1\n\
        1 3 2 4 5\n\
        8 6 4 4 1\n\
        1 3 6 7 9\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution(
                [
                    vec![7_i32, 6_i32, 4_i32, 2_i32, 1_i32],
                    vec![1_i32, 2_i32, 7_i32, 8_i32, 9_i32],
                    vec![9_i32, 7_i32, 6_i32, 2_i32, 1_i32],
                    vec![1_i32, 3_i32, 2_i32, 4_i32, 5_i32],
                    vec![8_i32, 6_i32, 4_i32, 4_i32, 1_i32],
                    vec![1_i32, 3_i32, 6_i32, 7_i32, 9_i32],
                ]
                .into_iter()
                .map(Report)
                .collect(),
            )]
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
    fn test_safe_report_count() {
        for (index, safe_report_count) in [2_usize].into_iter().enumerate() {
            assert_eq!(solution(index).safe_report_count(), safe_report_count);
        }
    }

    #[test]
    fn test_dampened_safe_report_count() {
        for (index, dampened_safe_report_count) in [4_usize].into_iter().enumerate() {
            assert_eq!(
                solution(index).dampened_safe_report_count(),
                dampened_safe_report_count
            );
        }
    }
}
