use {
    crate::*,
    bitvec::{array::BitArray, BitArr},
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt, verify},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::cmp::Ordering,
};

/* --- Day 5: Print Queue ---

Ordering rules `a|b` require page `a` to precede page `b` whenever both appear in an update. Part
one sums the middle pages of updates that already satisfy every applicable rule; part two reorders
the violating updates by the rules and sums their middle pages instead.

Page numbers are two digits, so the whole rule relation fits in a 100x100 bit array indexed by
`before * 100 + after`. */

const MAX_PAGE_COUNT: usize = 100_usize;

type RuleBitArray = BitArr!(for MAX_PAGE_COUNT * MAX_PAGE_COUNT, in u64);

fn parse_page<'i>(input: &'i str) -> IResult<&'i str, usize> {
    verify(parse_integer, |page: &usize| *page < MAX_PAGE_COUNT)(input)
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Update(Vec<usize>);

impl Update {
    fn is_correctly_ordered(&self, rules: &RuleBitArray) -> bool {
        self.0.iter().enumerate().all(|(index, page)| {
            self.0[..index]
                .iter()
                .all(|earlier_page| !rules[page * MAX_PAGE_COUNT + earlier_page])
        })
    }

    fn reordered(&self, rules: &RuleBitArray) -> Self {
        let mut pages: Vec<usize> = self.0.clone();

        pages.sort_by(|page_a, page_b| {
            if rules[page_a * MAX_PAGE_COUNT + page_b] {
                Ordering::Less
            } else if rules[page_b * MAX_PAGE_COUNT + page_a] {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });

        Self(pages)
    }

    fn middle_page(&self) -> usize {
        self.0[self.0.len() / 2_usize]
    }
}

impl Parse for Update {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(tag(","), parse_page), Self)(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    rules: RuleBitArray,
    updates: Vec<Update>,
}

impl Solution {
    pub fn correctly_ordered_middle_page_sum(&self) -> usize {
        self.updates
            .iter()
            .filter(|update| update.is_correctly_ordered(&self.rules))
            .map(Update::middle_page)
            .sum()
    }

    pub fn reordered_middle_page_sum(&self) -> usize {
        self.updates
            .iter()
            .filter(|update| !update.is_correctly_ordered(&self.rules))
            .map(|update| update.reordered(&self.rules).middle_page())
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let (input, rule_pairs): (&str, Vec<(usize, usize)>) = many0(terminated(
            separated_pair(parse_page, tag("|"), parse_page),
            line_ending,
        ))(input)?;
        let (input, _) = line_ending(input)?;
        let (input, updates): (&str, Vec<Update>) =
            many0(terminated(Update::parse, opt(line_ending)))(input)?;

        let mut rules: RuleBitArray = BitArray::ZERO;

        for (before, after) in rule_pairs {
            rules.set(before * MAX_PAGE_COUNT + after, true);
        }

        Ok((input, Self { rules, updates }))
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
        47|53\n\
        97|13\n\
        97|61\n\
        97|47\n\
        75|29\n\
        61|13\n\
        75|53\n\
        29|13\n\
        97|29\n\
        53|29\n\
        61|53\n\
        97|53\n\
        61|29\n\
        47|13\n\
        75|47\n\
        97|75\n\
        47|61\n\
        75|61\n\
        47|29\n\
        75|13\n\
        53|13\n\
        \n\
        75,47,61,53,29\n\
        97,61,53,29,13\n\
        75,29,13\n\
        75,97,47,61,53\n\
        61,13,29\n\
        97,13,75,29,47\n"];

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

        assert_eq!(solution.rules.count_ones(), 21_usize);
        assert!(solution.rules[47_usize * MAX_PAGE_COUNT + 53_usize]);
        assert!(!solution.rules[53_usize * MAX_PAGE_COUNT + 47_usize]);
        assert_eq!(solution.updates.len(), 6_usize);
        assert_eq!(
            solution.updates[2_usize],
            Update(vec![75_usize, 29_usize, 13_usize])
        );
    }

    #[test]
    fn test_is_correctly_ordered() {
        let solution: &Solution = solution(0_usize);

        assert_eq!(
            solution
                .updates
                .iter()
                .map(|update| update.is_correctly_ordered(&solution.rules))
                .collect::<Vec<bool>>(),
            vec![true, true, true, false, false, false]
        );
    }

    #[test]
    fn test_reordered() {
        let solution: &Solution = solution(0_usize);

        assert_eq!(
            solution.updates[3_usize].reordered(&solution.rules),
            Update(vec![97_usize, 75_usize, 47_usize, 61_usize, 53_usize])
        );
        assert_eq!(
            solution.updates[4_usize].reordered(&solution.rules),
            Update(vec![61_usize, 29_usize, 13_usize])
        );
        assert_eq!(
            solution.updates[5_usize].reordered(&solution.rules),
            Update(vec![97_usize, 75_usize, 47_usize, 29_usize, 13_usize])
        );
    }

    #[test]
    fn test_correctly_ordered_middle_page_sum() {
        for (index, middle_page_sum) in [143_usize].into_iter().enumerate() {
            assert_eq!(
                solution(index).correctly_ordered_middle_page_sum(),
                middle_page_sum
            );
        }
    }

    #[test]
    fn test_reordered_middle_page_sum() {
        for (index, middle_page_sum) in [123_usize].into_iter().enumerate() {
            assert_eq!(
                solution(index).reordered_middle_page_sum(),
                middle_page_sum
            );
        }
    }
}
