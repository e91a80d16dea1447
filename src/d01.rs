use {
    crate::*,
    nom::{
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
};

/* --- Day 1: Historian Hysteria ---

Two columns of location IDs, one pair per line. Part one pairs up the sorted columns and sums the
pairwise distances; part two scores each left ID by how often it appears in the right column. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct LocationIdPair {
    left: i32,
    right: i32,
}

impl Parse for LocationIdPair {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(parse_integer, space1, parse_integer),
            |(left, right)| Self { left, right },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<LocationIdPair>);

impl Solution {
    fn sorted_columns(&self) -> (Vec<i32>, Vec<i32>) {
        let mut left: Vec<i32> = self.0.iter().map(|pair| pair.left).collect();
        let mut right: Vec<i32> = self.0.iter().map(|pair| pair.right).collect();

        left.sort_unstable();
        right.sort_unstable();

        (left, right)
    }

    pub fn total_distance(&self) -> i32 {
        let (left, right): (Vec<i32>, Vec<i32>) = self.sorted_columns();

        left.into_iter()
            .zip(right)
            .map(|(left, right)| (left - right).abs())
            .sum()
    }

    pub fn similarity_score(&self) -> i32 {
        self.0
            .iter()
            .map(|pair| {
                pair.left
                    * self
                        .0
                        .iter()
                        .filter(|other_pair| other_pair.right == pair.left)
                        .count() as i32
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(LocationIdPair::parse, opt(line_ending))),
            Self,
        )(input)
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
