use {
    crate::*,
    glam::IVec2,
    std::char::TryFromCharError,
};

/* --- Day 4: Ceres Search ---

A letter grid word search. Part one counts `XMAS` starting at any cell in any of the eight
directions (diagonals and reversals included, since `SAMX` is just `XMAS` read the other way).
Part two counts X-shaped crossings: an `A` whose two diagonals each spell `MAS` or `SAM`. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid<u8>,
}

impl Solution {
    const WORD: &'static [u8] = b"XMAS";
    const DELTAS: [IVec2; 8_usize] = [
        IVec2::new(-1_i32, -1_i32),
        IVec2::new(0_i32, -1_i32),
        IVec2::new(1_i32, -1_i32),
        IVec2::new(-1_i32, 0_i32),
        IVec2::new(1_i32, 0_i32),
        IVec2::new(-1_i32, 1_i32),
        IVec2::new(0_i32, 1_i32),
        IVec2::new(1_i32, 1_i32),
    ];

    fn word_matches_at(&self, pos: IVec2, delta: IVec2) -> bool {
        Self::WORD[1_usize..]
            .iter()
            .enumerate()
            .all(|(offset, letter)| {
                self.grid.get(pos + delta * (offset as i32 + 1_i32)) == Some(letter)
            })
    }

    pub fn xmas_count(&self) -> usize {
        self.grid
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Self::WORD[0_usize])
            .map(|(index, _)| {
                let pos: IVec2 = self.grid.pos_from_index(index);

                Self::DELTAS
                    .iter()
                    .filter(|delta| self.word_matches_at(pos, **delta))
                    .count()
            })
            .sum()
    }

    fn is_mas_diagonal(&self, pos: IVec2, delta: IVec2) -> bool {
        matches!(
            (self.grid.get(pos - delta), self.grid.get(pos + delta)),
            (Some(&b'M'), Some(&b'S')) | (Some(&b'S'), Some(&b'M'))
        )
    }

    pub fn cross_mas_count(&self) -> usize {
        self.grid
            .cells()
            .iter()
            .enumerate()
            .filter(|(index, cell)| {
                **cell == b'A' && {
                    let pos: IVec2 = self.grid.pos_from_index(*index);

                    self.is_mas_diagonal(pos, IVec2::ONE)
                        && self.is_mas_diagonal(pos, IVec2::new(1_i32, -1_i32))
                }
            })
            .count()
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = GridParseError<'i, TryFromCharError>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self {
            grid: input.try_into()?,
        })
    }
}
