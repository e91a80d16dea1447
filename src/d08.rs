use {
    crate::*,
    glam::IVec2,
    std::{
        char::TryFromCharError,
        collections::{HashMap, HashSet},
    },
};

/* --- Day 8: Resonant Collinearity ---

Antennas share a frequency when they share a grid character. Part one: each same-frequency pair
projects two antinodes, one past each antenna at double the pair's separation; count the distinct
in-bounds antinodes. Part two: resonant harmonics put an antinode at every in-bounds grid position
along the pair's line at whole multiples of the separation, the antennas themselves included. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    grid: Grid<u8>,
}

impl Solution {
    const EMPTY: u8 = b'.';

    fn antennas_by_frequency(&self) -> HashMap<u8, Vec<IVec2>> {
        let mut antennas_by_frequency: HashMap<u8, Vec<IVec2>> = HashMap::new();

        for (index, &cell) in self.grid.cells().iter().enumerate() {
            if cell != Self::EMPTY {
                antennas_by_frequency
                    .entry(cell)
                    .or_default()
                    .push(self.grid.pos_from_index(index));
            }
        }

        antennas_by_frequency
    }

    fn for_each_antenna_pair<F: FnMut(IVec2, IVec2)>(&self, mut f: F) {
        for positions in self.antennas_by_frequency().values() {
            for (index, &antenna_a) in positions.iter().enumerate() {
                for &antenna_b in &positions[index + 1_usize..] {
                    f(antenna_a, antenna_b);
                }
            }
        }
    }

    pub fn antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        self.for_each_antenna_pair(|antenna_a, antenna_b| {
            for antinode in [
                antenna_a * 2_i32 - antenna_b,
                antenna_b * 2_i32 - antenna_a,
            ] {
                if self.grid.contains(antinode) {
                    antinodes.insert(antinode);
                }
            }
        });

        antinodes.len()
    }

    pub fn harmonic_antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        self.for_each_antenna_pair(|antenna_a, antenna_b| {
            let delta: IVec2 = antenna_b - antenna_a;

            for step in [delta, -delta] {
                let mut pos: IVec2 = antenna_a;

                while self.grid.contains(pos) {
                    antinodes.insert(pos);
                    pos += step;
                }
            }
        });

        antinodes.len()
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

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &["\
        ............\n\
        ........0...\n\
        .....0......\n\
        .......0....\n\
        ....0.......\n\
        ......A.....\n\
        ............\n\
        ............\n\
        ........A...\n\
        .........A..\n\
        ............\n\
        ............\n"];

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
    fn test_antennas_by_frequency() {
        let antennas_by_frequency: HashMap<u8, Vec<IVec2>> =
            solution(0_usize).antennas_by_frequency();

        assert_eq!(antennas_by_frequency.len(), 2_usize);
        assert_eq!(antennas_by_frequency[&b'0'].len(), 4_usize);
        assert_eq!(antennas_by_frequency[&b'A'].len(), 3_usize);
    }

    #[test]
    fn test_antinode_count() {
        for (index, antinode_count) in [14_usize].into_iter().enumerate() {
            assert_eq!(solution(index).antinode_count(), antinode_count);
        }
    }

    #[test]
    fn test_harmonic_antinode_count() {
        for (index, antinode_count) in [34_usize].into_iter().enumerate() {
            assert_eq!(solution(index).harmonic_antinode_count(), antinode_count);
        }
    }
}
