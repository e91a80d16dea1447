use {
    crate::*,
    glam::IVec2,
    std::collections::HashSet,
};

/* --- Day 6: Guard Gallivant ---

A guard patrols a rectangular grid, starting at `^` facing up. Blocked steps rotate her 90 degrees
clockwise in place; open steps advance one cell; stepping past the boundary ends the patrol. Part
one counts the distinct cells visited before she leaves. Part two counts the cells where a single
new obstruction would trap her in a loop instead.

A loop is a revisit of any (position, heading) agent state seen earlier in the same walk, not just
the starting state: loops need not pass back through the start cell. The state space is finite
(width x height x 4), so every walk either exits or revisits a state within that many steps. */

define_cell! {
    #[repr(u8)]
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, PartialEq)]
    enum Cell {
        Empty = EMPTY = b'.',
        Obstacle = OBSTACLE = b'#',
        Start = START = b'^',
    }
}

/// The full agent state: where the guard is and which way she faces
///
/// Equal states always produce equal futures, which is what makes loop detection a set-membership
/// question.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
struct AgentState {
    pos: IVec2,
    heading: Direction,
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq)]
enum WalkStatus {
    Exited,
    Looping,
}

#[cfg_attr(test, derive(Debug))]
struct Walk {
    visited_positions: HashSet<IVec2>,
    status: WalkStatus,
}

/// Runs a patrol to completion from `start`
///
/// Advances one cell at a time along the current heading, rotating clockwise in place when the
/// next cell is an obstacle. Terminates when the next step would leave the grid (`Exited`) or when
/// an agent state repeats within this walk (`Looping`). Iterative on purpose: a long unobstructed
/// corridor is just more loop iterations, not more stack frames.
fn walk(grid: &Grid<Cell>, start: AgentState) -> Walk {
    let mut state: AgentState = start;
    let mut seen_states: HashSet<AgentState> = HashSet::new();
    let mut visited_positions: HashSet<IVec2> = HashSet::new();

    seen_states.insert(state);
    visited_positions.insert(state.pos);

    loop {
        let next_pos: IVec2 = state.pos + state.heading.vec();

        match grid.get(next_pos) {
            None => {
                return Walk {
                    visited_positions,
                    status: WalkStatus::Exited,
                }
            }
            Some(Cell::Obstacle) => state.heading = state.heading.next(),
            Some(_) => {
                state.pos = next_pos;
                visited_positions.insert(next_pos);
            }
        }

        if !seen_states.insert(state) {
            return Walk {
                visited_positions,
                status: WalkStatus::Looping,
            };
        }
    }
}

fn results_in_loop(grid: &Grid<Cell>, start: AgentState) -> bool {
    walk(grid, start).status == WalkStatus::Looping
}

/// Scoped placement of a hypothetical obstacle
///
/// Restores the previous terrain when dropped, so no probe can leak its mutation into the next
/// candidate's walk regardless of how the probing scope exits.
struct ObstacleProbe<'g> {
    grid: &'g mut Grid<Cell>,
    pos: IVec2,
    prev: Cell,
}

impl<'g> ObstacleProbe<'g> {
    fn new(grid: &'g mut Grid<Cell>, pos: IVec2) -> Self {
        let cell: &mut Cell = grid.get_mut(pos).unwrap();
        let prev: Cell = *cell;

        *cell = Cell::Obstacle;

        Self { grid, pos, prev }
    }

    fn grid(&self) -> &Grid<Cell> {
        self.grid
    }
}

impl Drop for ObstacleProbe<'_> {
    fn drop(&mut self) {
        *self.grid.get_mut(self.pos).unwrap() = self.prev;
    }
}

#[derive(Debug, PartialEq)]
pub enum ParseSolutionError<'s> {
    Grid(GridParseError<'s, ()>),
    NoStartCell,
    MultipleStartCells,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone)]
pub struct Solution {
    grid: Grid<Cell>,
    start: AgentState,
}

impl Solution {
    fn walk_from_start(&self) -> Walk {
        walk(&self.grid, self.start)
    }

    pub fn distinct_visited_position_count(&self) -> usize {
        self.walk_from_start().visited_positions.len()
    }

    /// Counts the cells whose obstruction would trap the guard in a loop
    ///
    /// Only cells on the unobstructed path can alter the walk (the guard never reaches any other
    /// cell), so only those are probed, minus the start cell where the guard is standing. Every
    /// probe walks from the true global start.
    pub fn loop_inducing_obstacle_count(&mut self) -> usize {
        let start: AgentState = self.start;

        self.walk_from_start()
            .visited_positions
            .into_iter()
            .filter(|&pos| {
                pos != start.pos && {
                    let probe: ObstacleProbe = ObstacleProbe::new(&mut self.grid, pos);

                    results_in_loop(probe.grid(), start)
                }
            })
            .count()
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = ParseSolutionError<'i>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        use ParseSolutionError as Error;

        let grid: Grid<Cell> = input.try_into().map_err(Error::Grid)?;

        let mut start_pos: Option<IVec2> = None;

        for (index, cell) in grid.cells().iter().enumerate() {
            if *cell == Cell::Start
                && start_pos.replace(grid.pos_from_index(index)).is_some()
            {
                return Err(Error::MultipleStartCells);
            }
        }

        let pos: IVec2 = start_pos.ok_or(Error::NoStartCell)?;

        Ok(Self {
            grid,
            start: AgentState {
                pos,
                heading: Direction::North,
            },
        })
    }
}
