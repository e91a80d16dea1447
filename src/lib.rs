use {
    glam::IVec2,
    memmap::Mmap,
    nom::{
        bytes::complete::tag,
        character::complete::digit1,
        combinator::{map, map_res, opt},
        sequence::tuple,
        IResult,
    },
    num::Integer,
    static_assertions::const_assert,
    std::{
        fmt::{Debug, DebugList, Formatter, Result as FmtResult},
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        mem::transmute,
        str::{from_utf8, FromStr, Utf8Error},
    },
    strum::{EnumCount, EnumIter},
};

pub use {self::direction::*, clap::Parser};

pub mod d01;
pub mod d02;
pub mod d03;
pub mod d04;
pub mod d05;
pub mod d06;
pub mod d07;
pub mod d08;

/// Arguments for program execution
///
/// Each day binary passes its own day number when resolving the input file path, so the struct
/// itself doesn't need to know which binary it's running in.
#[derive(Parser)]
pub struct Args {
    /// Input file path, overriding the default day-specific path
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// Read the day's example input instead of the real input
    #[arg(short, long, default_value_t)]
    test: bool,
}

impl Args {
    /// Returns the input file path for a given day
    ///
    /// An explicitly provided path wins; otherwise this resolves to `inputs/<DD>/input.txt`, or
    /// `inputs/<DD>/test.txt` when `--test` was passed.
    pub fn input_file_path(&self, day: u8) -> String {
        if self.input_file_path.is_empty() {
            format!(
                "inputs/{day:02}/{}",
                if self.test { "test.txt" } else { "input.txt" }
            )
        } else {
            self.input_file_path.clone()
        }
    }
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes in a `&str` over the file to a
/// provided callback function
///
/// # Arguments
///
/// * `file_path` - A string slice file path to open as a read-only file
/// * `f` - A callback function to invoke on the contents of the file as a string slice
///
/// # Errors
///
/// This function returns a `Result::Err`-wrapped `std::io::Error` if an error has occurred.
/// Possible causes are:
///
/// * `std::fs::File::open` was unable to open a read-only file at `file_path`
/// * `memmap::Mmap::map` fails to create an `Mmap` instance for the opened file
/// * `std::str::from_utf8` determines the file is not in valid UTF-8 format
///
/// `f` is only executed *iff* an error is not encountered.
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function. There is no guarantee that an
/// external process won't modify the file after it is opened as read-only.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

/// A type parseable from a string slice by `nom` combinators
pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}

pub fn parse_integer<'i, I: FromStr + Integer>(input: &'i str) -> IResult<&'i str, I> {
    map(
        tuple((
            map(opt(tag("-")), |minus| {
                if minus.is_some() {
                    I::zero() - I::one()
                } else {
                    I::one()
                }
            }),
            map_res(digit1, I::from_str),
        )),
        |(sign, bound)| sign * bound,
    )(input)
}

mod direction {
    use super::*;

    macro_rules! define_direction {
        {
            $(#[$meta:meta])*
            $vis:vis enum $direction:ident {
                $( $variant:ident, )*
            }
        } => {
            $(#[$meta])*
            $vis enum $direction {
                $( $variant, )*
            }

            const VECS: [IVec2; $direction::COUNT] = [
                $( $direction::$variant.vec_internal(), )*
            ];
        };
    }

    define_direction! {
        #[derive(Copy, Clone, Debug, EnumCount, EnumIter, Eq, Hash, PartialEq)]
        #[repr(u8)]
        pub enum Direction {
            North,
            East,
            South,
            West,
        }
    }

    // This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2
    // bits, which is the same as masking by `U8_MASK`
    const_assert!(Direction::COUNT == 4_usize);

    impl Direction {
        const U8_MASK: u8 = Self::COUNT as u8 - 1_u8;

        #[inline]
        pub const fn vec(self) -> IVec2 {
            VECS[self as usize]
        }

        #[inline]
        pub const fn from_u8(value: u8) -> Self {
            // SAFETY: See `const_assert` above
            unsafe { transmute(value & Self::U8_MASK) }
        }

        /// The next direction clockwise, with `+y` pointing down the grid
        #[inline]
        pub const fn next(self) -> Self {
            Self::from_u8(self as u8 + 1_u8)
        }

        const fn vec_internal(self) -> IVec2 {
            match self {
                Self::North => IVec2::NEG_Y,
                Self::East => IVec2::X,
                Self::South => IVec2::Y,
                Self::West => IVec2::NEG_X,
            }
        }
    }

    impl From<Direction> for IVec2 {
        fn from(value: Direction) -> Self {
            value.vec()
        }
    }

    impl From<u8> for Direction {
        fn from(value: u8) -> Self {
            Self::from_u8(value)
        }
    }

    impl TryFrom<IVec2> for Direction {
        type Error = ();

        fn try_from(value: IVec2) -> Result<Self, Self::Error> {
            VECS.iter()
                .position(|vec| *vec == value)
                .map(|index| (index as u8).into())
                .ok_or(())
        }
    }
}

/// A dense rectangular grid of cells in row-major order
///
/// `dimensions` should only contain unsigned values, but is signed for ease of use when stepping
/// positions by `Direction` vectors.
#[derive(Clone)]
pub struct Grid<T> {
    cells: Vec<T>,
    dimensions: IVec2,
}

impl<T> Grid<T> {
    pub fn try_from_cells_and_width(cells: Vec<T>, width: usize) -> Option<Self> {
        let cells_len: usize = cells.len();

        if width == 0_usize || cells_len % width != 0_usize {
            None
        } else {
            Some(Self {
                cells,
                dimensions: IVec2::new(width as i32, (cells_len / width) as i32),
            })
        }
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.cmpge(IVec2::ZERO).all() && pos.cmplt(self.dimensions).all()
    }

    #[inline]
    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        pos.y as usize * self.dimensions.x as usize + pos.x as usize
    }

    pub fn try_index_from_pos(&self, pos: IVec2) -> Option<usize> {
        if self.contains(pos) {
            Some(self.index_from_pos(pos))
        } else {
            None
        }
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        let x: usize = self.dimensions.x as usize;

        IVec2::new((index % x) as i32, (index / x) as i32)
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &mut self.cells[index])
    }
}

impl<T: Debug> Debug for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Grid")?;
        let mut y_list: DebugList = f.debug_list();

        for y in 0_i32..self.dimensions.y {
            let start: usize = (y * self.dimensions.x) as usize;

            y_list.entry(&&self.cells[start..(start + self.dimensions.x as usize)]);
        }

        y_list.finish()
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions && self.cells == other.cells
    }
}

#[derive(Debug, PartialEq)]
pub enum GridParseError<'s, E> {
    NoInitialToken,
    IsNotAscii(&'s str),
    InvalidLength { line: &'s str, expected_len: usize },
    CellParseError(E),
}

impl<'s, E, T: TryFrom<char, Error = E>> TryFrom<&'s str> for Grid<T> {
    type Error = GridParseError<'s, E>;

    fn try_from(grid_str: &'s str) -> Result<Self, Self::Error> {
        use GridParseError as Error;

        let mut grid_line_iter = grid_str.lines().peekable();

        let width: usize = grid_line_iter.peek().ok_or(Error::NoInitialToken)?.len();

        let mut cells: Vec<T> = Vec::new();
        let mut height: usize = 0_usize;

        for grid_line_str in grid_line_iter {
            if !grid_line_str.is_ascii() {
                return Err(Error::IsNotAscii(grid_line_str));
            }

            if grid_line_str.len() != width {
                return Err(Error::InvalidLength {
                    line: grid_line_str,
                    expected_len: width,
                });
            }

            for cell_char in grid_line_str.chars() {
                cells.push(cell_char.try_into().map_err(Error::CellParseError)?);
            }

            height += 1_usize;
        }

        Ok(Self {
            cells,
            dimensions: IVec2::new(width as i32, height as i32),
        })
    }
}

/// Defines a cell enum with a `u8` representation per variant, convertible to and from the
/// character that marks it in puzzle input
#[macro_export]
macro_rules! define_cell {
    {
        #[repr(u8)]
        $(#[$attr:meta])*
        $vis:vis enum $cell:ident { $(
            $(#[$variant_attr:meta])*
            $variant:ident = $variant_const:ident = $variant_u8:expr
        ),* $(,)? }
    } => {
        #[repr(u8)]
        $(#[$attr])*
        $vis enum $cell { $(
            $(#[$variant_attr])*
            $variant = Self::$variant_const,
        )* }

        impl $cell {
            $(
                const $variant_const: u8 = $variant_u8;
            )*
        }

        impl TryFrom<u8> for $cell {
            type Error = ();

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(
                        Self::$variant_const => Ok(Self::$variant),
                    )*
                    _ => Err(()),
                }
            }
        }

        impl TryFrom<char> for $cell {
            type Error = ();

            fn try_from(value: char) -> Result<Self, Self::Error> {
                u8::try_from(value).map_err(|_| ())?.try_into()
            }
        }

        impl From<$cell> for char {
            fn from(value: $cell) -> Self {
                (value as u8) as char
            }
        }
    }
}
