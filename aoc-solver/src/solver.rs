//! The parse-once, solve-per-part contract every day implements

use crate::error::{ParseError, SolveError};

/// Turns a day's raw input into the data its parts share.
///
/// `SharedData` may borrow from the input, so a day can keep `&'a str`
/// slices instead of allocating:
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Calibration;
///
/// impl AocParser for Calibration {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         let lines: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
///         if lines.is_empty() {
///             return Err(ParseError::MissingData("no calibration lines".into()));
///         }
///         Ok(lines)
///     }
/// }
///
/// assert_eq!(Calibration::parse("1abc2\npqr3stu8vwx\n").unwrap().len(), 2);
/// ```
pub trait AocParser {
    /// Parsed input, plus whatever one part leaves behind for the next
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answer for part `N`, computed from the shared data.
///
/// Takes `&mut` so a part can cache intermediate work for later parts.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Races;
///
/// impl AocParser for Races {
///     type SharedData<'a> = Vec<(u64, u64)>;
///
///     fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(vec![(7, 9), (15, 40), (30, 200)])
///     }
/// }
///
/// impl PartSolver<1> for Races {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let ways = shared.iter().map(|&(time, record)| {
///             (0..=time).filter(|hold| hold * (time - hold) > record).count()
///         });
///         Ok(ways.product::<usize>().to_string())
///     }
/// }
///
/// let mut races = Races::parse("").unwrap();
/// assert_eq!(<Races as PartSolver<1>>::solve(&mut races).unwrap(), "288");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A day with a fixed number of parts, dispatched by part number.
///
/// `#[derive(AocSolver)]` writes this from the [`PartSolver`] impls. A manual
/// impl is only needed when the dispatch is unusual:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Sonar;
///
/// impl AocParser for Sonar {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(format!("not a number: {n}"))))
///             .collect()
///     }
/// }
///
/// impl Solver for Sonar {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         let window = match part {
///             1 => 1,
///             2 => 3,
///             _ => return Err(SolveError::PartNotImplemented(part)),
///         };
///         let rises = shared.windows(window + 1).filter(|w| w[window] > w[0]).count();
///         Ok(rises.to_string())
///     }
/// }
///
/// let mut depths = Sonar::parse("199 200 208 210 200 207 240 269 260 263").unwrap();
/// assert_eq!(Sonar::solve_part(&mut depths, 1).unwrap(), "7");
/// assert_eq!(Sonar::solve_part(&mut depths, 2).unwrap(), "5");
/// ```
pub trait Solver: AocParser {
    /// Parts are numbered `1..=PARTS`
    const PARTS: u8;

    /// Unknown part numbers yield [`SolveError::PartNotImplemented`]
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds checking layered over [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// Part 0 and parts above `PARTS` fail with [`SolveError::PartOutOfRange`]
    /// before the solver is called.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        match part {
            0 => Err(SolveError::PartOutOfRange(part)),
            p if p > Self::PARTS => Err(SolveError::PartOutOfRange(part)),
            p => Self::solve_part(shared, p),
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
