use std::fmt;
use std::str::FromStr;

use crate::payload::PayloadError;

pub const BOARD_SIZE: i32 = 8;

/// A board cell as (row, column). Rows and columns are conventionally in
/// `0..8`, but nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn on_board(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn is_dark(&self) -> bool {
        (i64::from(self.row) + i64::from(self.col)).rem_euclid(2) == 1
    }

    pub fn row_dist(&self, other: Coord) -> u32 {
        self.row.abs_diff(other.row)
    }

    pub fn col_dist(&self, other: Coord) -> u32 {
        self.col.abs_diff(other.col)
    }

    /// Screen position to cell, row 0 at the top.
    pub fn from_screen(x: f32, y: f32, square_size: f32) -> Option<Self> {
        if x < 0.0 || y < 0.0 || square_size <= 0.0 {
            return None;
        }

        let coord = Self::new((y / square_size) as i32, (x / square_size) as i32);
        if coord.on_board() {
            Some(coord)
        } else {
            None
        }
    }

    /// All 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<&[i64]> for Coord {
    type Error = PayloadError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        match values {
            [row, col] => {
                let row = i32::try_from(*row).map_err(|_| PayloadError::NotACoord(values.to_vec()))?;
                let col = i32::try_from(*col).map_err(|_| PayloadError::NotACoord(values.to_vec()))?;
                Ok(Self::new(row, col))
            }
            _ => Err(PayloadError::NotACoord(values.to_vec())),
        }
    }
}

// Bishop, queen and rook are reserved: they render but have no movement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    Bishop,
    King,
    Pawn,
    Queen,
    Rook,
}

impl PieceType {
    pub const ALL: [PieceType; 5] = [
        PieceType::Bishop,
        PieceType::King,
        PieceType::Pawn,
        PieceType::Queen,
        PieceType::Rook,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PieceType::Bishop => "bishop",
            PieceType::King => "king",
            PieceType::Pawn => "pawn",
            PieceType::Queen => "queen",
            PieceType::Rook => "rook",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            PieceType::Bishop => "♗",
            PieceType::King => "♔",
            PieceType::Pawn => "♙",
            PieceType::Queen => "♕",
            PieceType::Rook => "♖",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceType {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceType::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PayloadError::UnknownPieceType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceType,
    pub location: Coord,
}

impl Piece {
    pub const fn new(kind: PieceType, location: Coord) -> Self {
        Self { kind, location }
    }
}

pub const STARTING_LAYOUT: [Piece; 2] = [
    Piece::new(PieceType::King, Coord::new(3, 2)),
    Piece::new(PieceType::Pawn, Coord::new(3, 4)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub source: Coord,
    pub destination: Coord,
    pub moving: PieceType,
}

impl MoveRequest {
    pub fn new(source: Coord, destination: Coord, moving: PieceType) -> Self {
        Self { source, destination, moving }
    }
}

/// Outcome of resolving a move. `captured` is whatever sits on the
/// destination and is only meaningful when `legal` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    pub legal: bool,
    pub captured: Option<PieceType>,
}

impl MoveResult {
    pub fn illegal() -> Self {
        Self::default()
    }
}

/// A committed move, as returned by `Board::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: PieceType,
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<PieceType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_guard() {
        assert_eq!(Coord::try_from(&[3i64, 4][..]).unwrap(), Coord::new(3, 4));
        assert!(Coord::try_from(&[3i64][..]).is_err());
        assert!(Coord::try_from(&[1i64, 2, 3][..]).is_err());
        assert!(Coord::try_from(&[i64::MAX, 0][..]).is_err());
        // Out-of-board values are still coordinates.
        assert_eq!(Coord::try_from(&[-1i64, 9][..]).unwrap(), Coord::new(-1, 9));
    }

    #[test]
    fn test_piece_type_guard() {
        for kind in PieceType::ALL {
            assert_eq!(kind.name().parse::<PieceType>().unwrap(), kind);
        }
        assert!("King".parse::<PieceType>().is_err());
        assert!("knight".parse::<PieceType>().is_err());
        assert!("".parse::<PieceType>().is_err());
    }

    #[test]
    fn test_square_shading() {
        assert!(!Coord::new(0, 0).is_dark());
        assert!(Coord::new(0, 1).is_dark());
        assert!(Coord::new(3, 4).is_dark());
        assert!(!Coord::new(7, 7).is_dark());
        assert_eq!(Coord::all().filter(Coord::is_dark).count(), 32);
        assert!(!Coord::new(i32::MAX, i32::MAX).is_dark());
        assert!(Coord::new(i32::MIN, i32::MAX).is_dark());
    }

    #[test]
    fn test_distance_at_extremes() {
        let low = Coord::new(i32::MIN, i32::MIN);
        let high = Coord::new(i32::MAX, i32::MAX);
        assert_eq!(low.row_dist(high), u32::MAX);
        assert_eq!(high.col_dist(low), u32::MAX);
        assert_eq!(Coord::new(3, 2).row_dist(Coord::new(5, 2)), 2);
    }

    #[test]
    fn test_from_screen() {
        assert_eq!(Coord::from_screen(10.0, 10.0, 50.0), Some(Coord::new(0, 0)));
        assert_eq!(Coord::from_screen(120.0, 360.0, 50.0), Some(Coord::new(7, 2)));
        assert_eq!(Coord::from_screen(400.0, 10.0, 50.0), None);
        assert_eq!(Coord::from_screen(-1.0, 10.0, 50.0), None);
    }
}
