use crate::resolver::Resolver;
use crate::types::*;
// Declare submodules
pub mod state;

/// The live board: active pieces plus the log of eaten ones.
///
/// All mutation goes through `apply` and `reset`, so whoever owns the
/// `Board` is its only writer.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    eaten: Vec<PieceType>,
    layout: Vec<Piece>,
    resolver: Resolver,
}

impl Board {
    pub fn new() -> Self {
        Self::with_layout(STARTING_LAYOUT.to_vec())
    }

    pub fn with_layout(layout: Vec<Piece>) -> Self {
        Self::with_resolver(layout, Resolver::default())
    }

    pub fn with_resolver(layout: Vec<Piece>, resolver: Resolver) -> Self {
        Self {
            pieces: layout.clone(),
            eaten: Vec::new(),
            layout,
            resolver,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Captured piece types, oldest first.
    pub fn eaten(&self) -> &[PieceType] {
        &self.eaten
    }

    pub fn layout(&self) -> &[Piece] {
        &self.layout
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.location == coord)
    }

    /// Resolve a move against the current pieces without touching them.
    /// Used for hover feedback.
    pub fn preview(&self, source: Coord, destination: Coord, moving: PieceType) -> MoveResult {
        self.resolver.resolve(source, destination, moving, &self.pieces)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
