use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::*;

/// Legality predicate for one piece type: `(source, destination) -> legal`.
pub type MoveRule = fn(Coord, Coord) -> bool;

/// King: any adjacent square, diagonals included. A zero-distance "move"
/// onto its own square is accepted too.
pub fn king_rule(source: Coord, destination: Coord) -> bool {
    source.row_dist(destination) <= 1 && source.col_dist(destination) <= 1
}

/// Pawn: exactly one step toward higher rows, same column.
pub fn pawn_rule(source: Coord, destination: Coord) -> bool {
    source.col_dist(destination) == 0 && i64::from(destination.row) - i64::from(source.row) == 1
}

/// Mapping from piece type to its movement rule. Types without an entry
/// can never move.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: HashMap<PieceType, MoveRule>,
}

impl RuleBook {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let mut book = Self::empty();
        book.register(PieceType::King, king_rule);
        book.register(PieceType::Pawn, pawn_rule);
        book
    }

    /// Adds a rule, returning the one it replaced.
    pub fn register(&mut self, kind: PieceType, rule: MoveRule) -> Option<MoveRule> {
        self.rules.insert(kind, rule)
    }

    pub fn rule_for(&self, kind: PieceType) -> Option<MoveRule> {
        self.rules.get(&kind).copied()
    }

    pub fn is_movable(&self, kind: PieceType) -> bool {
        self.rules.contains_key(&kind)
    }
}

/// Stateless move resolver. Shared by hover previews and committed drops.
#[derive(Debug, Clone)]
pub struct Resolver {
    rules: RuleBook,
}

impl Resolver {
    pub fn new(rules: RuleBook) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleBook {
        &mut self.rules
    }

    /// Decide whether `moving` may go from `source` to `destination` and
    /// report whatever occupies the destination.
    ///
    /// The occupant is reported even when the move is illegal; callers must
    /// ignore `captured` unless `legal` is set. Piece types without a rule
    /// are never legal and never report a capture.
    pub fn resolve(&self, source: Coord, destination: Coord, moving: PieceType, pieces: &[Piece]) -> MoveResult {
        let Some(rule) = self.rules.rule_for(moving) else {
            return MoveResult::illegal();
        };

        let captured = pieces
            .iter()
            .find(|piece| piece.location == destination)
            .map(|piece| piece.kind);

        MoveResult {
            legal: rule(source, destination),
            captured,
        }
    }

    pub fn resolve_request(&self, request: &MoveRequest, pieces: &[Piece]) -> MoveResult {
        self.resolve(request.source, request.destination, request.moving, pieces)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(RuleBook::standard())
    }
}

/// Resolve against the standard king/pawn rules.
pub fn resolve(source: Coord, destination: Coord, moving: PieceType, pieces: &[Piece]) -> MoveResult {
    static STANDARD: OnceLock<Resolver> = OnceLock::new();
    STANDARD
        .get_or_init(Resolver::default)
        .resolve(source, destination, moving, pieces)
}
