//! Drag payloads exchanged between pieces (drag sources) and squares
//! (drop targets).
//!
//! A payload arrives typed when it was produced by this crate, or raw when it
//! went through an untyped channel. Raw payloads are checked with the same
//! guards before anything touches the board.

use thiserror::Error;

use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("not a coordinate: {0:?}")]
    NotACoord(Vec<i64>),

    #[error("unknown piece type: {0:?}")]
    UnknownPieceType(String),
}

/// What a piece advertises while it is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub location: Coord,
    pub piece_type: PieceType,
}

impl DragPayload {
    pub fn new(location: Coord, piece_type: PieceType) -> Self {
        Self { location, piece_type }
    }

    pub fn from_piece(piece: &Piece) -> Self {
        Self::new(piece.location, piece.kind)
    }

    pub fn request_to(&self, destination: Coord) -> MoveRequest {
        MoveRequest::new(self.location, destination, self.piece_type)
    }
}

/// Untyped payload, as read from a generic key/value drag channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDragPayload {
    pub location: Vec<i64>,
    pub piece_type: String,
}

impl TryFrom<RawDragPayload> for DragPayload {
    type Error = PayloadError;

    fn try_from(raw: RawDragPayload) -> Result<Self, Self::Error> {
        let location = Coord::try_from(raw.location.as_slice())?;
        let piece_type = raw.piece_type.parse()?;
        Ok(Self::new(location, piece_type))
    }
}

impl From<DragPayload> for RawDragPayload {
    fn from(payload: DragPayload) -> Self {
        Self {
            location: vec![payload.location.row.into(), payload.location.col.into()],
            piece_type: payload.piece_type.name().to_string(),
        }
    }
}

/// A finished drag. Either half may be missing: the payload when the drag
/// did not start on a piece, the target when the pointer was released
/// outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropEvent {
    pub payload: Option<DragPayload>,
    pub target: Option<Coord>,
}

impl DropEvent {
    pub fn new(payload: Option<DragPayload>, target: Option<Coord>) -> Self {
        Self { payload, target }
    }

    pub fn into_request(self) -> Option<MoveRequest> {
        let payload = self.payload?;
        let target = self.target?;
        Some(payload.request_to(target))
    }
}
