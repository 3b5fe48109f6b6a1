use crate::types::*;
use super::Board;

impl Board {
    /// Commit a move. Returns `None` and leaves the board untouched when
    /// there is no piece at the source or the move is illegal.
    pub fn apply(&mut self, request: MoveRequest) -> Option<AppliedMove> {
        let mover_index = self
            .pieces
            .iter()
            .position(|piece| piece.location == request.source)?;

        let result = self.resolver.resolve_request(&request, &self.pieces);
        if !result.legal {
            return None;
        }

        let mut moving = self.pieces.remove(mover_index);

        // A king's null move reports itself: the eaten log records it, but
        // the king stays on the board.
        let captured = result.captured.map(|reported| {
            self.pieces
                .iter()
                .position(|piece| piece.location == request.destination)
                .map_or(reported, |victim| self.pieces.remove(victim).kind)
        });
        if let Some(kind) = captured {
            self.eaten.push(kind);
        }

        let from = moving.location;
        moving.location = request.destination;
        self.pieces.insert(0, moving);

        Some(AppliedMove {
            piece: moving.kind,
            from,
            to: request.destination,
            captured,
        })
    }

    /// Back to the layout the board was created with, eaten log cleared.
    pub fn reset(&mut self) {
        self.pieces = self.layout.clone();
        self.eaten.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(pieces: &[Piece]) -> Vec<(i32, i32, PieceType)> {
        let mut out: Vec<_> = pieces
            .iter()
            .map(|piece| (piece.location.row, piece.location.col, piece.kind))
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_king_step_without_capture() {
        let mut board = Board::new();
        let applied = board
            .apply(MoveRequest::new(Coord::new(3, 2), Coord::new(4, 3), PieceType::King))
            .unwrap();

        assert_eq!(applied.captured, None);
        assert_eq!(applied.from, Coord::new(3, 2));
        assert_eq!(board.piece_at(Coord::new(4, 3)).map(|p| p.kind), Some(PieceType::King));
        assert!(board.piece_at(Coord::new(3, 2)).is_none());
        assert_eq!(board.pieces().len(), 2);
        assert!(board.eaten().is_empty());
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut board = Board::new();
        let before = board.pieces().to_vec();
        assert!(board
            .apply(MoveRequest::new(Coord::new(3, 2), Coord::new(5, 2), PieceType::King))
            .is_none());
        assert_eq!(board.pieces(), before.as_slice());
        assert!(board.eaten().is_empty());
    }

    #[test]
    fn test_pawn_eats_piece_in_front() {
        let mut board = Board::with_layout(vec![
            Piece::new(PieceType::Pawn, Coord::new(3, 4)),
            Piece::new(PieceType::King, Coord::new(4, 4)),
        ]);

        let applied = board
            .apply(MoveRequest::new(Coord::new(3, 4), Coord::new(4, 4), PieceType::Pawn))
            .unwrap();

        assert_eq!(applied.captured, Some(PieceType::King));
        assert_eq!(board.eaten(), &[PieceType::King]);
        assert_eq!(board.pieces(), &[Piece::new(PieceType::Pawn, Coord::new(4, 4))]);
    }

    #[test]
    fn test_missing_source_is_ignored() {
        let mut board = Board::with_layout(vec![
            Piece::new(PieceType::King, Coord::new(3, 2)),
            Piece::new(PieceType::Pawn, Coord::new(4, 3)),
        ]);
        let before = board.pieces().to_vec();

        // Legal king step onto the pawn, but nothing sits on the source.
        let applied = board.apply(MoveRequest::new(Coord::new(3, 3), Coord::new(4, 3), PieceType::King));

        assert!(applied.is_none());
        assert_eq!(board.pieces(), before.as_slice());
        assert!(board.eaten().is_empty());
    }

    #[test]
    fn test_king_null_move_keeps_king() {
        let mut board = Board::new();
        let applied = board
            .apply(MoveRequest::new(Coord::new(3, 2), Coord::new(3, 2), PieceType::King))
            .unwrap();

        assert_eq!(applied.captured, Some(PieceType::King));
        assert_eq!(applied.to, Coord::new(3, 2));
        assert_eq!(board.piece_at(Coord::new(3, 2)).map(|p| p.kind), Some(PieceType::King));
        assert_eq!(sorted(board.pieces()), sorted(&STARTING_LAYOUT));
        assert_eq!(board.eaten(), &[PieceType::King]);

        // Repeating it keeps logging, and reset clears the log.
        board.apply(MoveRequest::new(Coord::new(3, 2), Coord::new(3, 2), PieceType::King));
        assert_eq!(board.eaten(), &[PieceType::King, PieceType::King]);
        assert_eq!(board.pieces().len(), 2);
        board.reset();
        assert!(board.eaten().is_empty());
    }

    #[test]
    fn test_eaten_log_is_chronological() {
        let mut board = Board::with_layout(vec![
            Piece::new(PieceType::King, Coord::new(0, 0)),
            Piece::new(PieceType::Rook, Coord::new(1, 1)),
            Piece::new(PieceType::Pawn, Coord::new(2, 2)),
        ]);

        board
            .apply(MoveRequest::new(Coord::new(0, 0), Coord::new(1, 1), PieceType::King))
            .unwrap();
        board
            .apply(MoveRequest::new(Coord::new(1, 1), Coord::new(2, 2), PieceType::King))
            .unwrap();

        assert_eq!(board.eaten(), &[PieceType::Rook, PieceType::Pawn]);
        assert_eq!(board.pieces(), &[Piece::new(PieceType::King, Coord::new(2, 2))]);
    }

    #[test]
    fn test_moved_piece_keeps_recorded_type() {
        let mut board = Board::new();
        // Payload claims a king, but the record at (3, 4) is a pawn.
        let applied = board
            .apply(MoveRequest::new(Coord::new(3, 4), Coord::new(2, 5), PieceType::King))
            .unwrap();

        assert_eq!(applied.piece, PieceType::Pawn);
        assert_eq!(board.piece_at(Coord::new(2, 5)).map(|p| p.kind), Some(PieceType::Pawn));
    }

    #[test]
    fn test_reset_restores_layout() {
        let mut board = Board::new();
        let moves = [
            MoveRequest::new(Coord::new(3, 2), Coord::new(3, 3), PieceType::King),
            MoveRequest::new(Coord::new(3, 3), Coord::new(3, 4), PieceType::King),
            MoveRequest::new(Coord::new(3, 4), Coord::new(4, 5), PieceType::King),
            MoveRequest::new(Coord::new(0, 0), Coord::new(1, 0), PieceType::Pawn),
        ];
        for request in moves {
            board.apply(request);
        }
        assert_eq!(board.eaten(), &[PieceType::Pawn]);

        board.reset();

        assert_eq!(board.pieces(), &STARTING_LAYOUT);
        assert!(board.eaten().is_empty());
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let board = Board::new();
        let result = board.preview(Coord::new(3, 2), Coord::new(3, 3), PieceType::King);
        assert!(result.legal);

        let result = board.preview(Coord::new(3, 3), Coord::new(3, 4), PieceType::King);
        assert_eq!(result, MoveResult { legal: true, captured: Some(PieceType::Pawn) });
        assert_eq!(board.pieces(), &STARTING_LAYOUT);
    }

    #[test]
    fn test_board_with_extra_rule() {
        fn rook_rule(source: Coord, destination: Coord) -> bool {
            (source.row == destination.row) != (source.col == destination.col)
        }

        let mut resolver = crate::resolver::Resolver::default();
        resolver.rules_mut().register(PieceType::Rook, rook_rule);
        let mut board = Board::with_resolver(
            vec![
                Piece::new(PieceType::Rook, Coord::new(0, 0)),
                Piece::new(PieceType::Pawn, Coord::new(0, 7)),
            ],
            resolver,
        );

        let applied = board
            .apply(MoveRequest::new(Coord::new(0, 0), Coord::new(0, 7), PieceType::Rook))
            .unwrap();
        assert_eq!(applied.captured, Some(PieceType::Pawn));
        assert!(board.resolver().rules().is_movable(PieceType::Rook));

        board.reset();
        assert_eq!(board.pieces(), board.layout());
    }
}
