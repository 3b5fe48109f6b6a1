use crate::types::*;

/// Per-square drop feedback while a piece is dragged over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    ValidMove,
    InvalidMove,
}

impl HoverState {
    pub fn drag_enter(&mut self, result: MoveResult) {
        *self = if result.legal {
            HoverState::ValidMove
        } else {
            HoverState::InvalidMove
        };
    }

    pub fn drag_leave(&mut self) {
        *self = HoverState::Idle;
    }

    pub fn drop(&mut self) {
        *self = HoverState::Idle;
    }
}

/// Tracks the one square under the dragged piece, firing leave/enter as
/// the pointer crosses from square to square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SquareHover {
    square: Option<Coord>,
    state: HoverState,
}

impl SquareHover {
    pub fn square(&self) -> Option<Coord> {
        self.square
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// State of `coord`; every square but the hovered one is idle.
    pub fn state_of(&self, coord: Coord) -> HoverState {
        match self.square {
            Some(square) if square == coord => self.state,
            _ => HoverState::Idle,
        }
    }

    /// Move the pointer to `target`. `resolve` is only called on entering a
    /// new square. Returns true when the hovered square changed.
    pub fn hover(&mut self, target: Option<Coord>, resolve: impl FnOnce(Coord) -> MoveResult) -> bool {
        if target == self.square {
            return false;
        }

        self.state.drag_leave();
        self.square = target;
        if let Some(square) = target {
            self.state.drag_enter(resolve(square));
        }
        true
    }

    pub fn drop(&mut self) {
        self.state.drop();
        self.square = None;
    }
}
