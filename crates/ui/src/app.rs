use egui::{Color32, Pos2, Rect, Sense, Vec2};
use engine::{AppliedMove, Board, BoardLogger, Coord, DragPayload, DropEvent, HoverState, IgnoredDrop, Piece, RawDragPayload, SquareHover};

use crate::config::{AppConfig, SquareColors};

const EATEN_STRIP_HEIGHT: f32 = 110.0;

pub struct BoardApp {
    board: Board,
    hover: SquareHover,
    logger: BoardLogger,
    config: AppConfig,
    // Untyped, like any drag channel; checked on every read.
    drag_payload: Option<RawDragPayload>,
    log_saved: bool,
}

impl BoardApp {
    pub fn new(config: AppConfig) -> Self {
        let mut logger = BoardLogger::new();
        if config.advanced_logging {
            logger.enable_advanced_logging();
        }

        Self {
            board: Board::new(),
            hover: SquareHover::default(),
            logger,
            config,
            drag_payload: None,
            log_saved: false,
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chessboard");

            let available_size = ui.available_size();
            let board_size = available_size.x.min(available_size.y - EATEN_STRIP_HEIGHT).max(160.0) - 20.0;
            let square_size = board_size / 8.0;

            let board_rect = Rect::from_min_size(ui.cursor().min, Vec2::splat(board_size));
            let response = ui.allocate_rect(board_rect, Sense::drag());

            let to_square = |pos: Pos2| square_at(board_rect, square_size, pos);

            if response.drag_started() {
                let origin = ctx.input(|i| i.pointer.press_origin()).and_then(to_square);
                self.start_drag(origin);
            }

            let pointer = ctx.input(|i| i.pointer.latest_pos());
            let target = pointer.and_then(to_square);

            if self.drag_payload.is_some() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.cancel_drag();
            } else if response.drag_stopped() {
                self.finish_drag(target);
            } else if response.dragged() {
                self.update_hover(target);
            }

            let dragged = self.current_payload();
            if dragged.is_some() {
                ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            }
            self.draw_board(ui, board_rect, square_size, dragged);
            if let (Some(payload), Some(pos)) = (dragged, pointer) {
                draw_dragged_piece(ctx, payload, pos, square_size);
            }

            ui.add_space(12.0);
            self.draw_eaten(ui);
        });

        if self.config.save_log_on_exit && ctx.input(|i| i.viewport().close_requested()) {
            self.save_log("window closed");
        }
    }
}

impl BoardApp {
    fn start_drag(&mut self, origin: Option<Coord>) {
        self.drag_payload = None;
        let Some(piece) = origin.and_then(|coord| self.board.piece_at(coord)).copied() else {
            return;
        };

        let payload = DragPayload::from_piece(&piece);
        self.logger.log_drag_start(&payload);
        self.drag_payload = Some(RawDragPayload::from(payload));
    }

    fn current_payload(&self) -> Option<DragPayload> {
        let raw = self.drag_payload.clone()?;
        DragPayload::try_from(raw).ok()
    }

    fn update_hover(&mut self, target: Option<Coord>) {
        let Some(payload) = self.current_payload() else {
            return;
        };

        let board = &self.board;
        let mut entered = None;
        self.hover.hover(target, |to| {
            let result = board.preview(payload.location, to, payload.piece_type);
            entered = Some((to, result));
            result
        });

        if let Some((to, result)) = entered {
            self.logger.log_hover(&payload, to, result);
        }
    }

    fn cancel_drag(&mut self) {
        self.hover.drop();
        self.drag_payload = None;
        self.logger.log("drag cancelled");
    }

    fn finish_drag(&mut self, target: Option<Coord>) {
        self.hover.drop();

        let payload = match self.drag_payload.take() {
            Some(raw) => match DragPayload::try_from(raw) {
                Ok(payload) => Some(payload),
                Err(error) => {
                    self.logger.log_payload_error(&error);
                    return;
                }
            },
            None => None,
        };

        self.commit_drop(DropEvent::new(payload, target));
    }

    /// Apply a finished drag to the board. Anything that cannot be applied
    /// is logged and dropped.
    fn commit_drop(&mut self, event: DropEvent) -> Option<AppliedMove> {
        if event.payload.is_none() {
            self.logger.log_ignored_drop(None, IgnoredDrop::NoPayload);
            return None;
        }
        let Some(request) = event.into_request() else {
            self.logger.log_ignored_drop(None, IgnoredDrop::OutsideBoard);
            return None;
        };

        if self.board.piece_at(request.source).is_none() {
            self.logger.log_ignored_drop(Some(&request), IgnoredDrop::NoPieceAtSource);
            return None;
        }

        match self.board.apply(request) {
            Some(applied) => {
                self.logger.log_move(&applied);
                Some(applied)
            }
            None => {
                self.logger.log_ignored_drop(Some(&request), IgnoredDrop::Illegal);
                None
            }
        }
    }

    fn reset_board(&mut self) {
        self.logger.log_reset(self.board.eaten());
        self.board.reset();
        self.hover = SquareHover::default();
    }

    fn save_log(&mut self, reason: &str) {
        if self.log_saved {
            return;
        }
        self.log_saved = true;

        match self.logger.save_to_file(&self.config.log_dir, reason) {
            Ok(path) => println!("Session log saved to {}", path.display()),
            Err(e) => eprintln!("Could not save session log: {}", e),
        }
    }

    fn draw_board(&self, ui: &egui::Ui, board_rect: Rect, square_size: f32, dragged: Option<DragPayload>) {
        let painter = ui.painter();

        for coord in Coord::all() {
            let square_rect = square_rect(board_rect, square_size, coord);
            let color = square_color(self.hover.state_of(coord), coord.is_dark(), &self.config.colors);
            painter.rect_filled(square_rect, 0.0, color);

            if let Some(piece) = self.board.piece_at(coord) {
                let is_dragged = dragged.is_some_and(|payload| payload.location == coord);
                let opacity = if is_dragged { self.config.dragged_opacity } else { 1.0 };
                draw_piece(painter, piece, square_rect, opacity);
            }
        }

        painter.rect_stroke(board_rect, 0.0, egui::Stroke::new(3.0, self.config.colors.dark));
    }

    fn draw_eaten(&mut self, ui: &mut egui::Ui) {
        ui.label("eaten pieces");
        ui.horizontal(|ui| {
            if self.board.eaten().is_empty() {
                ui.weak("none");
            }
            for kind in self.board.eaten() {
                ui.label(egui::RichText::new(kind.glyph()).size(28.0))
                    .on_hover_text(kind.name());
            }
        });

        if ui.button("refresh board").clicked() {
            self.reset_board();
        }
    }
}

fn square_at(board_rect: Rect, square_size: f32, pos: Pos2) -> Option<Coord> {
    if !board_rect.contains(pos) {
        return None;
    }
    let relative = pos - board_rect.min;
    Coord::from_screen(relative.x, relative.y, square_size)
}

// Row 0 is drawn at the top.
fn square_rect(board_rect: Rect, square_size: f32, coord: Coord) -> Rect {
    Rect::from_min_size(
        board_rect.min + Vec2::new(coord.col as f32 * square_size, coord.row as f32 * square_size),
        Vec2::splat(square_size),
    )
}

fn square_color(state: HoverState, is_dark: bool, colors: &SquareColors) -> Color32 {
    match state {
        HoverState::ValidMove => colors.valid_move,
        HoverState::InvalidMove => colors.invalid_move,
        HoverState::Idle if is_dark => colors.dark,
        HoverState::Idle => colors.light,
    }
}

fn draw_piece(painter: &egui::Painter, piece: &Piece, square_rect: Rect, opacity: f32) {
    painter.text(
        square_rect.center(),
        egui::Align2::CENTER_CENTER,
        piece.kind.glyph(),
        egui::FontId::proportional(square_rect.width() * 0.75),
        Color32::BLACK.gamma_multiply(opacity),
    );
}

fn draw_dragged_piece(ctx: &egui::Context, payload: DragPayload, pos: Pos2, square_size: f32) {
    let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Tooltip, egui::Id::new("dragged_piece")));
    painter.text(
        pos,
        egui::Align2::CENTER_CENTER,
        payload.piece_type.glyph(),
        egui::FontId::proportional(square_size * 0.75),
        Color32::BLACK,
    );
}
