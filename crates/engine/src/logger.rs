use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::payload::{DragPayload, PayloadError};
use crate::types::*;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to create log directory {}: {source}", dir.display())]
    CreateDir { dir: PathBuf, source: io::Error },

    #[error("failed to write log file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Why a drop did not change the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredDrop {
    OutsideBoard,
    NoPayload,
    NoPieceAtSource,
    Illegal,
}

impl IgnoredDrop {
    fn describe(&self) -> &'static str {
        match self {
            IgnoredDrop::OutsideBoard => "dropped outside the board",
            IgnoredDrop::NoPayload => "no piece was being dragged",
            IgnoredDrop::NoPieceAtSource => "no piece at source",
            IgnoredDrop::Illegal => "illegal move",
        }
    }
}

/// In-memory session log, written out on demand.
#[derive(Debug)]
pub struct BoardLogger {
    pub log_buffer: String,
    pub advanced_logging: bool,
    session_start: Instant,
    move_count: u32,
}

impl BoardLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: false,
            session_start: Instant::now(),
            move_count: 0,
        };

        logger.log("=== Board Session Log Started ===");
        logger.log(&format!("Date: {}", chrono::Local::now().format("%m/%d/%Y %H:%M:%S")));
        logger
    }

    pub fn should_log_advanced(&self) -> bool {
        self.advanced_logging
    }

    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("Advanced logging enabled - hover previews recorded");
    }

    pub fn log(&mut self, message: &str) {
        let elapsed = self.session_start.elapsed().as_millis();
        self.log_buffer.push_str(&format!("[{:>7}ms] {}\n", elapsed, message));
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn log_drag_start(&mut self, payload: &DragPayload) {
        self.log(&format!("drag {} from {}", payload.piece_type, payload.location));
    }

    pub fn log_hover(&mut self, payload: &DragPayload, target: Coord, result: MoveResult) {
        if self.should_log_advanced() {
            let verdict = if result.legal { "valid" } else { "invalid" };
            self.log(&format!(
                "  hover {} {} -> {}: {}",
                payload.piece_type, payload.location, target, verdict
            ));
        }
    }

    pub fn log_move(&mut self, applied: &AppliedMove) {
        self.move_count += 1;
        match applied.captured {
            Some(eaten) => self.log(&format!(
                "{}. {} {} -> {} eats {}",
                self.move_count, applied.piece, applied.from, applied.to, eaten
            )),
            None => self.log(&format!(
                "{}. {} {} -> {}",
                self.move_count, applied.piece, applied.from, applied.to
            )),
        }
    }

    pub fn log_ignored_drop(&mut self, request: Option<&MoveRequest>, reason: IgnoredDrop) {
        match request {
            Some(request) => self.log(&format!(
                "ignored drop {} {} -> {}: {}",
                request.moving,
                request.source,
                request.destination,
                reason.describe()
            )),
            None => self.log(&format!("ignored drop: {}", reason.describe())),
        }
    }

    pub fn log_payload_error(&mut self, error: &PayloadError) {
        self.log(&format!("rejected drag payload: {}", error));
    }

    pub fn log_reset(&mut self, eaten: &[PieceType]) {
        self.log(&format!(
            "board reset after {} move(s), {} piece(s) eaten",
            self.move_count,
            eaten.len()
        ));
        self.move_count = 0;
    }

    /// Write the buffer to `<dir>/<timestamp>.txt` and return the path.
    pub fn save_to_file(&mut self, dir: &Path, reason: &str) -> Result<PathBuf, LogError> {
        fs::create_dir_all(dir).map_err(|source| LogError::CreateDir {
            dir: dir.to_path_buf(),
            source,
        })?;

        let now = chrono::Local::now();
        let path = dir.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));

        self.log(&format!("Session ended: {} - saving log", reason));

        File::create(&path)
            .and_then(|mut file| file.write_all(self.log_buffer.as_bytes()))
            .map_err(|source| LogError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}

impl Default for BoardLogger {
    fn default() -> Self {
        Self::new()
    }
}
