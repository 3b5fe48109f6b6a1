pub mod board;
pub mod hover;
pub mod logger;
pub mod payload;
pub mod resolver;
pub mod types;

pub use board::*;
pub use hover::*;
pub use logger::{BoardLogger, IgnoredDrop, LogError};
pub use payload::*;
pub use resolver::*;
pub use types::*;
