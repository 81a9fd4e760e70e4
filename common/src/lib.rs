pub mod engine;
pub mod logger;

pub use engine::tictactoe::*;
