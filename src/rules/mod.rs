//! Win conditions and game results.

pub mod result;

pub use result::{judge, GameResult};
