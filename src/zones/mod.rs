//! Card stacks and how intents address them.
//!
//! ## Key Types
//!
//! - `CardStack`: bounded LIFO container with overflow/underflow errors
//! - `StackKind`: center, side, own or opponent
//! - `StackTarget`: a kind plus a zero-based index

pub mod stack;
pub mod target;

pub use stack::CardStack;
pub use target::{StackKind, StackTarget};
