mod board;
mod catalog;
mod color;
mod r#move;
mod pieces;
mod point;
mod shape;
mod state;
mod status;

pub mod rules;

pub use board::*;
pub use catalog::*;
pub use color::*;
pub use pieces::*;
pub use point::*;
pub use r#move::*;
pub use shape::*;
pub use state::*;
pub use status::*;
