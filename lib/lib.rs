/// Game domain types and rules.
pub mod game;
