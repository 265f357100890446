//! Track styles with their own paint function sets

pub mod compact_inverted;
pub mod ghost_train;
