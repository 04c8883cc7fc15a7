//! Look up which Pokémon can learn a move on Bulbapedia.
//!
//! The lookup runs in three stages joined by plain data: the move page is
//! fetched and its learnset extracted ([`learnset`]), names are rendered for
//! output ([`format`]), and the row is written to CSV ([`export`]).
//! [`lookup`] wires them together.

pub mod cli;
pub mod export;
pub mod fetch;
pub mod format;
pub mod learnset;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod ui;
pub mod utils;
