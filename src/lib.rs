//! Converts a field of positive American odds into normalised win probabilities and draws a single
//! weighted winner, either reproducibly from a seed or from the clock.

pub mod data;
pub mod display;
pub mod error;
pub mod odds;
pub mod print;
pub mod probs;
pub mod reveal;
pub mod selector;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
