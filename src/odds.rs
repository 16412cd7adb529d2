//! Conversion of positive-format American odds into a normalised [Distribution] of win probabilities.
//!
//! Odds of `o` (quoted against, so 500 means 5-to-1) imply a win probability of `100 / (o + 100)`.
//! The implied probabilities of a bookmaker's field sum to more than 1 (the booksum), so they are
//! scaled by the reciprocal of the booksum to remove the margin.

use std::fmt::{Display, Formatter};

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use crate::error::InvalidField;
use crate::probs::SliceExt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contestant {
    pub name: String,
    pub odds: i64,
}
impl Contestant {
    pub fn new(name: impl Into<String>, odds: i64) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }
}

impl Display for Contestant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (+{})", self.name, self.odds)
    }
}

/// An ordered, immutable list of contestants. Declaration order is preserved throughout and
/// is the tie-break for every downstream ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    contestants: Vec<Contestant>,
}
impl Field {
    pub fn contestants(&self) -> &[Contestant] {
        &self.contestants
    }

    pub fn len(&self) -> usize {
        self.contestants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contestants.is_empty()
    }

    /// Sum of the implied probabilities, before the margin is removed.
    pub fn booksum(&self) -> Result<f64, InvalidField> {
        Ok(self.implied_probs()?.sum())
    }

    fn implied_probs(&self) -> Result<Vec<f64>, InvalidField> {
        self.contestants
            .iter()
            .map(|contestant| implied_prob(contestant.odds).ok_or_else(|| invalid_odds(contestant)))
            .collect()
    }
}

fn invalid_odds(contestant: &Contestant) -> InvalidField {
    InvalidField::InvalidOdds {
        name: contestant.name.clone(),
        odds: contestant.odds,
    }
}

impl From<Vec<Contestant>> for Field {
    fn from(contestants: Vec<Contestant>) -> Self {
        Self { contestants }
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Field {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(name, odds)| Contestant::new(name, odds))
            .collect::<Vec<_>>()
            .into()
    }
}

impl<S: Into<String> + Copy> From<&[(S, i64)]> for Field {
    fn from(pairs: &[(S, i64)]) -> Self {
        pairs.iter().copied().collect()
    }
}

/// Implied win probability of positive American odds, or `None` if the odds are not positive.
pub fn implied_prob(odds: i64) -> Option<f64> {
    if odds > 0 {
        Some(100.0 / (odds as f64 + 100.0))
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub name: String,
    pub prob: f64,
}

/// Win probabilities in the declaration order of the field they were derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    entries: Vec<Entry>,
}
impl Distribution {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.prob)
    }

    pub fn probs(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.prob).collect()
    }

    /// Entries sorted by descending probability. Equal probabilities keep declaration order.
    pub fn ranked(&self) -> Vec<&Entry> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.prob.total_cmp(&a.prob));
        ranked
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Distribution {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, prob)| Entry {
                    name: name.into(),
                    prob,
                })
                .collect(),
        }
    }
}

/// Converts the odds of every contestant in `field` into a normalised win probability.
pub fn convert(field: &Field) -> Result<Distribution, InvalidField> {
    if field.is_empty() {
        return Err(InvalidField::EmptyField);
    }

    let mut seen = FxHashSet::default();
    for contestant in field.contestants() {
        if !seen.insert(contestant.name.as_str()) {
            return Err(InvalidField::DuplicateContestant(contestant.name.clone()));
        }
    }

    let mut probs = field.implied_probs()?;
    let booksum = probs.normalise(1.0);
    debug!(
        "converted {} contestants, booksum: {booksum:.6}",
        field.len()
    );

    Ok(field
        .contestants()
        .iter()
        .zip(probs)
        .map(|(contestant, prob)| (contestant.name.clone(), prob))
        .collect())
}
