//! Points of interest.
//!
//! A point is identified by its name; the road graph refers to points only
//! by that name. Visit counts and ratings are plain bookkeeping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;
use crate::geo::Coordinates;

/// The kind of attraction a point offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Nature,
    Culture,
    Gastronomy,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Nature, Self::Culture, Self::Gastronomy];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Culture => "culture",
            Self::Gastronomy => "gastronomy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ValidationFailure::UnknownCategory(s.to_string()))
    }
}

/// A visitor's satisfaction score, 1 (not satisfied) to 4 (very satisfied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationFailure;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationFailure::RatingOutOfRange(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A named location visitors can travel to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub coordinates: Coordinates,
    pub category: Category,
    #[serde(default)]
    pub accessibility: String,
    #[serde(default)]
    pub activities: String,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub visits: u32,
}

impl PointOfInterest {
    #[must_use]
    pub fn new(name: impl Into<String>, coordinates: Coordinates, category: Category) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            coordinates,
            category,
            accessibility: String::new(),
            activities: String::new(),
            ratings: Vec::new(),
            visits: 0,
        }
    }

    /// Record one visit with the visitor's rating.
    pub fn record_visit(&mut self, rating: Rating) {
        self.ratings.push(rating);
        self.visits += 1;
    }

    /// Mean rating, or 0 when the point has never been rated.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.ratings.iter().map(|r| u32::from(r.value())).sum();
        f64::from(sum) / self.ratings.len() as f64
    }
}
