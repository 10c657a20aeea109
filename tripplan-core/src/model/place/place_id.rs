use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PlaceCategory, PlaceIdError};

/// category-prefixed identifier of a place, such as `P12` (attraction),
/// `R3` (meal) or `A7` (lodging).
///
/// ordering is by category and then by number. this ordering is the
/// tie-break used wherever the planner must choose between equal candidates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceId {
    pub category: PlaceCategory,
    pub number: i64,
}

impl PlaceId {
    pub fn new(category: PlaceCategory, number: i64) -> PlaceId {
        PlaceId { category, number }
    }

    pub fn attraction(number: i64) -> PlaceId {
        PlaceId::new(PlaceCategory::Attraction, number)
    }

    pub fn meal(number: i64) -> PlaceId {
        PlaceId::new(PlaceCategory::Meal, number)
    }

    pub fn lodging(number: i64) -> PlaceId {
        PlaceId::new(PlaceCategory::Lodging, number)
    }

    pub fn is_attraction(&self) -> bool {
        self.category == PlaceCategory::Attraction
    }

    pub fn is_meal(&self) -> bool {
        self.category == PlaceCategory::Meal
    }
}

impl FromStr for PlaceId {
    type Err = PlaceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let prefix = chars.next().ok_or(PlaceIdError::Empty)?;
        let category = PlaceCategory::from_prefix(prefix).ok_or_else(|| {
            PlaceIdError::UnknownPrefix {
                id: trimmed.to_string(),
                prefix,
            }
        })?;
        let number = chars
            .as_str()
            .parse::<i64>()
            .map_err(|e| PlaceIdError::InvalidNumber {
                id: trimmed.to_string(),
                message: e.to_string(),
            })?;
        Ok(PlaceId { category, number })
    }
}

impl TryFrom<String> for PlaceId {
    type Error = PlaceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlaceId::from_str(&value)
    }
}

impl From<PlaceId> for String {
    fn from(value: PlaceId) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.category.prefix(), self.number)
    }
}
