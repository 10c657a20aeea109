use serde::{Deserialize, Serialize};

/// the three kinds of places an itinerary is built from. each category owns
/// a single-letter prefix which makes catalog ids globally unique.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Attraction,
    Meal,
    Lodging,
}

impl PlaceCategory {
    pub fn prefix(&self) -> char {
        match self {
            PlaceCategory::Attraction => 'P',
            PlaceCategory::Meal => 'R',
            PlaceCategory::Lodging => 'A',
        }
    }

    pub fn from_prefix(prefix: char) -> Option<PlaceCategory> {
        match prefix {
            'P' => Some(PlaceCategory::Attraction),
            'R' => Some(PlaceCategory::Meal),
            'A' => Some(PlaceCategory::Lodging),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlaceCategory::Attraction => "attraction",
            PlaceCategory::Meal => "meal",
            PlaceCategory::Lodging => "lodging",
        };
        write!(f, "{s}")
    }
}
