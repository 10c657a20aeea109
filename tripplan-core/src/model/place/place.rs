use geo::Point;
use serde::{Deserialize, Serialize};

use super::{PlaceCategory, PlaceId, PlaceRecord};

/// an attraction, meal or lodging as used by the planner. prices are
/// non-negative integers in the trip currency.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub price_min: u64,
    pub price_max: u64,
}

impl Place {
    pub fn from_record(category: PlaceCategory, record: &PlaceRecord) -> Place {
        let id = PlaceId::new(category, record.id);
        let name = record
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| id.to_string());
        Place {
            id,
            name,
            lat: record.lat,
            lon: record.lon,
            price_min: non_negative(record.price_min),
            price_max: non_negative(record.price_max),
        }
    }

    /// location as an (x=lon, y=lat) point, if both coordinates are known.
    pub fn point(&self) -> Option<Point<f64>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Point::new(lon, lat)),
            _ => None,
        }
    }
}

fn non_negative(price: Option<i64>) -> u64 {
    price.map(|p| p.max(0) as u64).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_clamps_and_names() {
        let record = PlaceRecord {
            id: 3,
            name: None,
            lat: Some(13.7),
            lon: Some(100.5),
            price_min: Some(-20),
            price_max: None,
        };
        let place = Place::from_record(PlaceCategory::Meal, &record);
        assert_eq!(place.id, PlaceId::meal(3));
        assert_eq!(place.name, "R3");
        assert_eq!(place.price_min, 0);
        assert_eq!(place.price_max, 0);
        let p = place.point().unwrap();
        assert_eq!((p.x(), p.y()), (100.5, 13.7));
    }

    #[test]
    fn test_point_requires_both_coordinates() {
        let record = PlaceRecord {
            id: 1,
            lat: Some(1.0),
            ..Default::default()
        };
        let place = Place::from_record(PlaceCategory::Attraction, &record);
        assert!(place.point().is_none());
    }
}
