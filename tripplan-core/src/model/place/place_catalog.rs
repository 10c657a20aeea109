use std::collections::HashMap;

use super::{Place, PlaceCategory, PlaceId, PlaceRecord};

/// the three place lists in backend order along with a lookup by id.
/// list order is significant: it is the meal pool order and the tie-break
/// order for lodging selection.
#[derive(Clone, Debug, Default)]
pub struct PlaceCatalog {
    attractions: Vec<Place>,
    meals: Vec<Place>,
    lodgings: Vec<Place>,
    lookup: HashMap<PlaceId, Place>,
}

impl PlaceCatalog {
    pub fn new(attractions: Vec<Place>, meals: Vec<Place>, lodgings: Vec<Place>) -> PlaceCatalog {
        let mut lookup = HashMap::with_capacity(attractions.len() + meals.len() + lodgings.len());
        for place in attractions.iter().chain(meals.iter()).chain(lodgings.iter()) {
            if lookup.insert(place.id, place.clone()).is_some() {
                log::warn!(
                    "duplicate place id {} in catalog, keeping the latest",
                    place.id
                );
            }
        }
        PlaceCatalog {
            attractions,
            meals,
            lodgings,
            lookup,
        }
    }

    /// builds a catalog from raw backend records, prefixing each record id
    /// with its category.
    pub fn from_records(
        attractions: &[PlaceRecord],
        meals: &[PlaceRecord],
        lodgings: &[PlaceRecord],
    ) -> PlaceCatalog {
        let convert = |category: PlaceCategory, records: &[PlaceRecord]| {
            records
                .iter()
                .map(|r| Place::from_record(category, r))
                .collect::<Vec<_>>()
        };
        PlaceCatalog::new(
            convert(PlaceCategory::Attraction, attractions),
            convert(PlaceCategory::Meal, meals),
            convert(PlaceCategory::Lodging, lodgings),
        )
    }

    pub fn get(&self, id: &PlaceId) -> Option<&Place> {
        self.lookup.get(id)
    }

    /// minimum price of a place, or 0 when the place is unknown.
    pub fn price_min(&self, id: &PlaceId) -> u64 {
        self.lookup.get(id).map(|p| p.price_min).unwrap_or_default()
    }

    pub fn attractions(&self) -> &[Place] {
        &self.attractions
    }

    pub fn meals(&self) -> &[Place] {
        &self.meals
    }

    pub fn lodgings(&self) -> &[Place] {
        &self.lodgings
    }

    pub fn len(&self) -> usize {
        self.attractions.len() + self.meals.len() + self.lodgings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, price_min: i64) -> PlaceRecord {
        PlaceRecord {
            id,
            price_min: Some(price_min),
            ..Default::default()
        }
    }

    #[test]
    fn test_same_number_different_categories() {
        let catalog =
            PlaceCatalog::from_records(&[record(1, 10)], &[record(1, 20)], &[record(1, 30)]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.price_min(&PlaceId::attraction(1)), 10);
        assert_eq!(catalog.price_min(&PlaceId::meal(1)), 20);
        assert_eq!(catalog.price_min(&PlaceId::lodging(1)), 30);
    }

    #[test]
    fn test_unknown_place_price_is_zero() {
        let catalog = PlaceCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.price_min(&PlaceId::attraction(42)), 0);
        assert!(catalog.get(&PlaceId::attraction(42)).is_none());
    }

    #[test]
    fn test_lists_keep_backend_order() {
        let catalog = PlaceCatalog::from_records(
            &[record(9, 0), record(2, 0)],
            &[record(5, 0)],
            &[],
        );
        let ids = catalog
            .attractions()
            .iter()
            .chain(catalog.meals())
            .map(|p| p.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["P9", "P2", "R5"]);
        assert!(catalog.lodgings().is_empty());
    }
}
