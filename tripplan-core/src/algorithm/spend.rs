use crate::model::{
    itinerary::{DayPlan, DaySpend, Itinerary, TripSpend},
    place::{PlaceCatalog, PlaceCategory},
};

/// actual cost of one day: the nightly lodging price plus the minimum prices
/// of the meals and attractions visited. stops missing from the catalog
/// cost nothing.
pub fn day_spend(
    day: usize,
    plan: &DayPlan,
    catalog: &PlaceCatalog,
    hotel_per_day: u64,
) -> DaySpend {
    let mut meals = 0;
    let mut attractions = 0;
    for stop in plan.stops() {
        let Some(place) = catalog.get(stop) else {
            continue;
        };
        match stop.category {
            PlaceCategory::Meal => meals += place.price_min,
            PlaceCategory::Attraction => attractions += place.price_min,
            PlaceCategory::Lodging => {}
        }
    }
    DaySpend {
        day,
        hotel: hotel_per_day,
        meals,
        attractions,
        total: hotel_per_day + meals + attractions,
    }
}

/// sums the spend of every day in the itinerary. days are numbered from 1
/// and lodging is charged for every day, including days without stops.
pub fn reconcile_spend(
    itinerary: &Itinerary,
    catalog: &PlaceCatalog,
    hotel_per_day: u64,
) -> TripSpend {
    let mut spend = TripSpend::default();
    for (idx, plan) in itinerary.days.iter().enumerate() {
        spend.push(day_spend(idx + 1, plan, catalog, hotel_per_day));
    }
    spend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::place::{Place, PlaceId};

    fn place(id: PlaceId, price_min: u64) -> Place {
        Place {
            id,
            name: id.to_string(),
            lat: None,
            lon: None,
            price_min,
            price_max: price_min * 2,
        }
    }

    fn catalog() -> PlaceCatalog {
        PlaceCatalog::new(
            vec![
                place(PlaceId::attraction(1), 100),
                place(PlaceId::attraction(2), 0),
            ],
            vec![place(PlaceId::meal(1), 60), place(PlaceId::meal(2), 90)],
            vec![place(PlaceId::lodging(1), 700)],
        )
    }

    #[test]
    fn test_day_spend() {
        let plan = DayPlan::new(vec![
            PlaceId::attraction(1),
            PlaceId::attraction(2),
            PlaceId::meal(2),
            PlaceId::attraction(77),
        ]);
        let spend = day_spend(1, &plan, &catalog(), 700);
        assert_eq!(
            spend,
            DaySpend {
                day: 1,
                hotel: 700,
                meals: 90,
                attractions: 100,
                total: 890,
            }
        );
    }

    #[test]
    fn test_totals_are_sums_of_days() {
        let itinerary = Itinerary {
            days: vec![
                DayPlan::new(vec![PlaceId::attraction(1), PlaceId::meal(1)]),
                DayPlan::new(vec![PlaceId::meal(2)]),
                DayPlan::default(),
            ],
        };
        let spend = reconcile_spend(&itinerary, &catalog(), 500);
        assert_eq!(spend.per_day.len(), 3);
        let days = spend.per_day.iter().map(|d| d.day).collect::<Vec<_>>();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(spend.per_day[2].total, 500);
        assert_eq!(spend.breakdown.hotel, 1500);
        assert_eq!(spend.breakdown.meals, 150);
        assert_eq!(spend.breakdown.attractions, 100);
        let day_totals = spend.per_day.iter().map(|d| d.total).sum::<u64>();
        assert_eq!(spend.total, day_totals);
        assert_eq!(
            spend.total,
            spend.breakdown.hotel + spend.breakdown.meals + spend.breakdown.attractions
        );
    }

    #[test]
    fn test_no_lodging_costs_nothing() {
        let itinerary = Itinerary {
            days: vec![DayPlan::default()],
        };
        let spend = reconcile_spend(&itinerary, &catalog(), 0);
        assert_eq!(spend.total, 0);
    }
}
