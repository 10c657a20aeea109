use geo::Point;
use itertools::Itertools;

use crate::{
    model::{
        budget::relax,
        itinerary::Itinerary,
        place::{Place, PlaceCatalog},
    },
    util::geo_utils,
};

mod consts {
    /// percent added to the hotel budget on each relaxation step.
    pub const RELAX_PCT: f64 = 10.0;
    pub const MAX_RELAX_STEPS: usize = 5;
}

/// mean location of every itinerary stop with known coordinates.
pub fn itinerary_centroid(itinerary: &Itinerary, catalog: &PlaceCatalog) -> Option<Point<f64>> {
    let points = itinerary
        .stops()
        .filter_map(|id| catalog.get(id).and_then(Place::point))
        .collect_vec();
    geo_utils::mean_point(points)
}

/// picks the lodging closest to `centroid` that fits the nightly budget.
///
/// when nothing fits, the budget is raised by 10% at a time, up to five
/// times. lodgings without coordinates are never chosen. ties keep the
/// earliest lodging in catalog order.
pub fn select_lodging<'a>(
    lodgings: &'a [Place],
    centroid: Option<Point<f64>>,
    hotel_budget: u64,
) -> Option<&'a Place> {
    let centroid = centroid?;
    if lodgings.is_empty() {
        return None;
    }

    let mut budget = hotel_budget;
    let mut pool = affordable(lodgings, budget);
    let mut step = 0;
    while pool.is_empty() && step < consts::MAX_RELAX_STEPS {
        step += 1;
        budget = relax(budget, consts::RELAX_PCT);
        pool = affordable(lodgings, budget);
    }
    if pool.is_empty() {
        log::info!("no lodging within {budget} after relaxing {hotel_budget} {step} times");
        return None;
    }
    if step > 0 {
        log::debug!("hotel budget relaxed from {hotel_budget} to {budget}");
    }

    let mut nearest: Option<(&Place, f64)> = None;
    for lodging in pool {
        let Some(point) = lodging.point() else {
            continue;
        };
        let dist = geo_utils::planar_distance(centroid, point);
        match nearest {
            Some((_, best)) if dist >= best => {}
            _ => nearest = Some((lodging, dist)),
        }
    }
    nearest.map(|(lodging, _)| lodging)
}

fn affordable(lodgings: &[Place], budget: u64) -> Vec<&Place> {
    lodgings.iter().filter(|l| l.price_min <= budget).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{itinerary::DayPlan, place::PlaceId};

    fn lodging(n: i64, price_min: u64, coords: Option<(f64, f64)>) -> Place {
        Place {
            id: PlaceId::lodging(n),
            name: format!("hotel {n}"),
            lat: coords.map(|c| c.0),
            lon: coords.map(|c| c.1),
            price_min,
            price_max: price_min,
        }
    }

    fn at(lat: f64, lon: f64) -> Option<Point<f64>> {
        Some(Point::new(lon, lat))
    }

    #[test]
    fn test_nearest_affordable() {
        let lodgings = vec![
            lodging(1, 500, Some((13.0, 100.0))),
            lodging(2, 900, Some((13.5, 100.5))),
            lodging(3, 400, Some((13.4, 100.4))),
        ];
        let chosen = select_lodging(&lodgings, at(13.5, 100.5), 600).unwrap();
        assert_eq!(chosen.id, PlaceId::lodging(3));
    }

    #[test]
    fn test_relaxation_finds_slightly_expensive() {
        // 500 -> 550 -> 605 -> 666
        let lodgings = vec![lodging(1, 660, Some((13.0, 100.0)))];
        let chosen = select_lodging(&lodgings, at(13.0, 100.0), 500);
        assert_eq!(chosen.map(|l| l.id), Some(PlaceId::lodging(1)));
    }

    #[test]
    fn test_relaxation_gives_up_after_five_steps() {
        // five steps take 1000 to 1610, still short of 1700
        let lodgings = vec![lodging(1, 1700, Some((13.0, 100.0)))];
        assert!(select_lodging(&lodgings, at(13.0, 100.0), 1000).is_none());
    }

    #[test]
    fn test_skips_lodgings_without_coordinates() {
        let lodgings = vec![lodging(1, 0, None), lodging(2, 0, Some((20.0, 110.0)))];
        let chosen = select_lodging(&lodgings, at(13.0, 100.0), 0).unwrap();
        assert_eq!(chosen.id, PlaceId::lodging(2));
        assert!(select_lodging(&lodgings[..1], at(13.0, 100.0), 0).is_none());
    }

    #[test]
    fn test_tie_keeps_catalog_order() {
        let lodgings = vec![
            lodging(7, 0, Some((13.0, 101.0))),
            lodging(4, 0, Some((13.0, 99.0))),
        ];
        let chosen = select_lodging(&lodgings, at(13.0, 100.0), 0).unwrap();
        assert_eq!(chosen.id, PlaceId::lodging(7));
    }

    #[test]
    fn test_no_centroid_no_lodging() {
        let lodgings = vec![lodging(1, 0, Some((13.0, 100.0)))];
        assert!(select_lodging(&lodgings, None, 1000).is_none());
    }

    #[test]
    fn test_itinerary_centroid_ignores_unlocated_stops() {
        let located = |n: i64, lat: f64, lon: f64| Place {
            id: PlaceId::attraction(n),
            name: n.to_string(),
            lat: Some(lat),
            lon: Some(lon),
            price_min: 0,
            price_max: 0,
        };
        let mut unlocated = located(3, 0.0, 0.0);
        unlocated.lat = None;
        let catalog = PlaceCatalog::new(
            vec![located(1, 10.0, 100.0), located(2, 12.0, 102.0), unlocated],
            vec![],
            vec![],
        );
        let itinerary = Itinerary {
            days: vec![
                DayPlan::new(vec![PlaceId::attraction(1), PlaceId::attraction(3)]),
                DayPlan::new(vec![PlaceId::attraction(2), PlaceId::attraction(99)]),
            ],
        };
        let centroid = itinerary_centroid(&itinerary, &catalog).unwrap();
        assert!((centroid.y() - 11.0).abs() < 1e-9);
        assert!((centroid.x() - 101.0).abs() < 1e-9);
        assert!(itinerary_centroid(&Itinerary::default(), &catalog).is_none());
    }
}
