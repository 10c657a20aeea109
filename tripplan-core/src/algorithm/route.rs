use itertools::Itertools;

use crate::model::{
    graph::DistanceGraph,
    itinerary::{Itinerary, RouteSegment},
    place::{Place, PlaceCatalog, PlaceId},
};

/// the hops of a trip and their summed length, in kilometers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StitchedRoute {
    pub segments: Vec<RouteSegment>,
    pub total_distance_km: f64,
}

/// builds the route of every non-empty day as a loop that leaves the lodging,
/// visits the day's stops in order and returns to the lodging.
///
/// hops missing from the distance graph count as 0 km. segment distances are
/// rounded to 2 decimals, while the total is summed from unrounded values and
/// rounded once.
pub fn stitch_route(
    itinerary: &Itinerary,
    lodging: &PlaceId,
    distances: &DistanceGraph,
    catalog: &PlaceCatalog,
) -> StitchedRoute {
    let mut segments = vec![];
    let mut total = 0.0;
    for (idx, plan) in itinerary.days.iter().enumerate() {
        if plan.is_empty() {
            continue;
        }
        let day = idx + 1;
        let stops = std::iter::once(lodging)
            .chain(plan.stops().iter())
            .chain(std::iter::once(lodging));
        for (from, to) in stops.tuple_windows() {
            let distance = distances.distance_or(from, to, 0.0);
            total += distance;
            segments.push(segment(from, to, distance, day, catalog));
        }
    }
    StitchedRoute {
        segments,
        total_distance_km: round_2(total),
    }
}

fn segment(
    from: &PlaceId,
    to: &PlaceId,
    distance: f64,
    day: usize,
    catalog: &PlaceCatalog,
) -> RouteSegment {
    let (from_name, from_lat, from_lon) = describe(from, catalog.get(from));
    let (to_name, to_lat, to_lon) = describe(to, catalog.get(to));
    RouteSegment {
        from: *from,
        from_name,
        from_lat,
        from_lon,
        to: *to,
        to_name,
        to_lat,
        to_lon,
        distance_km: round_2(distance),
        day,
    }
}

fn describe(id: &PlaceId, place: Option<&Place>) -> (String, Option<f64>, Option<f64>) {
    match place {
        Some(p) => (p.name.clone(), p.lat, p.lon),
        None => (id.to_string(), None, None),
    }
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
