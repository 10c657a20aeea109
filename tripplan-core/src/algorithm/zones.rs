use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{
    model::place::{Place, PlaceId},
    util::geo_utils::planar_distance_or_inf,
};

/// how many attractions go into each zone hint.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneConfig {
    #[serde(default = "default_take")]
    pub take_near: usize,
    #[serde(default = "default_take")]
    pub take_far: usize,
}

fn default_take() -> usize {
    4
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            take_near: default_take(),
            take_far: default_take(),
        }
    }
}

/// attraction numbers on either side of the cut the backend should prefer.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneSelection {
    pub zone_a: Vec<i64>,
    pub zone_b: Vec<i64>,
}

impl ZoneSelection {
    /// zone A as comma separated numbers, or None when it is empty.
    pub fn zone_a_csv(&self) -> Option<String> {
        to_csv(&self.zone_a)
    }

    /// zone B as comma separated numbers, or None when it is empty.
    pub fn zone_b_csv(&self) -> Option<String> {
        to_csv(&self.zone_b)
    }
}

fn to_csv(numbers: &[i64]) -> Option<String> {
    if numbers.is_empty() {
        None
    } else {
        Some(numbers.iter().join(","))
    }
}

/// builds zone hints from coordinates alone.
///
/// zone A holds the start and the attractions nearest to it, zone B the
/// attractions farthest away. attractions without coordinates count as
/// infinitely far, and equal distances keep catalog order. a start that is
/// not a known attraction yields zone A with only the start.
pub fn pick_zones(start: &PlaceId, attractions: &[Place], config: &ZoneConfig) -> ZoneSelection {
    let lone_start = ZoneSelection {
        zone_a: vec![start.number],
        zone_b: vec![],
    };
    let Some(origin) = attractions.iter().find(|p| &p.id == start) else {
        log::debug!("start {start} is not a known attraction, zone hints hold only the start");
        return lone_start;
    };
    let by_distance = attractions
        .iter()
        .filter(|p| &p.id != start && p.id.is_attraction())
        .sorted_by_key(|p| OrderedFloat(planar_distance_or_inf(origin.point(), p.point())))
        .collect_vec();
    if by_distance.is_empty() {
        return lone_start;
    }

    let near = by_distance
        .iter()
        .take(config.take_near)
        .map(|p| p.id.number);
    let zone_a = std::iter::once(start.number).chain(near).collect_vec();
    let zone_b = by_distance
        .iter()
        .rev()
        .take(config.take_far)
        .map(|p| p.id.number)
        .collect_vec();
    ZoneSelection { zone_a, zone_b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attraction(n: i64, coords: Option<(f64, f64)>) -> Place {
        Place {
            id: PlaceId::attraction(n),
            name: n.to_string(),
            lat: coords.map(|c| c.0),
            lon: coords.map(|c| c.1),
            price_min: 0,
            price_max: 0,
        }
    }

    fn line_of_attractions(n: i64) -> Vec<Place> {
        (1..=n)
            .map(|i| attraction(i, Some((13.0 + i as f64 * 0.01, 100.0))))
            .collect()
    }

    #[test]
    fn test_near_and_far() {
        let attractions = line_of_attractions(10);
        let config = ZoneConfig::default();
        let zones = pick_zones(&PlaceId::attraction(1), &attractions, &config);
        assert_eq!(zones.zone_a, vec![1, 2, 3, 4, 5]);
        assert_eq!(zones.zone_b, vec![10, 9, 8, 7]);
        assert_eq!(zones.zone_a_csv().as_deref(), Some("1,2,3,4,5"));
        assert_eq!(zones.zone_b_csv().as_deref(), Some("10,9,8,7"));
    }

    #[test]
    fn test_unlocated_attractions_are_farthest() {
        let mut attractions = line_of_attractions(3);
        attractions.insert(1, attraction(50, None));
        let config = ZoneConfig {
            take_near: 1,
            take_far: 1,
        };
        let zones = pick_zones(&PlaceId::attraction(1), &attractions, &config);
        assert_eq!(zones.zone_a, vec![1, 2]);
        assert_eq!(zones.zone_b, vec![50]);
    }

    #[test]
    fn test_unknown_start() {
        let attractions = line_of_attractions(3);
        let config = ZoneConfig::default();
        let zones = pick_zones(&PlaceId::attraction(99), &attractions, &config);
        assert_eq!(zones.zone_a, vec![99]);
        assert!(zones.zone_b.is_empty());
        assert_eq!(zones.zone_b_csv(), None);
    }

    #[test]
    fn test_start_without_others() {
        let attractions = line_of_attractions(1);
        let config = ZoneConfig::default();
        let zones = pick_zones(&PlaceId::attraction(1), &attractions, &config);
        assert_eq!(
            zones,
            ZoneSelection {
                zone_a: vec![1],
                zone_b: vec![],
            }
        );
    }

    #[test]
    fn test_small_catalog_overlaps() {
        let attractions = line_of_attractions(3);
        let config = ZoneConfig::default();
        let zones = pick_zones(&PlaceId::attraction(1), &attractions, &config);
        assert_eq!(zones.zone_a, vec![1, 2, 3]);
        assert_eq!(zones.zone_b, vec![3, 2]);
    }
}
