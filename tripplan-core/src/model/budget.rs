use serde::{Deserialize, Serialize};

mod consts {
    /// share of the daily budget reserved for lodging, in percent.
    pub const HOTEL_SHARE_PCT: u64 = 55;
    /// share of the daily budget for each of the two daily meals, in percent.
    pub const MEAL_SHARE_PCT: u64 = 12;
    pub const MEALS_PER_DAY: u64 = 2;
}

/// nominal spending figures for a single day of the trip.
///
/// `hotel + 2 * meal_each + attractions <= per_day` always holds. the
/// attraction budget absorbs whatever the floors leave over, so the parts
/// may sum to less than `per_day`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayBudget {
    pub per_day: u64,
    pub hotel: u64,
    pub meal_each: u64,
    pub attractions: u64,
}

impl DayBudget {
    /// splits a trip budget evenly across days (a day count of 0 is treated
    /// as 1) and then across lodging, meals and attractions.
    pub fn split(total_budget: u64, days: u64) -> DayBudget {
        let days = days.max(1);
        let per_day = total_budget / days;
        let hotel = percent_of(per_day, consts::HOTEL_SHARE_PCT);
        let meal_each = percent_of(per_day, consts::MEAL_SHARE_PCT);
        let attractions = per_day
            .saturating_sub(hotel)
            .saturating_sub(consts::MEALS_PER_DAY * meal_each);
        DayBudget {
            per_day,
            hotel,
            meal_each,
            attractions,
        }
    }
}

/// floor of `pct` percent of `amount`, without overflowing for large amounts.
fn percent_of(amount: u64, pct: u64) -> u64 {
    amount / 100 * pct + amount % 100 * pct / 100
}

/// raises an amount by `pct` percent, rounding half to even.
pub fn relax(amount: u64, pct: f64) -> u64 {
    let relaxed = amount as f64 * (1.0 + pct / 100.0);
    relaxed.round_ties_even().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_example() {
        let budget = DayBudget::split(3000, 2);
        assert_eq!(
            budget,
            DayBudget {
                per_day: 1500,
                hotel: 825,
                meal_each: 180,
                attractions: 315,
            }
        );
    }

    #[test]
    fn test_zero_days_coerced_to_one() {
        assert_eq!(DayBudget::split(1000, 0), DayBudget::split(1000, 1));
        assert_eq!(DayBudget::split(1000, 0).per_day, 1000);
    }

    #[test]
    fn test_split_largest_budget() {
        let budget = DayBudget::split(u64::MAX, 1);
        assert_eq!(budget.per_day, u64::MAX);
        assert_eq!(budget.hotel, (u64::MAX as u128 * 55 / 100) as u64);
        assert_eq!(budget.meal_each, (u64::MAX as u128 * 12 / 100) as u64);
        assert!(budget.hotel + 2 * budget.meal_each + budget.attractions <= budget.per_day);
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(DayBudget::split(0, 3), DayBudget::default());
    }

    #[test]
    fn test_invariants_over_range() {
        for total in (0..5000).step_by(37) {
            for days in 0..8 {
                let b = DayBudget::split(total, days);
                assert!(b.hotel + 2 * b.meal_each <= b.per_day);
                assert!(b.hotel + 2 * b.meal_each + b.attractions <= b.per_day);
            }
        }
    }

    #[test]
    fn test_floors_truncate_remainder() {
        // 1001 / 3 = 333 per day
        let b = DayBudget::split(1001, 3);
        assert_eq!(b.per_day, 333);
        assert_eq!(b.hotel, 183);
        assert_eq!(b.meal_each, 39);
        assert_eq!(b.attractions, 333 - 183 - 78);
    }

    #[test]
    fn test_relax() {
        assert_eq!(relax(100, 10.0), 110);
        assert_eq!(relax(0, 10.0), 0);
        assert_eq!(relax(1000, 10.0), 1100);
    }
}
