use serde::{Deserialize, Serialize};

/// what a single day actually costs given the chosen stops and lodging.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DaySpend {
    pub day: usize,
    pub hotel: u64,
    pub meals: u64,
    pub attractions: u64,
    pub total: u64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpendBreakdown {
    pub hotel: u64,
    pub meals: u64,
    pub attractions: u64,
}

/// reconciled spend for the trip. `total` and `breakdown` are sums over
/// `per_day`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TripSpend {
    pub per_day: Vec<DaySpend>,
    pub total: u64,
    pub breakdown: SpendBreakdown,
}

impl TripSpend {
    pub fn push(&mut self, day: DaySpend) {
        self.breakdown.hotel += day.hotel;
        self.breakdown.meals += day.meals;
        self.breakdown.attractions += day.attractions;
        self.total += day.total;
        self.per_day.push(day);
    }
}
