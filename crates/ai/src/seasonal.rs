//! Calendar-driven demand multipliers.

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use stockshift_inventory::Category;

/// Zero-based month index of December.
pub const DECEMBER: u32 = 11;

/// Zero-based month indices of the pre-holiday Q4 ramp (September–November).
pub const Q4_RAMP_MONTHS: RangeInclusive<u32> = 8..=10;

/// Categories that peak hardest over the December holidays.
pub const HOLIDAY_PEAK_CATEGORIES: [&str; 3] = ["Electronics", "Packaging", "Safety Gear"];

pub const HOLIDAY_PEAK_MULTIPLIER: f64 = 1.6;
pub const HOLIDAY_MULTIPLIER: f64 = 1.3;
pub const Q4_MULTIPLIER: f64 = 1.2;
pub const BASELINE_MULTIPLIER: f64 = 1.0;

/// Seasonal period a month falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Holiday,
    Q4Ramp,
    Regular,
}

impl Season {
    pub fn for_month(month0: u32) -> Self {
        if month0 == DECEMBER {
            Season::Holiday
        } else if Q4_RAMP_MONTHS.contains(&month0) {
            Season::Q4Ramp
        } else {
            Season::Regular
        }
    }
}

/// Demand multiplier for a zero-based month index and an item category.
///
/// Always `>= 1.0`; out-of-range months fall back to the baseline.
pub fn seasonal_multiplier(month0: u32, category: &Category) -> f64 {
    match Season::for_month(month0) {
        Season::Holiday if is_holiday_peak(category) => HOLIDAY_PEAK_MULTIPLIER,
        Season::Holiday => HOLIDAY_MULTIPLIER,
        Season::Q4Ramp => Q4_MULTIPLIER,
        Season::Regular => BASELINE_MULTIPLIER,
    }
}

fn is_holiday_peak(category: &Category) -> bool {
    HOLIDAY_PEAK_CATEGORIES.contains(&category.as_str())
}
