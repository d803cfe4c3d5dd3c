// Ticket value types and the price table.
//
// Purpose
// - Describe what a participant booked and what it costs.
//
// Boundaries
// - Prices are computed once, when a registration is decided, and frozen into the event. Changing
//   the table never changes the price of an existing ticket.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    Baby,
    Child,
    OlderThan12,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StayDuration {
    #[serde(rename = "Fr-Su")]
    FridayToSunday,
    #[serde(rename = "Fr-Sa")]
    FridayToSaturday,
    #[serde(rename = "Sa-Su")]
    SaturdayToSunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accommodation {
    Tent,
    Indoor,
    Camper,
}

impl Accommodation {
    pub const ALL: [Accommodation; 3] = [Accommodation::Tent, Accommodation::Indoor, Accommodation::Camper];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupporterCategory {
    Normal,
    Supporter,
    Reduced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub age_category: AgeCategory,
    pub duration: StayDuration,
    pub supporter_category: SupporterCategory,
    pub price_in_cents: i64,
}

/// Price table in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketPrices {
    pub full_weekend: i64,
    pub partial_weekend: i64,
    pub supporter_surcharge: i64,
    pub reduced_discount: i64,
}

impl Default for TicketPrices {
    fn default() -> Self {
        Self {
            full_weekend: 3500,
            partial_weekend: 2500,
            supporter_surcharge: 1000,
            reduced_discount: 1000,
        }
    }
}

impl TicketPrices {
    pub fn price(&self, age: AgeCategory, duration: StayDuration, supporter: SupporterCategory) -> i64 {
        let base = match duration {
            StayDuration::FridayToSunday => self.full_weekend,
            StayDuration::FridayToSaturday | StayDuration::SaturdayToSunday => self.partial_weekend,
        };
        let base = match age {
            AgeCategory::Baby => return 0,
            AgeCategory::Child => base / 2,
            AgeCategory::OlderThan12 => base,
        };
        match supporter {
            SupporterCategory::Normal => base,
            SupporterCategory::Supporter => base + self.supporter_surcharge,
            SupporterCategory::Reduced => (base - self.reduced_discount).max(0),
        }
    }

    pub fn ticket(&self, age: AgeCategory, duration: StayDuration, supporter: SupporterCategory) -> Ticket {
        Ticket {
            age_category: age,
            duration,
            supporter_category: supporter,
            price_in_cents: self.price(age, duration, supporter),
        }
    }
}
