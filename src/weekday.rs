use serde::{Deserialize, Serialize};

use crate::consts::DAYS_IN_WEEK;
use crate::prelude::*;

/// Day of the week, declared in the order Zeller's congruence numbers them:
/// 0 is Saturday, 6 is Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Every weekday, indexed by its Zeller residue.
    pub const ZELLER_ORDER: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Maps the result of Zeller's congruence to its weekday, reducing it modulo 7 first.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_zeller(h: u64) -> Self {
        Self::ZELLER_ORDER[(h % DAYS_IN_WEEK) as usize]
    }

    /// English name, e.g. "Saturday"
    pub const fn name(self) -> &'static str {
        match self {
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}
