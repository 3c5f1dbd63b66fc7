use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Mask covering the seven weekday bits.
const ALL_BITS: u8 = 0b0111_1111;

/// Weekday order used for iteration and display.
const ORDERED: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Set of weekdays on which a medicine is taken.
///
/// Stored as a bitmask: bit 0 is Monday through bit 6 for Sunday.
/// Serialises as the raw mask so records round-trip with the mobile client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct DaysOfWeek(u8);

impl DaysOfWeek {
    pub const NONE: Self = Self(0);
    pub const WEEKDAYS: Self = Self(0b0001_1111);
    pub const WEEKENDS: Self = Self(0b0110_0000);
    pub const EVERY_DAY: Self = Self(ALL_BITS);

    /// Build from a raw mask. The unused high bit is dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & ALL_BITS)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= bit(day);
    }

    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !bit(day);
    }

    /// Days in the set, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        ORDERED.into_iter().filter(move |d| self.contains(*d))
    }
}

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

impl From<u8> for DaysOfWeek {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl From<DaysOfWeek> for u8 {
    fn from(days: DaysOfWeek) -> Self {
        days.0
    }
}

impl FromIterator<Weekday> for DaysOfWeek {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut days = Self::NONE;
        for day in iter {
            days.insert(day);
        }
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_is_lowest_bit() {
        let days: DaysOfWeek = [Weekday::Mon].into_iter().collect();
        assert_eq!(days.bits(), 0b0000_0001);
        let days: DaysOfWeek = [Weekday::Sun].into_iter().collect();
        assert_eq!(days.bits(), 0b0100_0000);
    }

    #[test]
    fn high_bit_is_masked_off() {
        assert_eq!(DaysOfWeek::from_bits(0xFF), DaysOfWeek::EVERY_DAY);
        assert_eq!(DaysOfWeek::from(0b1000_0000), DaysOfWeek::NONE);
    }

    #[test]
    fn weekdays_and_weekends_partition_the_week() {
        assert_eq!(
            DaysOfWeek::WEEKDAYS.bits() | DaysOfWeek::WEEKENDS.bits(),
            DaysOfWeek::EVERY_DAY.bits()
        );
        assert_eq!(DaysOfWeek::WEEKDAYS.bits() & DaysOfWeek::WEEKENDS.bits(), 0);
        assert_eq!(DaysOfWeek::WEEKDAYS.len(), 5);
        assert_eq!(DaysOfWeek::WEEKENDS.len(), 2);
    }

    #[test]
    fn insert_and_remove() {
        let mut days = DaysOfWeek::NONE;
        assert!(days.is_empty());
        days.insert(Weekday::Wed);
        days.insert(Weekday::Wed);
        assert!(days.contains(Weekday::Wed));
        assert_eq!(days.len(), 1);
        days.remove(Weekday::Wed);
        assert!(days.is_empty());
    }

    #[test]
    fn iter_is_monday_first() {
        let days: DaysOfWeek = [Weekday::Sun, Weekday::Fri, Weekday::Mon]
            .into_iter()
            .collect();
        let listed: Vec<Weekday> = days.iter().collect();
        assert_eq!(listed, vec![Weekday::Mon, Weekday::Fri, Weekday::Sun]);
    }

    #[test]
    fn serializes_as_raw_mask() {
        let json = serde_json::to_string(&DaysOfWeek::WEEKENDS).unwrap();
        assert_eq!(json, "96");
        let back: DaysOfWeek = serde_json::from_str("255").unwrap();
        assert_eq!(back, DaysOfWeek::EVERY_DAY);
    }
}
