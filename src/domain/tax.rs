use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// An inclusive age range mapped to a price multiplier.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct TaxBracket {
    pub from: u32,
    pub to: u32,
    pub multiplier: Decimal,
}

impl TaxBracket {
    pub fn new(from: u32, to: u32, multiplier: Decimal) -> Self {
        Self {
            from,
            to,
            multiplier,
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        (self.from..=self.to).contains(&age)
    }
}

/// Ordered table of age brackets.
///
/// Construction validates the table: every bracket is well formed, brackets are
/// sorted by age, and consecutive brackets neither overlap nor leave a gap. Any
/// age inside [`TaxSchedule::covered_ages`] therefore matches exactly one
/// bracket. Ages outside that span have no rate.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self> {
        if brackets.is_empty() {
            return Err(RentalError::InvalidSchedule(
                "schedule must contain at least one bracket".to_string(),
            ));
        }

        for bracket in &brackets {
            if bracket.from > bracket.to {
                return Err(RentalError::InvalidSchedule(format!(
                    "bracket {}-{} has its bounds reversed",
                    bracket.from, bracket.to
                )));
            }
            if bracket.multiplier <= Decimal::ZERO {
                return Err(RentalError::InvalidSchedule(format!(
                    "bracket {}-{} has non-positive multiplier {}",
                    bracket.from, bracket.to, bracket.multiplier
                )));
            }
        }

        for pair in brackets.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.from <= prev.to {
                return Err(RentalError::InvalidSchedule(format!(
                    "bracket {}-{} overlaps or precedes bracket {}-{}",
                    next.from, next.to, prev.from, prev.to
                )));
            }
            if next.from != prev.to + 1 {
                return Err(RentalError::InvalidSchedule(format!(
                    "ages {}-{} are not covered",
                    prev.to + 1,
                    next.from - 1
                )));
            }
        }

        Ok(Self { brackets })
    }

    /// Multiplier of the first bracket containing `age`.
    pub fn rate_for(&self, age: u32) -> Result<Decimal> {
        self.brackets
            .iter()
            .find(|bracket| bracket.contains(age))
            .map(|bracket| bracket.multiplier)
            .ok_or(RentalError::NoMatchingBracket(age))
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// The span of ages that have a rate.
    pub fn covered_ages(&self) -> RangeInclusive<u32> {
        // `new` rejects empty schedules
        let first = self.brackets[0].from;
        let last = self.brackets[self.brackets.len() - 1].to;
        first..=last
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(18, 25, dec!(1.1)),
                TaxBracket::new(26, 30, dec!(1.5)),
                TaxBracket::new(31, 100, dec!(1.3)),
            ],
        }
    }
}

impl TryFrom<Vec<TaxBracket>> for TaxSchedule {
    type Error = RentalError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self> {
        Self::new(brackets)
    }
}

impl From<TaxSchedule> for Vec<TaxBracket> {
    fn from(schedule: TaxSchedule) -> Self {
        schedule.brackets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_rates() {
        let schedule = TaxSchedule::default();
        assert_eq!(schedule.rate_for(18).unwrap(), dec!(1.1));
        assert_eq!(schedule.rate_for(20).unwrap(), dec!(1.1));
        assert_eq!(schedule.rate_for(25).unwrap(), dec!(1.1));
        assert_eq!(schedule.rate_for(26).unwrap(), dec!(1.5));
        assert_eq!(schedule.rate_for(30).unwrap(), dec!(1.5));
        assert_eq!(schedule.rate_for(31).unwrap(), dec!(1.3));
        assert_eq!(schedule.rate_for(100).unwrap(), dec!(1.3));
    }

    #[test]
    fn test_default_schedule_passes_validation() {
        let default = TaxSchedule::default();
        let validated = TaxSchedule::new(default.brackets().to_vec()).unwrap();
        assert_eq!(validated, default);
        assert_eq!(validated.covered_ages(), 18..=100);
    }

    #[test]
    fn test_every_covered_age_matches_exactly_one_bracket() {
        let schedule = TaxSchedule::default();
        for age in schedule.covered_ages() {
            let matches = schedule
                .brackets()
                .iter()
                .filter(|b| b.contains(age))
                .count();
            assert_eq!(matches, 1, "age {age}");
        }
    }

    #[test]
    fn test_age_outside_schedule_has_no_rate() {
        let schedule = TaxSchedule::default();
        assert!(matches!(
            schedule.rate_for(17),
            Err(RentalError::NoMatchingBracket(17))
        ));
        assert!(matches!(
            schedule.rate_for(101),
            Err(RentalError::NoMatchingBracket(101))
        ));
    }

    #[test]
    fn test_single_bracket_schedule() {
        let schedule = TaxSchedule::new(vec![TaxBracket::new(31, 100, dec!(1.3))]).unwrap();
        assert_eq!(schedule.rate_for(50).unwrap(), dec!(1.3));
        assert!(schedule.rate_for(30).is_err());
    }

    #[test]
    fn test_rejects_empty_schedule() {
        assert!(matches!(
            TaxSchedule::new(vec![]),
            Err(RentalError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_rejects_reversed_bounds() {
        let result = TaxSchedule::new(vec![TaxBracket::new(30, 18, dec!(1.1))]);
        assert!(matches!(result, Err(RentalError::InvalidSchedule(_))));
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let result = TaxSchedule::new(vec![TaxBracket::new(18, 30, dec!(0))]);
        assert!(matches!(result, Err(RentalError::InvalidSchedule(_))));
    }

    #[test]
    fn test_rejects_overlap() {
        let result = TaxSchedule::new(vec![
            TaxBracket::new(18, 25, dec!(1.1)),
            TaxBracket::new(25, 30, dec!(1.5)),
        ]);
        assert!(matches!(result, Err(RentalError::InvalidSchedule(_))));
    }

    #[test]
    fn test_rejects_unsorted() {
        let result = TaxSchedule::new(vec![
            TaxBracket::new(26, 30, dec!(1.5)),
            TaxBracket::new(18, 25, dec!(1.1)),
        ]);
        assert!(matches!(result, Err(RentalError::InvalidSchedule(_))));
    }

    #[test]
    fn test_rejects_gap() {
        let result = TaxSchedule::new(vec![
            TaxBracket::new(18, 25, dec!(1.1)),
            TaxBracket::new(27, 30, dec!(1.5)),
        ]);
        match result {
            Err(RentalError::InvalidSchedule(msg)) => assert!(msg.contains("26-26")),
            other => panic!("expected gap error, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialization_validates() {
        let valid = r#"[{"from": 18, "to": 99, "multiplier": "1.2"}]"#;
        let schedule: TaxSchedule = serde_json::from_str(valid).unwrap();
        assert_eq!(schedule.rate_for(40).unwrap(), dec!(1.2));

        let gap = r#"[
            {"from": 18, "to": 20, "multiplier": "1.2"},
            {"from": 30, "to": 99, "multiplier": "1.2"}
        ]"#;
        assert!(serde_json::from_str::<TaxSchedule>(gap).is_err());
    }
}
