use super::ports::CurrencyFormatter;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places used for every displayed amount.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to cents, halves away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Locale-fixed currency rendering: symbol prefix, grouped thousands and two
/// decimal places.
///
/// The default renders US dollars, e.g. `$1,234.50`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub group_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_separator: '.',
            group_separator: ',',
        }
    }
}

impl CurrencyFormatter for CurrencyFormat {
    fn format(&self, amount: Decimal) -> String {
        let mut rounded = round_money(amount);
        rounded.rescale(MONEY_SCALE);

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = rounded.abs().to_string();
        let (units, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }

        format!(
            "{sign}{}{grouped}{}{cents}",
            self.symbol, self.decimal_separator
        )
    }
}
