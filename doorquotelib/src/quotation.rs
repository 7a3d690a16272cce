//! Сборка сметы для печати/отправки: строки по дверям, итоги, реквизиты клиента.
//!
//! Сам документ рисуют форматы (`formats::text`, `formats::xml`); здесь только
//! данные, посчитанные ядром.

use crate::{
    aggregate::{aggregate, price_entry, EntryQuote},
    model::{AggregateTotals, DoorEntry, PricingMode},
    pricing::RateTable,
};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub mobile: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotation {
    pub customer: Customer,
    pub date: NaiveDate,
    pub rates: RateTable,
    pub mode: PricingMode,
    pub lines: Vec<EntryQuote>,
    pub totals: AggregateTotals,
}

impl Quotation {
    pub fn assemble(
        customer: Customer,
        date: NaiveDate,
        entries: &[DoorEntry],
        rates: &RateTable,
        mode: PricingMode,
    ) -> Self {
        Self {
            customer,
            date,
            rates: rates.clone(),
            mode,
            lines: entries.iter().map(|e| price_entry(e, rates, mode)).collect(),
            totals: aggregate(entries, rates, mode),
        }
    }
}

pub const NOTE: &str = "Calculations are done as per standard carpenter rules. Entered sizes are shown for reference.";

/// Две цифры после точки, как в печатной смете.
pub fn format_square_feet(sq_ft: Decimal) -> String {
    format!(
        "{:.2}",
        sq_ft.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Целые рупии с индийской группировкой разрядов: 12,34,567.
pub fn format_rupees(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().normalize().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, last3) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (h, t) = rest.split_at(rest.len() - 2);
            parts.push(t);
            rest = h;
        }
        parts.push(rest);
        parts.reverse();
        format!("{},{last3}", parts.join(","))
    };

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping() {
        assert_eq!(format_rupees(Decimal::from(0)), "0");
        assert_eq!(format_rupees(Decimal::from(999)), "999");
        assert_eq!(format_rupees(Decimal::from(4111)), "4,111");
        assert_eq!(format_rupees(Decimal::from(123456)), "1,23,456");
        assert_eq!(format_rupees(Decimal::from(1234567)), "12,34,567");
        assert_eq!(format_rupees(Decimal::new(32888, 1)), "3,289");
    }

    #[test]
    fn square_feet_two_places() {
        assert_eq!(format_square_feet(Decimal::from(17)), "17.00");
        assert_eq!(format_square_feet(Decimal::from(80 * 32) / Decimal::from(144)), "17.78");
    }
}
