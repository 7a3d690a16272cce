//! Площадь и стоимость покрытия.

use crate::model::{CoatingKind, RoundedDimensionPair};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const SQUARE_INCHES_PER_FOOT: u32 = 144;

/// Ставки в рупиях за кв. фут. Передаётся явно; глобальных ставок нет.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateTable {
    pub single: Decimal,
    pub double: Decimal,
    pub double_sagwan: Decimal,
    pub laminate: Decimal,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            single: Decimal::from(185),
            double: Decimal::from(220),
            double_sagwan: Decimal::from(270),
            laminate: Decimal::from(450),
        }
    }
}

impl RateTable {
    /// Прежний прайс, до последнего повышения.
    pub fn legacy() -> Self {
        Self {
            single: Decimal::from(165),
            double: Decimal::from(185),
            double_sagwan: Decimal::from(210),
            laminate: Decimal::from(240),
        }
    }

    pub fn rate(&self, kind: CoatingKind) -> Decimal {
        match kind {
            CoatingKind::Single => self.single,
            CoatingKind::Double => self.double,
            CoatingKind::DoubleSagwan => self.double_sagwan,
            CoatingKind::Laminate => self.laminate,
        }
    }
}

/// `(высота × ширина) / 144`, без округления результата.
pub fn square_feet(rounded: RoundedDimensionPair) -> Decimal {
    Decimal::from(rounded.height) * Decimal::from(rounded.width) / Decimal::from(SQUARE_INCHES_PER_FOOT)
}

/// Сумма за одну дверь, округлённая до целой рупии. Округление только здесь.
pub fn amount_for_coating(square_feet: Decimal, kind: CoatingKind, rates: &RateTable) -> Decimal {
    (square_feet * rates.rate(kind)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

pub fn amounts_for_all(square_feet: Decimal, rates: &RateTable) -> BTreeMap<CoatingKind, Decimal> {
    CoatingKind::ALL
        .into_iter()
        .map(|kind| (kind, amount_for_coating(square_feet, kind, rates)))
        .collect()
}
