//! Итоги по набору записей: площадь и суммы по видам покрытия.
//!
//! Суммы округляются по каждой двери отдельно, затем складываются.

use crate::{
    model::{AggregateTotals, CoatingKind, CoatingSelection, DoorEntry, PricingMode, RoundedDimensionPair},
    pricing::{amount_for_coating, RateTable},
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Строка сметы по одной двери.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuote {
    pub id: u64,
    pub height_display: String,
    pub width_display: String,
    pub rounded: RoundedDimensionPair,
    pub square_feet: Decimal,
    pub amounts: BTreeMap<CoatingKind, Decimal>,
}

fn priced_kinds(entry: &DoorEntry, mode: PricingMode) -> Vec<CoatingKind> {
    match mode {
        PricingMode::AllKinds => CoatingKind::ALL.to_vec(),
        PricingMode::Selected => entry.coatings.iter().collect(),
    }
}

pub fn price_entry(entry: &DoorEntry, rates: &RateTable, mode: PricingMode) -> EntryQuote {
    EntryQuote {
        id: entry.id,
        height_display: entry.height_display(),
        width_display: entry.width_display(),
        rounded: entry.rounded,
        square_feet: entry.square_feet,
        amounts: priced_kinds(entry, mode)
            .into_iter()
            .map(|kind| (kind, amount_for_coating(entry.square_feet, kind, rates)))
            .collect(),
    }
}

pub fn aggregate(entries: &[DoorEntry], rates: &RateTable, mode: PricingMode) -> AggregateTotals {
    let mut amounts: BTreeMap<CoatingKind, Decimal> =
        CoatingKind::ALL.into_iter().map(|kind| (kind, Decimal::ZERO)).collect();
    let mut total_square_feet = Decimal::ZERO;

    for entry in entries {
        total_square_feet += entry.square_feet;
        for kind in priced_kinds(entry, mode) {
            *amounts.entry(kind).or_insert(Decimal::ZERO) += amount_for_coating(entry.square_feet, kind, rates);
        }
    }

    let grand_total = match mode {
        PricingMode::Selected => Some(amounts.values().copied().sum()),
        PricingMode::AllKinds => None,
    };

    AggregateTotals {
        entries: entries.len(),
        total_square_feet,
        amounts,
        grand_total,
    }
}

/// Двери одного введённого размера и одного набора покрытий.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeGroup {
    pub height_entered: Decimal,
    pub width_entered: Decimal,
    pub coatings: CoatingSelection,
    pub members: Vec<DoorEntry>,
}

impl SizeGroup {
    pub fn quantity(&self) -> usize {
        self.members.len()
    }

    pub fn total_square_feet(&self) -> Decimal {
        self.members.iter().map(|e| e.square_feet).sum()
    }
}

/// Группировка по *введённым* размерам и набору покрытий, в порядке первого
/// появления. Ни одна запись не теряется и не учитывается дважды.
pub fn group_by_size(entries: &[DoorEntry]) -> Vec<SizeGroup> {
    let mut groups: Vec<SizeGroup> = Vec::new();
    for entry in entries {
        let existing = groups.iter_mut().find(|g| {
            g.height_entered == entry.height_entered
                && g.width_entered == entry.width_entered
                && g.coatings == entry.coatings
        });
        match existing {
            Some(group) => group.members.push(entry.clone()),
            None => groups.push(SizeGroup {
                height_entered: entry.height_entered,
                width_entered: entry.width_entered,
                coatings: entry.coatings.clone(),
                members: vec![entry.clone()],
            }),
        }
    }
    groups
}
