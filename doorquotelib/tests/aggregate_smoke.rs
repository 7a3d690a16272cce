use doorquotelib::aggregate::{aggregate, group_by_size, price_entry};
use doorquotelib::dimension::parse_inches;
use doorquotelib::model::{CoatingKind, CoatingSelection, DoorEntry, NewDoorEntry, PricingMode};
use doorquotelib::pricing::RateTable;
use rust_decimal::Decimal;

fn door(id: u64, height: &str, width: &str, coatings: &[CoatingKind]) -> DoorEntry {
    DoorEntry::create(
        id,
        NewDoorEntry {
            height: parse_inches(height).unwrap(),
            width: parse_inches(width).unwrap(),
            coatings: coatings.iter().copied().collect(),
        },
    )
}

#[test]
fn empty_collection_gives_zero_totals() {
    let rates = RateTable::default();

    let all = aggregate(&[], &rates, PricingMode::AllKinds);
    assert_eq!(all.entries, 0);
    assert_eq!(all.total_square_feet, Decimal::ZERO);
    assert_eq!(all.amounts.len(), 4);
    assert!(all.amounts.values().all(|a| a.is_zero()));
    assert_eq!(all.grand_total, None);

    let selected = aggregate(&[], &rates, PricingMode::Selected);
    assert_eq!(selected.grand_total, Some(Decimal::ZERO));
}

#[test]
fn all_kinds_prices_every_door() {
    let entries = vec![
        door(1, "79 1/4", "30 3/8", &[]),
        door(2, "75", "38.5", &[CoatingKind::Single]),
    ];
    assert_eq!(entries[0].rounded.height, 80);
    assert_eq!(entries[0].rounded.width, 32);
    assert_eq!(entries[1].rounded.height, 80);
    assert_eq!(entries[1].rounded.width, 40);

    let t = aggregate(&entries, &RateTable::default(), PricingMode::AllKinds);
    assert_eq!(t.entries, 2);
    assert_eq!(t.total_square_feet, entries[0].square_feet + entries[1].square_feet);
    assert_eq!(t.amount(CoatingKind::Single), Decimal::from(3289 + 4111));
    assert_eq!(t.amount(CoatingKind::Laminate), Decimal::from(8000 + 10000));
    assert_eq!(t.grand_total, None);
}

#[test]
fn selected_mode_prices_only_chosen_kinds() {
    let entries = vec![
        door(1, "79 1/4", "30 3/8", &[CoatingKind::Single]),
        door(2, "75", "38.5", &[CoatingKind::Single, CoatingKind::Laminate]),
        door(3, "80", "36", &[]),
    ];
    let t = aggregate(&entries, &RateTable::default(), PricingMode::Selected);
    assert_eq!(t.amount(CoatingKind::Single), Decimal::from(7400));
    assert_eq!(t.amount(CoatingKind::Laminate), Decimal::from(10000));
    assert_eq!(t.amount(CoatingKind::Double), Decimal::ZERO);
    assert_eq!(t.grand_total, Some(Decimal::from(17400)));
    // площадь двери без покрытий всё равно входит в общую
    assert_eq!(t.total_square_feet, entries.iter().map(|e| e.square_feet).sum::<Decimal>());
}

#[test]
fn amounts_are_rounded_per_door_before_summing() {
    let rates = RateTable {
        single: Decimal::ONE,
        ..RateTable::default()
    };
    // 75×30 → 15.625 кв. фута → 16 за дверь
    let entries = vec![door(1, "75", "30", &[]), door(2, "75", "30", &[])];
    let t = aggregate(&entries, &rates, PricingMode::AllKinds);
    assert_eq!(t.amount(CoatingKind::Single), Decimal::from(32));
}

#[test]
fn totals_are_additive_over_disjoint_collections() {
    let rates = RateTable::default();
    let a = vec![door(1, "79 1/4", "30 3/8", &[CoatingKind::Double]), door(2, "70", "37", &[])];
    let b = vec![door(3, "82", "45", &[CoatingKind::Laminate]), door(4, "72", "30", &[CoatingKind::Single])];
    let both: Vec<DoorEntry> = a.iter().chain(b.iter()).cloned().collect();

    for mode in [PricingMode::AllKinds, PricingMode::Selected] {
        let ta = aggregate(&a, &rates, mode);
        let tb = aggregate(&b, &rates, mode);
        let tab = aggregate(&both, &rates, mode);
        assert_eq!(tab.total_square_feet, ta.total_square_feet + tb.total_square_feet);
        for kind in CoatingKind::ALL {
            assert_eq!(tab.amount(kind), ta.amount(kind) + tb.amount(kind));
        }
        assert_eq!(tab, aggregate(&both, &rates, mode));
    }
}

#[test]
fn price_entry_uses_entered_display_and_rounded_area() {
    let e = door(7, "79 1/4", "30 3/8", &[CoatingKind::DoubleSagwan]);
    let line = price_entry(&e, &RateTable::default(), PricingMode::Selected);
    assert_eq!(line.id, 7);
    assert_eq!(line.height_display, "79 2/8");
    assert_eq!(line.width_display, "30 3/8");
    assert_eq!(line.amounts.len(), 1);
    assert_eq!(line.amounts[&CoatingKind::DoubleSagwan], Decimal::from(4800));

    let line = price_entry(&e, &RateTable::default(), PricingMode::AllKinds);
    assert_eq!(line.amounts.len(), 4);
}

#[test]
fn grouping_uses_entered_size_and_keeps_coatings_apart() {
    let entries = vec![
        door(1, "78", "30", &[CoatingKind::Single]),
        door(2, "77", "29", &[CoatingKind::Single]),
        door(3, "78", "30", &[CoatingKind::Single]),
        door(4, "78", "30", &[CoatingKind::Laminate]),
    ];
    // 1–3 округляются одинаково, но введены по-разному
    assert_eq!(entries[0].rounded, entries[1].rounded);

    let groups = group_by_size(&entries);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].quantity(), 2);
    assert_eq!(groups[0].members.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(groups[1].quantity(), 1);
    assert_eq!(groups[2].coatings, CoatingSelection::from(CoatingKind::Laminate));

    let members: usize = groups.iter().map(|g| g.quantity()).sum();
    assert_eq!(members, entries.len());
    let sq: Decimal = groups.iter().map(|g| g.total_square_feet()).sum();
    assert_eq!(sq, aggregate(&entries, &RateTable::default(), PricingMode::AllKinds).total_square_feet);
}
