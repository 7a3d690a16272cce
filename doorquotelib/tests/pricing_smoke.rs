use doorquotelib::model::{CoatingKind, RoundedDimensionPair};
use doorquotelib::pricing::{amount_for_coating, amounts_for_all, square_feet, RateTable};
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

#[test]
fn square_feet_is_area_over_144() {
    let sq = square_feet(RoundedDimensionPair::new(80, 40));
    assert_eq!(sq, Decimal::from(3200) / Decimal::from(144));
    assert!((sq - d("22.22")).abs() < d("0.01"));
    assert_eq!(square_feet(RoundedDimensionPair::new(72, 30)), Decimal::from(15));
}

#[test]
fn amount_rounds_to_whole_rupees() {
    let rates = RateTable::default();
    assert_eq!(amount_for_coating(d("22.22"), CoatingKind::Single, &rates), Decimal::from(4111));

    let sq = square_feet(RoundedDimensionPair::new(80, 40));
    assert_eq!(amount_for_coating(sq, CoatingKind::Single, &rates), Decimal::from(4111));
    assert_eq!(amount_for_coating(sq, CoatingKind::Laminate, &rates), Decimal::from(10000));
}

#[test]
fn midpoint_rounds_up() {
    let rates = RateTable {
        single: d("0.5"),
        ..RateTable::default()
    };
    assert_eq!(amount_for_coating(Decimal::ONE, CoatingKind::Single, &rates), Decimal::ONE);
    assert_eq!(amount_for_coating(Decimal::from(3), CoatingKind::Single, &rates), Decimal::from(2));
}

#[test]
fn all_kinds_for_80x32() {
    let sq = square_feet(RoundedDimensionPair::new(80, 32));
    let amounts = amounts_for_all(sq, &RateTable::default());
    assert_eq!(amounts.len(), 4);
    assert_eq!(amounts[&CoatingKind::Single], Decimal::from(3289));
    assert_eq!(amounts[&CoatingKind::Double], Decimal::from(3911));
    assert_eq!(amounts[&CoatingKind::DoubleSagwan], Decimal::from(4800));
    assert_eq!(amounts[&CoatingKind::Laminate], Decimal::from(8000));
}

#[test]
fn legacy_rates_are_injectable() {
    let legacy = RateTable::legacy();
    assert_eq!(legacy.rate(CoatingKind::Single), Decimal::from(165));
    assert_eq!(legacy.rate(CoatingKind::Laminate), Decimal::from(240));

    let sq = square_feet(RoundedDimensionPair::new(80, 40));
    assert_eq!(amount_for_coating(sq, CoatingKind::Single, &legacy), Decimal::from(3667));
    // текущий прайс не затронут
    assert_eq!(amount_for_coating(sq, CoatingKind::Single, &RateTable::default()), Decimal::from(4111));
}
