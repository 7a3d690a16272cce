//! Округление размеров до стандартных столярных размеров.
//!
//! Правила собраны в упорядоченную таблицу с версией: первое сработавшее
//! правило определяет результат. Округлённая пара нужна только для расчёта
//! площади и стоимости; введённые размеры остаются как есть.

use crate::model::{Inches, RoundedDimensionPair};
use rust_decimal::Decimal;
use tracing::debug;

/// Какое правило дало результат.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleTag {
    /// 38 < ширина ≤ 40 при высоте < 80 → 40×80.
    Combined40x80,
    /// 36 < ширина ≤ 38 при высоте < 78 → 38×78.
    Combined38x78,
    /// Высота и ширина по отдельным лестницам.
    Stepped,
}

#[derive(Debug, Clone, Copy)]
pub enum RuleOutcome {
    Fixed(RoundedDimensionPair),
    Stepped,
}

#[derive(Debug, Clone, Copy)]
pub struct RoundingRule {
    pub tag: RuleTag,
    /// Предикат `(width, height)`.
    pub matches: fn(Decimal, Decimal) -> bool,
    pub outcome: RuleOutcome,
}

#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub version: &'static str,
    pub rules: &'static [RoundingRule],
}

/// Пороги `(≤ предел, результат)`; просматриваются снизу вверх.
pub const HEIGHT_STEPS: &[(u32, u32)] = &[(72, 72), (75, 75), (78, 78), (80, 80), (84, 84)];
pub const HEIGHT_FALLBACK: u32 = 84;

pub const WIDTH_STEPS: &[(u32, u32)] = &[
    (30, 30),
    (32, 32),
    (34, 34),
    (36, 36),
    (38, 38),
    (40, 40),
    (42, 42),
    (78, 48),
    (80, 80),
    (84, 84),
];
pub const WIDTH_FALLBACK: u32 = 84;

fn gt(v: Decimal, limit: u32) -> bool {
    v > Decimal::from(limit)
}

fn le(v: Decimal, limit: u32) -> bool {
    v <= Decimal::from(limit)
}

fn lt(v: Decimal, limit: u32) -> bool {
    v < Decimal::from(limit)
}

fn rule_40x80(width: Decimal, height: Decimal) -> bool {
    gt(width, 38) && le(width, 40) && lt(height, 80)
}

fn rule_38x78(width: Decimal, height: Decimal) -> bool {
    gt(width, 36) && le(width, 38) && lt(height, 78)
}

fn always(_: Decimal, _: Decimal) -> bool {
    true
}

static CANONICAL_RULES: [RoundingRule; 3] = [
    RoundingRule {
        tag: RuleTag::Combined40x80,
        matches: rule_40x80,
        outcome: RuleOutcome::Fixed(RoundedDimensionPair::new(80, 40)),
    },
    RoundingRule {
        tag: RuleTag::Combined38x78,
        matches: rule_38x78,
        outcome: RuleOutcome::Fixed(RoundedDimensionPair::new(78, 38)),
    },
    RoundingRule {
        tag: RuleTag::Stepped,
        matches: always,
        outcome: RuleOutcome::Stepped,
    },
];

pub static CANONICAL: RuleSet = RuleSet {
    version: "2",
    rules: &CANONICAL_RULES,
};

fn step(value: Decimal, steps: &[(u32, u32)], fallback: u32) -> u32 {
    steps
        .iter()
        .find(|(limit, _)| le(value, *limit))
        .map(|(_, rounded)| *rounded)
        .unwrap_or(fallback)
}

pub fn round_height(height: Decimal) -> u32 {
    step(height, HEIGHT_STEPS, HEIGHT_FALLBACK)
}

pub fn round_width(width: Decimal) -> u32 {
    step(width, WIDTH_STEPS, WIDTH_FALLBACK)
}

impl RuleSet {
    /// Первое сработавшее правило. Последнее правило таблицы всегда срабатывает,
    /// поэтому для пустой или неполной таблицы используется лестница.
    pub fn apply(&self, width: Inches, height: Inches) -> (RoundedDimensionPair, RuleTag) {
        let (w, h) = (width.get(), height.get());
        let (outcome, tag) = self
            .rules
            .iter()
            .find(|rule| (rule.matches)(w, h))
            .map(|rule| (rule.outcome, rule.tag))
            .unwrap_or((RuleOutcome::Stepped, RuleTag::Stepped));

        let pair = match outcome {
            RuleOutcome::Fixed(pair) => pair,
            RuleOutcome::Stepped => RoundedDimensionPair::new(round_height(h), round_width(w)),
        };
        debug!(
            version = self.version,
            rule = ?tag,
            width = %w,
            height = %h,
            rounded = %pair,
            "rounded door size"
        );
        (pair, tag)
    }
}

pub fn round_dimensions(width: Inches, height: Inches) -> RoundedDimensionPair {
    CANONICAL.apply(width, height).0
}

pub fn round_dimensions_traced(width: Inches, height: Inches) -> (RoundedDimensionPair, RuleTag) {
    CANONICAL.apply(width, height)
}
