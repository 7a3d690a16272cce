//! Доменные модели — общий слой между ядром расчёта, хранилищем и форматами.

use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Результат разбора введённого размера. `valid == true` ⇒ `value > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDimension {
    pub value: Decimal,
    /// Текст ровно в том виде, как его ввели (после trim).
    pub display: String,
    pub valid: bool,
}

impl ParsedDimension {
    pub(crate) fn invalid(display: &str) -> Self {
        Self {
            value: Decimal::ZERO,
            display: display.to_string(),
            valid: false,
        }
    }

    pub fn inches(&self) -> Option<Inches> {
        if self.valid {
            Inches::new(self.value)
        } else {
            None
        }
    }
}

/// Строго положительное значение в дюймах — вход округлителя.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Inches(Decimal);

impl Inches {
    pub fn new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then_some(Self(value))
    }

    pub fn get(self) -> Decimal {
        self.0
    }
}

/// Стандартный (округлённый) размер: только для расчёта, не для показа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundedDimensionPair {
    pub height: u32,
    pub width: u32,
}

impl RoundedDimensionPair {
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }
}

impl fmt::Display for RoundedDimensionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoatingKind {
    Single,
    Double,
    DoubleSagwan,
    Laminate,
}

impl CoatingKind {
    pub const ALL: [CoatingKind; 4] = [
        CoatingKind::Single,
        CoatingKind::Double,
        CoatingKind::DoubleSagwan,
        CoatingKind::Laminate,
    ];

    /// Код для CSV, TOML и командной строки.
    pub fn code(self) -> &'static str {
        match self {
            CoatingKind::Single => "single",
            CoatingKind::Double => "double",
            CoatingKind::DoubleSagwan => "double_sagwan",
            CoatingKind::Laminate => "laminate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CoatingKind::Single => "Single Coating",
            CoatingKind::Double => "Double Coating",
            CoatingKind::DoubleSagwan => "Double Coating + Sagwan Patti",
            CoatingKind::Laminate => "Laminate",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            CoatingKind::Single => "Single",
            CoatingKind::Double => "Double",
            CoatingKind::DoubleSagwan => "D+Sagwan",
            CoatingKind::Laminate => "Laminate",
        }
    }
}

impl fmt::Display for CoatingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CoatingKind {
    type Err = QuoteError;

    /// Принимает и старые написания, встречавшиеся в сохранённых данных.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "single" | "singleCoating" => Ok(CoatingKind::Single),
            "double" | "double_" | "doubleCoating" => Ok(CoatingKind::Double),
            "double_sagwan" | "doubleSagwan" => Ok(CoatingKind::DoubleSagwan),
            "laminate" => Ok(CoatingKind::Laminate),
            other => Err(QuoteError::Parse(format!("unknown coating kind: {other}"))),
        }
    }
}

/// Набор выбранных покрытий двери. Порядок обхода — порядок объявления видов.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoatingSelection(BTreeSet<CoatingKind>);

impl CoatingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        CoatingKind::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, kind: CoatingKind) -> bool {
        self.0.insert(kind)
    }

    pub fn contains(&self, kind: CoatingKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = CoatingKind> + '_ {
        self.0.iter().copied()
    }

    /// `single|laminate` — представление для CSV.
    pub fn to_codes(&self) -> String {
        self.iter().map(CoatingKind::code).collect::<Vec<_>>().join("|")
    }

    pub fn parse_codes(s: &str) -> Result<Self> {
        s.split('|')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(CoatingKind::from_str)
            .collect()
    }
}

impl From<CoatingKind> for CoatingSelection {
    fn from(kind: CoatingKind) -> Self {
        let mut sel = Self::new();
        sel.insert(kind);
        sel
    }
}

impl FromIterator<CoatingKind> for CoatingSelection {
    fn from_iter<I: IntoIterator<Item = CoatingKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Запрос на создание записи: размеры уже проверены парсером.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoorEntry {
    pub height: Inches,
    pub width: Inches,
    pub coatings: CoatingSelection,
}

/// Сохранённая запись о двери.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorEntry {
    pub id: u64,
    pub height_entered: Decimal,
    pub width_entered: Decimal,
    pub rounded: RoundedDimensionPair,
    /// Считается только из `rounded`; из введённых размеров не пересчитывается.
    pub square_feet: Decimal,
    pub coatings: CoatingSelection,
}

impl DoorEntry {
    pub fn create(id: u64, new: NewDoorEntry) -> Self {
        let rounded = crate::rounding::round_dimensions(new.width, new.height);
        Self {
            id,
            height_entered: new.height.get(),
            width_entered: new.width.get(),
            rounded,
            square_feet: crate::pricing::square_feet(rounded),
            coatings: new.coatings,
        }
    }

    pub fn height_display(&self) -> String {
        crate::dimension::format_dimension(self.height_entered)
    }

    pub fn width_display(&self) -> String {
        crate::dimension::format_dimension(self.width_entered)
    }
}

/// Как оценивать записи при агрегации.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Каждая дверь оценивается всеми видами покрытия (сетка предложений).
    #[default]
    AllKinds,
    /// Только выбранные для двери покрытия.
    Selected,
}

/// Итоги по набору записей. Всегда пересчитываются, не хранятся.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateTotals {
    pub entries: usize,
    pub total_square_feet: Decimal,
    pub amounts: BTreeMap<CoatingKind, Decimal>,
    /// Сумма по всем видам; есть только в режиме `Selected`.
    pub grand_total: Option<Decimal>,
}

impl AggregateTotals {
    pub fn amount(&self, kind: CoatingKind) -> Decimal {
        self.amounts.get(&kind).copied().unwrap_or(Decimal::ZERO)
    }
}
