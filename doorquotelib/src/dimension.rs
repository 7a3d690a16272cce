//! Разбор размеров двери: десятичные дюймы (`78.25`) или смешанная дробь в
//! восьмых (`78 2/8`, `79 1/4`), и обратное преобразование для показа.

use crate::{
    error::{QuoteError, Result},
    model::{Inches, ParsedDimension},
};
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::OnceLock;

fn decimal_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+(?:\.\d+)?)$").ok()).as_ref()
}

fn fraction_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\s+(\d+)/(\d+)$").ok()).as_ref()
}

/// Допуск при сверке дроби с шагом в 1/8.
fn eighth_tolerance() -> Decimal {
    Decimal::new(1, 3)
}

fn round_half_up(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

pub fn parse_dimension(text: &str) -> ParsedDimension {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedDimension::invalid(trimmed);
    }

    if let Some(caps) = decimal_re().and_then(|re| re.captures(trimmed)) {
        if let Ok(value) = Decimal::from_str_exact(&caps[1]) {
            if value > Decimal::ZERO {
                return ParsedDimension {
                    value,
                    display: trimmed.to_string(),
                    valid: true,
                };
            }
        }
        return ParsedDimension::invalid(trimmed);
    }

    if let Some(caps) = fraction_re().and_then(|re| re.captures(trimmed)) {
        if let Some(value) = mixed_eighths(&caps[1], &caps[2], &caps[3]) {
            return ParsedDimension {
                value,
                display: trimmed.to_string(),
                valid: true,
            };
        }
    }

    ParsedDimension::invalid(trimmed)
}

/// `whole num/den` → `whole + k/8`, если дробь равна k/8 (k ∈ 1..=7).
fn mixed_eighths(whole: &str, num: &str, den: &str) -> Option<Decimal> {
    let whole = Decimal::from_str_exact(whole).ok()?;
    let num: u32 = num.parse().ok()?;
    let den: u32 = den.parse().ok()?;
    if den == 0 {
        return None;
    }

    let eight = Decimal::from(8);
    let fraction = Decimal::from(num) / Decimal::from(den);
    let eighths = round_half_up(fraction * eight);
    if eighths < Decimal::ONE || eighths > Decimal::from(7) {
        return None;
    }
    if (fraction - eighths / eight).abs() >= eighth_tolerance() {
        return None;
    }

    // значение снимается на сетку восьмых, чтобы показ и разбор были взаимно обратны;
    // если у Decimal не хватает разрядов на восьмые, размер недопустим
    let step = eighths / eight;
    let value = whole.checked_add(step)?;
    if value - whole != step {
        return None;
    }
    (value > Decimal::ZERO).then_some(value)
}

/// Десятичное значение → `78 2/8` или `78`. Ближайшая восьмая; `8/8` переходит
/// в следующий дюйм.
pub fn format_dimension(value: Decimal) -> String {
    let whole = value.floor();
    let eighths = round_half_up((value - whole) * Decimal::from(8));

    if eighths.is_zero() {
        return whole.normalize().to_string();
    }
    if eighths == Decimal::from(8) {
        return (whole + Decimal::ONE).normalize().to_string();
    }
    format!("{} {}/8", whole.normalize(), eighths.normalize())
}

pub fn is_valid_dimension(text: &str) -> bool {
    let parsed = parse_dimension(text);
    parsed.valid && parsed.value > Decimal::ZERO
}

/// Разбор для слоя оркестрации: невалидный ввод становится ошибкой.
pub fn parse_inches(text: &str) -> Result<Inches> {
    parse_dimension(text)
        .inches()
        .ok_or_else(|| QuoteError::InvalidDimension(text.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_quarters_to_eighths() {
        assert_eq!(mixed_eighths("79", "1", "4"), Some(Decimal::new(7925, 2)));
        assert_eq!(mixed_eighths("30", "6", "16"), Some(Decimal::new(30375, 3)));
    }

    #[test]
    fn rejects_off_grid_fractions() {
        assert_eq!(mixed_eighths("30", "1", "3"), None);
        assert_eq!(mixed_eighths("30", "0", "8"), None);
        assert_eq!(mixed_eighths("30", "8", "8"), None);
        assert_eq!(mixed_eighths("30", "1", "0"), None);
    }
}
