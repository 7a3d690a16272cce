//! Настройки из TOML: ставки, режим оценки, файл записей.
//!
//! ```toml
//! mode = "selected"
//! store = "doors.csv"
//!
//! [rates]
//! single = 185
//! double = 220
//! double_sagwan = 270
//! laminate = 450
//! ```
//!
//! Все поля необязательны; отсутствующие берутся из `Default`.

use crate::{
    error::{QuoteError, Result},
    model::PricingMode,
    pricing::RateTable,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE: &str = "doorquote.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteConfig {
    pub mode: PricingMode,
    pub store: PathBuf,
    /// Таблица идёт последней: в TOML таблицы пишутся после простых значений.
    pub rates: RateTable,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            mode: PricingMode::default(),
            store: PathBuf::from(DEFAULT_STORE),
            rates: RateTable::default(),
        }
    }
}

impl QuoteConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| QuoteError::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| QuoteError::Config(format!("TOML write error: {e}")))
    }

    fn validate(&self) -> Result<()> {
        for kind in crate::model::CoatingKind::ALL {
            if self.rates.rate(kind) <= Decimal::ZERO {
                return Err(QuoteError::Config(format!("rate for {kind} must be positive")));
            }
        }
        Ok(())
    }
}
