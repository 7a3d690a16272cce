//! doorquotelib — расчёт смет на покрытие дверей: разбор размеров, округление
//! до столярных стандартов, площадь, стоимость по видам покрытия, итоги.

pub mod error;
pub mod model;
pub mod traits;
pub mod config;

pub mod dimension;
pub mod rounding;
pub mod pricing;
pub mod aggregate;
pub mod quotation;
pub mod store;

pub mod formats {
    pub mod csv;
    pub mod text;
    pub mod xml;
}

pub use aggregate::aggregate;
pub use dimension::{format_dimension, parse_dimension};
pub use pricing::{amount_for_coating, square_feet, RateTable};
pub use rounding::round_dimensions;
