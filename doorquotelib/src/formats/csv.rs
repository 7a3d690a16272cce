//! CSV-файл записей. Заголовок:
//! id,height_entered,width_entered,rounded_height,rounded_width,square_feet,coatings
//!
//! Покрытия — коды через `|` (`single|laminate`).

use crate::{
    error::{QuoteError, Result},
    model::{CoatingSelection, DoorEntry, RoundedDimensionPair},
};
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    id: u64,
    height_entered: String,
    width_entered: String,
    rounded_height: u32,
    rounded_width: u32,
    square_feet: String,
    #[serde(default)]
    coatings: Option<String>,
}

#[derive(serde::Serialize)]
struct CsvOutRow {
    id: u64,
    height_entered: String,
    width_entered: String,
    rounded_height: u32,
    rounded_width: u32,
    square_feet: String,
    coatings: String,
}

pub struct Csv;

fn positive(field: &str, raw: &str) -> Result<Decimal> {
    let v: Decimal = raw
        .trim()
        .parse()
        .map_err(|e| QuoteError::Parse(format!("{field}: {e}")))?;
    if v <= Decimal::ZERO {
        return Err(QuoteError::Parse(format!("{field}: must be positive, got {v}")));
    }
    Ok(v)
}

impl crate::traits::ReadEntries for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<DoorEntry>> {
        let mut rdr = ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_reader(r);
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;
            if !seen.insert(row.id) {
                return Err(QuoteError::Parse(format!("entry {}: duplicate id", row.id)));
            }
            if row.rounded_height == 0 || row.rounded_width == 0 {
                return Err(QuoteError::Parse(format!("entry {}: rounded size must be positive", row.id)));
            }
            entries.push(DoorEntry {
                id: row.id,
                height_entered: positive("height_entered", &row.height_entered)?,
                width_entered: positive("width_entered", &row.width_entered)?,
                rounded: RoundedDimensionPair::new(row.rounded_height, row.rounded_width),
                // площадь берём как сохранена, не пересчитываем
                square_feet: positive("square_feet", &row.square_feet)?,
                coatings: CoatingSelection::parse_codes(row.coatings.as_deref().unwrap_or_default())?,
            });
        }

        Ok(entries)
    }
}

impl crate::traits::WriteEntries for Csv {
    fn write<W: Write>(mut w: W, entries: &[DoorEntry]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for e in entries {
            wrt.serialize(CsvOutRow {
                id: e.id,
                height_entered: e.height_entered.to_string(),
                width_entered: e.width_entered.to_string(),
                rounded_height: e.rounded.height,
                rounded_width: e.rounded.width,
                square_feet: e.square_feet.to_string(),
                coatings: e.coatings.to_codes(),
            })?;
        }
        wrt.flush()?;
        Ok(())
    }
}
