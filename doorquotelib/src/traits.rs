//! Трэйты чтения/записи списков дверей и вывода сметы на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::DoorEntry, quotation::Quotation};
use std::io::{BufRead, Write};

pub trait ReadEntries {
    fn read<R: BufRead>(r: R) -> Result<Vec<DoorEntry>>;
}

pub trait WriteEntries {
    fn write<W: Write>(w: W, entries: &[DoorEntry]) -> Result<()>;
}

pub trait EntryFormat: ReadEntries + WriteEntries {}
impl<T: ReadEntries + WriteEntries> EntryFormat for T {}

pub trait RenderQuotation {
    fn render<W: Write>(w: W, q: &Quotation) -> Result<()>;
}
