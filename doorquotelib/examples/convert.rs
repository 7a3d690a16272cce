use chrono::NaiveDate;
use doorquotelib::{
    formats::{csv::Csv, xml::QuotationXml},
    model::PricingMode,
    pricing::RateTable,
    quotation::{Customer, Quotation},
    traits::{ReadEntries, RenderQuotation},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: CSV с записями -> XML-смета (stdin -> stdout)
    let entries = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let q = Quotation::assemble(
        Customer::default(),
        NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("bad date")?,
        &entries,
        &RateTable::default(),
        PricingMode::AllKinds,
    );
    QuotationXml::render(std::io::stdout(), &q)?;
    Ok(())
}
