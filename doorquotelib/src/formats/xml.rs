//! Печатная смета в XML: <Quotation><customer/><lines>...</lines><summary>...</summary></Quotation>

use crate::{
    error::{QuoteError, Result},
    model::{CoatingKind, PricingMode},
    quotation::{format_square_feet, Quotation, NOTE},
};
use quick_xml::se::to_string;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize, Debug)]
struct XmlCustomer {
    name: String,
    mobile: String,
}

#[derive(Serialize, Debug)]
struct XmlAmount {
    #[serde(rename = "@kind")]
    kind: &'static str,
    #[serde(rename = "$text", with = "rust_decimal::serde::str")]
    value: Decimal,
}

#[derive(Serialize, Debug)]
struct XmlLine {
    #[serde(rename = "@id")]
    id: u64,
    height: String,
    width: String,
    rounded: String,
    square_feet: String,
    amount: Vec<XmlAmount>,
}

#[derive(Serialize, Debug)]
struct XmlLines {
    line: Vec<XmlLine>,
}

#[derive(Serialize, Debug)]
struct XmlCoatingTotal {
    #[serde(rename = "@kind")]
    kind: &'static str,
    label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
}

#[derive(Serialize, Debug)]
struct XmlSummary {
    coating: Vec<XmlCoatingTotal>,
}

#[derive(Serialize, Debug)]
#[serde(rename = "Quotation")]
struct XmlQuotation {
    date: String,
    mode: &'static str,
    customer: XmlCustomer,
    lines: XmlLines,
    summary: XmlSummary,
    total_square_feet: String,
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::str_option")]
    grand_total: Option<Decimal>,
    note: &'static str,
}

pub struct QuotationXml;

impl crate::traits::RenderQuotation for QuotationXml {
    fn render<W: Write>(mut w: W, q: &Quotation) -> Result<()> {
        let lines = q
            .lines
            .iter()
            .map(|l| XmlLine {
                id: l.id,
                height: l.height_display.clone(),
                width: l.width_display.clone(),
                rounded: l.rounded.to_string(),
                square_feet: format_square_feet(l.square_feet),
                amount: l
                    .amounts
                    .iter()
                    .map(|(kind, value)| XmlAmount {
                        kind: kind.code(),
                        value: *value,
                    })
                    .collect(),
            })
            .collect();

        let coating = CoatingKind::ALL
            .into_iter()
            .map(|kind| XmlCoatingTotal {
                kind: kind.code(),
                label: kind.label(),
                rate: q.rates.rate(kind),
                amount: q.totals.amount(kind),
            })
            .collect();

        let x = XmlQuotation {
            date: q.date.format("%Y-%m-%d").to_string(),
            mode: match q.mode {
                PricingMode::AllKinds => "all_kinds",
                PricingMode::Selected => "selected",
            },
            customer: XmlCustomer {
                name: q.customer.name.clone(),
                mobile: q.customer.mobile.clone(),
            },
            lines: XmlLines { line: lines },
            summary: XmlSummary { coating },
            total_square_feet: format_square_feet(q.totals.total_square_feet),
            grand_total: q.totals.grand_total,
            note: NOTE,
        };

        let s = to_string(&x).map_err(|e| QuoteError::Xml(format!("{e}")))?;
        w.write_all(br#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        w.write_all(b"\n")?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
