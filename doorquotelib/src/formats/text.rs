//! Текстовая смета для отправки в мессенджер (разметка WhatsApp: `*жирный*`, `_курсив_`).

use crate::{
    error::Result,
    model::{CoatingKind, PricingMode},
    quotation::{format_rupees, format_square_feet, Quotation, NOTE},
};
use std::fmt::Write as FmtWrite;
use std::io::Write;

pub struct ShareText;

impl crate::traits::RenderQuotation for ShareText {
    fn render<W: Write>(mut w: W, q: &Quotation) -> Result<()> {
        let mut s = String::new();
        let _ = writeln!(s, "*Door Quotation*");
        let _ = writeln!(s, "Date: {}", q.date.format("%d/%m/%Y"));
        let _ = writeln!(s);
        let _ = writeln!(s, "*Customer:* {}", q.customer.name);
        let _ = writeln!(s, "*Mobile:* {}", q.customer.mobile);
        let _ = writeln!(s);
        let _ = writeln!(s, "*Door Details:*");

        for (i, line) in q.lines.iter().enumerate() {
            if i > 0 {
                let _ = writeln!(s);
            }
            let _ = writeln!(
                s,
                "{}. {}\" x {}\" ({} sq.ft)",
                i + 1,
                line.height_display,
                line.width_display,
                format_square_feet(line.square_feet)
            );
            for (kind, amount) in &line.amounts {
                let _ = writeln!(s, "   {}: Rs.{}", kind.short_label(), format_rupees(*amount));
            }
        }

        let _ = writeln!(s);
        let _ = writeln!(s, "--------------------");
        let _ = writeln!(
            s,
            "*TOTALS ({} sq.ft)*",
            format_square_feet(q.totals.total_square_feet)
        );
        let _ = writeln!(s);
        for kind in CoatingKind::ALL {
            if q.mode == PricingMode::Selected && q.totals.amount(kind).is_zero() {
                continue;
            }
            let _ = writeln!(
                s,
                "{} (@ Rs.{}/sq.ft): Rs.{}",
                kind.label(),
                q.rates.rate(kind),
                format_rupees(q.totals.amount(kind))
            );
        }
        if let Some(total) = q.totals.grand_total {
            let _ = writeln!(s, "*Grand Total: Rs.{}*", format_rupees(total));
        }
        let _ = writeln!(s);
        let _ = writeln!(s, "_Note: {NOTE}_");

        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
