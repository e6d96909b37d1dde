//! Human-readable order summaries.

use crate::order::{Order, OrderItem};
use crate::pricing::OrderTotals;
use std::fmt::Write;

/// Suffix shown instead of a price for lines beyond catalog bounds.
pub const CONSULTATION: &str = "consultation required";

/// Format an amount as whole won with thousands separators.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-₩{}", grouped)
    } else {
        format!("₩{}", grouped)
    }
}

/// Price column for one line.
fn line_price(item: &OrderItem) -> String {
    if item.cost.is_custom() {
        CONSULTATION.to_string()
    } else {
        format_amount(item.cost.subtotal)
    }
}

/// One text line per order item.
pub fn order_lines(order: &Order) -> String {
    let mut output = String::new();
    for item in order.items() {
        writeln!(
            output,
            "{} {} {} x{} {}",
            item.id,
            item.group,
            item.description(),
            item.quantity,
            line_price(item)
        )
        .unwrap();
    }
    output
}

/// Totals block.
pub fn totals_text(totals: &OrderTotals) -> String {
    let mut output = String::new();
    writeln!(output, "Material: {}", format_amount(totals.material_cost)).unwrap();
    writeln!(output, "Processing: {}", format_amount(totals.processing_cost)).unwrap();
    writeln!(output, "Subtotal: {}", format_amount(totals.subtotal)).unwrap();
    writeln!(output, "VAT: {}", format_amount(totals.vat)).unwrap();
    writeln!(
        output,
        "Shipping ({:.1} kg): {}",
        totals.weight_kg,
        format_amount(totals.shipping)
    )
    .unwrap();
    if totals.has_custom {
        writeln!(
            output,
            "Total: {} + {}",
            format_amount(totals.total),
            CONSULTATION
        )
        .unwrap();
    } else {
        writeln!(output, "Total: {}", format_amount(totals.total)).unwrap();
    }
    output
}

/// Full summary of an order: its lines followed by totals.
pub fn render_summary(order: &Order) -> String {
    let mut output = String::new();

    writeln!(output, "[ORDER]").unwrap();
    if order.is_empty() {
        writeln!(output, "(no items)").unwrap();
    } else {
        output.push_str(&order_lines(order));
    }
    writeln!(output).unwrap();

    writeln!(output, "[TOTALS]").unwrap();
    output.push_str(&totals_text(&order.totals()));

    output
}
