//! Output formatting for cost breakdowns.

use calc_core::file_io::to_json;
use calc_core::{CalcResult, CostBreakdown};

use crate::cli::OutputFormat;

const RULE_HEAVY: &str = "═══════════════════════════════════════";
const RULE_LIGHT: &str = "───────────────────────────────────────";

/// Render a breakdown for stdout.
pub fn render(result: &CostBreakdown, format: OutputFormat) -> CalcResult<String> {
    match format {
        OutputFormat::Json => to_json(result, false),
        OutputFormat::Text => Ok(render_table(result)),
    }
}

fn render_table(r: &CostBreakdown) -> String {
    let rows = [
        ("Material", r.material_cost),
        ("Energy", r.energy_cost),
        ("Machine wear", r.wear_cost),
        ("Labor", r.labor_cost),
    ];

    let mut out = String::new();
    out.push_str(RULE_HEAVY);
    out.push_str("\n  FDM PRINT COST BREAKDOWN\n");
    out.push_str(RULE_HEAVY);
    out.push('\n');
    for (label, value) in rows {
        out.push_str(&line(label, value));
    }
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str(&line("Process cost", r.total_process_cost()));
    out.push_str(&line("Margin", r.margin_gain));
    out.push_str(&line("Shipping", r.shipping_cost));
    out.push_str(&line("Tax", r.tax_addition));
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str(&line("TOTAL", r.total_cost));
    out.push_str(RULE_HEAVY);
    out
}

fn line(label: &str, value: f64) -> String {
    format!("  {:<14}{:>14.4}\n", format!("{label}:"), value)
}
