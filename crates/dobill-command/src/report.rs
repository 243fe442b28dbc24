//! Report rendering for the cost summary

use dobill_core::billing::{CostEstimate, CostSummary};

/// Render the cost summary as chat Markdown.
///
/// Totals lead, per-category subtotals follow. The grand total is the only
/// number re-rounded at display time; subtotals print exactly what the
/// estimators accumulated.
#[must_use]
pub fn render_summary(summary: &CostSummary) -> String {
    let total = summary.total();
    let mut output = String::new();

    output.push_str("💰 **DigitalOcean Cost Summary**\n\n");
    output.push_str(&format!(
        "Total costs so far this month: ${:.2}\n",
        total.current
    ));
    output.push_str(&format!(
        "Projected costs for this month: ${:.2}\n",
        total.projected
    ));

    push_category(&mut output, "Droplets", summary.droplets);
    push_category(&mut output, "Databases", summary.databases);
    push_category(&mut output, "Volumes", summary.volumes);
    push_category(&mut output, "Snapshots", summary.snapshots);
    push_category(&mut output, "Backups", summary.backups);

    output
}

fn push_category(output: &mut String, label: &str, estimate: CostEstimate) {
    output.push_str(&format!("\n**{label}**\n"));
    output.push_str(&format!("• Current: ${:.2}\n", estimate.current));
    output.push_str(&format!("• Projected: ${:.2}\n", estimate.projected));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_category() {
        let summary = CostSummary {
            droplets: CostEstimate::new(5.00, 33.60),
            databases: CostEstimate::new(2.20, 14.78),
            volumes: CostEstimate::new(0.15, 9.73),
            snapshots: CostEstimate::new(0.30, 2.00),
            backups: CostEstimate::new(1.68, 6.72),
        };

        let text = render_summary(&summary);

        assert!(text.contains("Total costs so far this month: $9.33"));
        assert!(text.contains("Projected costs for this month: $66.83"));
        for label in ["Droplets", "Databases", "Volumes", "Snapshots", "Backups"] {
            assert!(text.contains(&format!("**{label}**")), "missing {label}");
        }
        assert!(text.contains("• Current: $5.00"));
        assert!(text.contains("• Projected: $14.78"));
    }

    #[test]
    fn test_render_empty_summary_shows_zero_totals() {
        let text = render_summary(&CostSummary::default());

        assert!(text.contains("Total costs so far this month: $0.00"));
        assert!(text.contains("Projected costs for this month: $0.00"));
    }
}
