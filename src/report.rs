//! Plain-text material bill, laid out like the totals panel of the
//! designer: dimensions, structure, poles required, estimated cost.

use paalkraal_core::{format_currency, format_length, PoleLength, GATE_WIDTH};
use paalkraal_designer::DesignSnapshot;
use std::fmt::Write;

const LABEL_WIDTH: usize = 20;

/// Render the material bill for `snapshot`.
pub fn format_bill(snapshot: &DesignSnapshot) -> String {
    let bill = &snapshot.bill;
    let settings = &snapshot.settings;
    let mut out = String::new();

    let _ = writeln!(out, "Material Bill");
    let layout = if snapshot.segments.is_empty() {
        "empty".to_string()
    } else if snapshot.is_closed_loop() {
        format!("{} sections, closed loop", bill.segment_count)
    } else {
        format!("{} sections, open run", bill.segment_count)
    };
    line(&mut out, "Layout:", &layout);

    let _ = writeln!(out, "\nDimensions");
    line(&mut out, "Total Length:", &format_length(bill.total_length));
    line(&mut out, "Fence Height:", &format_length(settings.fence_height));
    line(
        &mut out,
        "Post Height (Rec):",
        &format_length(bill.recommended_post_height),
    );

    let _ = writeln!(out, "\nStructure");
    line(&mut out, "Upright Posts:", &bill.total_posts.to_string());
    line(
        &mut out,
        &format!("Gates ({:.1}m):", GATE_WIDTH),
        &bill.gate_count.to_string(),
    );
    line(&mut out, "Rails High:", &bill.rails_per_section.to_string());

    let _ = writeln!(out, "\nPoles Required");
    if bill.total_poles() == 0 {
        let _ = writeln!(out, "  No rails added yet");
    } else {
        for pole in PoleLength::ALL {
            let count = bill.poles_required(pole);
            if count > 0 {
                line(&mut out, &format!("{} Poles:", pole), &count.to_string());
            }
        }
    }

    let _ = writeln!(out, "\nEstimated Cost");
    line(
        &mut out,
        "Total:",
        &format_currency(bill.total_cost(), &settings.currency_symbol),
    );

    out
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<width$}{}", label, value, width = LABEL_WIDTH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use paalkraal_designer::{DesignerState, SegmentKind};
    use paalkraal_settings::FenceSettings;

    #[test]
    fn test_cost_scenario_report() {
        let mut state = DesignerState::new(FenceSettings::default().with_overlap(0.15));
        state.append(SegmentKind::Standard(PoleLength::M2_4));
        state.append(SegmentKind::Gate);

        let report = format_bill(&state.snapshot());

        assert!(report.contains("2 sections, open run"));
        assert!(report.contains("Total Length:       3.25m"));
        assert!(report.contains("Upright Posts:      3"));
        assert!(report.contains("Gates (1.0m):       1"));
        assert!(report.contains("2.4m Poles:         4"));
        assert!(!report.contains("1.8m Poles:"));
        assert!(!report.contains("3.6m Poles:"));
        assert!(report.contains("Total:              $2,090"));
    }

    #[test]
    fn test_empty_report() {
        let report = format_bill(&DesignerState::default().snapshot());
        assert!(report.contains("Layout:             empty"));
        assert!(report.contains("No rails added yet"));
        assert!(report.contains("Total:              $0"));
    }
}
