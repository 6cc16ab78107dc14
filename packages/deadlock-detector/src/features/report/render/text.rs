//! Text-based rendering for reports

use crate::config::OutputConfig;
use crate::features::report::DetectionReport;

/// Width of the widest load bar
const BAR_WIDTH: u64 = 30;

/// Bar length for `load`, scaled so `max_load` fills [`BAR_WIDTH`]
fn bar_width(load: u64, max_load: u64) -> usize {
    if max_load == 0 {
        return 0;
    }
    let scaled = (u128::from(load) * u128::from(BAR_WIDTH)).div_ceil(u128::from(max_load));
    scaled.min(u128::from(BAR_WIDTH)) as usize
}

/// Render a human-readable report
pub fn render_text(report: &DetectionReport, output: &OutputConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "─── Deadlock Detection: {} processes × {} resources ───\n\n",
        report.process_count, report.resource_count
    ));

    if output.show_trace {
        out.push_str("Trace:\n");
        for line in &report.trace {
            out.push_str(&format!("  {}\n", line));
        }
        out.push('\n');
    }

    out.push_str(&format!("Result: {}\n", report.summary_line()));
    out.push_str(&format!("Final work: {:?}\n", report.final_work));

    // Load bars, deadlocked processes marked with '#'
    out.push_str("\nRelative load (allocation + request):\n");
    let max_load = report.loads.iter().map(|l| l.load).max().unwrap_or(0);
    let label_width = report
        .loads
        .iter()
        .map(|l| l.process.chars().count())
        .max()
        .unwrap_or(0);
    for load in &report.loads {
        let width = bar_width(load.load, max_load);
        let glyph = if load.deadlocked { "#" } else { "=" };
        out.push_str(&format!(
            "  {:<label_width$} |{:<bar$}| {}{}\n",
            load.process,
            glyph.repeat(width),
            load.load,
            if load.deadlocked { "  (deadlocked)" } else { "" },
            label_width = label_width,
            bar = BAR_WIDTH as usize,
        ));
    }

    if output.show_graph {
        out.push_str("\nResource Allocation Graph (textual)\n");
        out.push_str(&format!("  {}\n", report.graph.legend));
        for process in &report.graph.processes {
            out.push_str(&format!("  {}\n", process.process));
            if !process.allocated.is_empty() {
                let edges: Vec<String> = process.allocated.iter().map(|e| e.to_string()).collect();
                out.push_str(&format!("    Allocated: {}\n", edges.join(", ")));
            }
            if !process.requested.is_empty() {
                let edges: Vec<String> = process.requested.iter().map(|e| e.to_string()).collect();
                out.push_str(&format!("    Requests: {}\n", edges.join(", ")));
            }
        }
    }

    out
}

/// Render one line per named report, followed by totals
pub fn render_batch_summary(reports: &[(String, DetectionReport)]) -> String {
    let mut out = String::new();
    let name_width = reports
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    for (name, report) in reports {
        out.push_str(&format!(
            "{:<width$}  {}×{}  {}\n",
            name,
            report.process_count,
            report.resource_count,
            report.summary_line(),
            width = name_width,
        ));
    }

    let safe = reports.iter().filter(|(_, r)| r.is_safe()).count();
    out.push_str(&format!(
        "\n{} scenario(s): {} safe, {} deadlocked\n",
        reports.len(),
        safe,
        reports.len() - safe
    ));
    out
}
