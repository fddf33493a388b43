use crate::report::{ArraySummary, RunDetails, RunSummary, format_f64_6};

pub fn render_summary_text(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        summary.tool, summary.tool_version
    ));
    out.push_str("=====================\n\n");

    match &summary.details {
        RunDetails::Score {
            n_levels,
            overflow_policy,
            n_overflow,
            thresholds_min,
            thresholds_max,
        } => {
            out.push_str("Command: score\n");
            out.push_str(&format!("Quantile levels: {n_levels}\n"));
            out.push_str(&format!("Overflow policy: {overflow_policy}\n"));
            out.push_str(&format!("Elements above top threshold: {n_overflow}\n"));
            out.push_str(&format!(
                "Threshold range: [{}, {}]\n",
                format_f64_6(*thresholds_min),
                format_f64_6(*thresholds_max)
            ));
        }
        RunDetails::Combine {
            statistic,
            n_inputs,
        } => {
            out.push_str("Command: combine\n");
            out.push_str(&format!("Statistic: {statistic}\n"));
            out.push_str(&format!("Inputs: {n_inputs}\n"));
        }
    }
    out.push('\n');

    out.push_str("Inputs\n");
    for input in &summary.inputs {
        push_array_line(&mut out, input);
    }
    out.push_str("\nOutput\n");
    push_array_line(&mut out, &summary.output);

    out
}

fn push_array_line(out: &mut String, s: &ArraySummary) {
    out.push_str(&format!(
        "  {} shape={:?} n={} min={} median={} p90={} max={}\n",
        s.label,
        s.shape,
        s.n,
        format_f64_6(s.min),
        format_f64_6(s.median),
        format_f64_6(s.p90),
        format_f64_6(s.max)
    ));
}
