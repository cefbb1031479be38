use crate::report::{RunSummary, format_f64_3};

pub fn render_summary_text(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\nSUCCESS! Report created: {}\n",
        summary.output_path.display()
    ));
    out.push_str(&format!(
        "Rows: {} ({} jobs x {} colors, margin {})\n",
        summary.n_records,
        summary.jobs_kept,
        summary.colors.len(),
        summary.margin
    ));
    if summary.persons_kept < summary.persons_total || summary.jobs_kept < summary.jobs_total {
        out.push_str(&format!(
            "Excluded non-numeric rows: persons {}/{}, jobs {}/{}\n",
            summary.persons_total - summary.persons_kept,
            summary.persons_total,
            summary.jobs_total - summary.jobs_kept,
            summary.jobs_total
        ));
    }

    if !summary.colors.is_empty() {
        out.push_str("\nColor\tPeople\tMean risk\tMax risk\tNatural fits\n");
        for stat in &summary.colors {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                stat.color,
                stat.members,
                format_f64_3(stat.mean_score),
                format_f64_3(stat.max_score),
                stat.natural_fit
            ));
        }
    }

    out
}
