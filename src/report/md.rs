use crate::types::scoring::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    match &report.package {
        Some(name) => output.push_str(&format!("# Package Score: {name}\n\n")),
        None => output.push_str("# Package Score\n\n"),
    }
    output.push_str(&format!("Net score: {:.3}\n\n", report.scores.net_score));

    output.push_str("## Sub-scores\n\n");
    output.push_str("| metric | score |\n|---|---|\n");
    output.push_str(&format!(
        "| bus_factor | {:.3} |\n| responsive_maintainer | {:.3} |\n| ramp_up | {:.3} |\n| correctness | {:.3} |\n| license | {:.3} |\n\n",
        report.scores.bus_factor,
        report.scores.responsive_maintainer,
        report.scores.ramp_up,
        report.scores.correctness,
        report.scores.license
    ));

    output.push_str(&format!(
        "## Top {} Contributors ({} commits total)\n\n",
        report.top_n, report.total_commits
    ));
    if report.top_contributors.is_empty() {
        output.push_str("- none\n");
    } else {
        for contributor in &report.top_contributors {
            output.push_str(&format!(
                "- {}: {} commits ({:.1}%)\n",
                contributor.author,
                contributor.commits,
                contributor.share * 100.0
            ));
        }
    }

    output.push_str(&format!(
        "\nReference time: {}\n",
        report.reference_time.to_rfc3339()
    ));
    output
}
