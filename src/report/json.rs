use crate::types::scoring::ScoreReport;

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    #[test]
    fn json_report_contains_net_score_and_time() {
        let rendered = to_json(&sample_report()).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value["scores"]["bus_factor"], 0.75);
        assert_eq!(value["scores"]["license"], 1.0);
        assert!(value["scores"]["net_score"].as_f64().is_some());
        assert_eq!(value["reference_time"], "2024-06-01T00:00:00Z");
        assert_eq!(value["top_contributors"][0]["author"], "ann");
    }
}
