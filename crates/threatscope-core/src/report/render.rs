use chrono::{DateTime, SecondsFormat, Utc};

use crate::TOOL_NAME;
use crate::analysis::AnalysisResult;
use crate::catalog::model::Severity;
use crate::report::model::Summary;

const RECOMMENDATIONS: [&str; 4] = [
    "Prioritize threats based on severity levels",
    "Implement mitigations in order of business impact",
    "Conduct regular security assessments",
    "Keep security measures updated with latest best practices",
];

const DISCLAIMER: &str = "This analysis is generated automatically and should be reviewed by \
cybersecurity professionals. Additional threats may exist that are not covered in this analysis.";

const RULE: &str = "================================================================================";
const THIN_RULE: &str = "--------------------------------------------------------------------------------";

/// Markdown report stamped with the current time.
pub fn generate_report(result: &AnalysisResult, description: &str) -> String {
    render_markdown(result, description, Utc::now())
}

/// Markdown report for a fixed generation time.
///
/// Output depends only on the arguments.
pub fn render_markdown(
    result: &AnalysisResult,
    description: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let summary = Summary::from_result(result);
    let mut out = String::new();

    out.push_str("# ThreatScope Analysis Report\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));

    out.push_str("## Project Description\n");
    out.push_str(&format!("{description}\n\n"));

    out.push_str("## Analysis Summary\n");
    out.push_str(&format!("- **Detected Category:** {}\n", summary.category));
    out.push_str(&format!("- **Confidence Level:** {}\n", summary.confidence));
    out.push_str(&format!(
        "- **Threats Identified:** {}\n\n",
        summary.threat_count
    ));

    out.push_str("## Identified Threats\n\n");
    for (i, threat) in result.threats.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n", i + 1, threat.name));
        out.push_str(&format!("**Threat ID:** {}\n", threat.id));
        out.push_str(&format!("**Severity:** {}\n\n", threat.severity));
        out.push_str(&format!("**Description:**\n{}\n\n", threat.description));
        out.push_str(&format!(
            "**Recommended Mitigation:**\n{}\n\n",
            threat.mitigation
        ));
        out.push_str("---\n\n");
    }

    out.push_str("## Recommendations\n");
    for (i, line) in RECOMMENDATIONS.iter().enumerate() {
        out.push_str(&format!("{}. {line}\n", i + 1));
    }

    out.push_str("\n## Disclaimer\n");
    out.push_str(DISCLAIMER);
    out.push('\n');

    out
}

/// File name for an exported report, keyed by Unix milliseconds.
pub fn report_file_name(at: DateTime<Utc>) -> String {
    format!("{TOOL_NAME}-report-{}.md", at.timestamp_millis())
}

/// Plain console rendering of a result.
pub fn render_text(result: &AnalysisResult) -> String {
    let summary = Summary::from_result(result);
    let mut out = String::new();

    out.push_str(&format!("{RULE}\n"));
    out.push_str("THREATSCOPE ANALYSIS REPORT\n");
    out.push_str(&format!("{RULE}\n"));
    out.push_str(&format!("Detected Category:  {}\n", summary.category));
    out.push_str(&format!("Confidence Level:   {}\n", summary.confidence));
    out.push_str(&format!("Identified Threats: {}\n", summary.threat_count));
    out.push_str(&format!("{RULE}\n"));

    for (i, threat) in result.threats.iter().enumerate() {
        let marker = threat
            .severity_level()
            .map_or("[ ?  ]", |s: Severity| s.marker());

        out.push_str(&format!("\n[{}] {} ({})\n", i + 1, threat.name, threat.id));
        out.push_str(&format!("    {marker} Severity: {}\n", threat.severity));
        out.push_str(&format!("    Description: {}\n", threat.description));
        out.push_str(&format!("    Mitigation:  {}\n", threat.mitigation));
        out.push_str(&format!("{THIN_RULE}\n"));
    }

    out
}
