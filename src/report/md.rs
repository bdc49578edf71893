use crate::types::report::{Evaluation, Shortlist};

pub const REPORT_TITLE: &str = "Weekly Property Shortlist";

pub fn to_markdown(shortlist: &Shortlist) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {REPORT_TITLE}\n\n"));
    output.push_str(&format!(
        "_Generated: {} UTC_\n\n",
        shortlist.generated_at.format("%Y-%m-%dT%H:%M:%S")
    ));

    if shortlist.entries.is_empty() {
        output.push_str(&format!(
            "_No properties scored at or above {}._\n",
            shortlist.threshold
        ));
        return output;
    }

    for evaluation in shortlist.included() {
        output.push_str(&section(evaluation));
        output.push_str("\n---\n\n");
    }
    output
}

/// Address header, score line and bulleted rationale for one candidate.
pub fn section(evaluation: &Evaluation) -> String {
    let mut output = String::new();
    output.push_str(&format!("## {}\n", display_address(evaluation)));
    output.push_str(&format!("**Score:** {}/100\n\n", evaluation.result.score));
    output.push_str("**Rationale:**\n");
    for explanation in &evaluation.result.explanations {
        output.push_str(&format!("- {explanation}\n"));
    }
    output
}

/// Section plus the per-dimension arithmetic behind the score.
pub fn explain(evaluation: &Evaluation, threshold: u8) -> String {
    let mut output = section(evaluation);
    output.push_str("\n**Breakdown:**\n");
    for dimension in &evaluation.result.dimensions {
        output.push_str(&format!(
            "- {}: {} points x {:.2} = {:.2}\n",
            dimension.dimension.as_str(),
            dimension.points,
            dimension.weight,
            dimension.weighted
        ));
    }
    output.push_str(&format!(
        "- total: {:.2}\n\n",
        evaluation.result.raw_total()
    ));

    let verdict = if evaluation.result.excluded {
        format!(
            "excluded (red flags: {})",
            evaluation.result.matched_red_flags.join(", ")
        )
    } else if evaluation.shortlisted(threshold) {
        "shortlisted".to_string()
    } else {
        format!("below threshold {threshold}")
    };
    output.push_str(&format!("**Verdict:** {verdict}\n"));
    output
}

fn display_address(evaluation: &Evaluation) -> &str {
    if evaluation.address.trim().is_empty() {
        &evaluation.id
    } else {
        &evaluation.address
    }
}
