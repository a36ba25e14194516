//! Human-readable renderings for the table output format.

use std::fmt::Write as _;

use plab_core::entities::PersonaProfile;
use plab_core::enums::WizardStep;
use plab_core::normalize::NormalizedReport;

use super::{table, table_options};

/// `Step 2 of 4 · Question authoring (50%)`
#[must_use]
pub fn step_header(step: WizardStep) -> String {
    format!(
        "Step {} of {} · {} ({}%)",
        step.number(),
        WizardStep::ALL.len(),
        step.label(),
        step.percent()
    )
}

#[must_use]
pub fn render_personas(personas: &[PersonaProfile]) -> String {
    if personas.is_empty() {
        return String::from("No personas were generated.");
    }

    let rows = personas
        .iter()
        .map(|p| {
            vec![
                p.avatar.clone(),
                p.name.clone(),
                p.age.map_or_else(|| String::from("-"), |age| age.to_string()),
                p.gender.clone(),
                p.occupation.clone(),
                p.personality.clone(),
            ]
        })
        .collect::<Vec<_>>();

    table::render_table(
        &["", "name", "age", "gender", "occupation", "personality"],
        &rows,
        table_options(),
    )
}

/// Sectioned text view of a normalized report. Empty sections say so.
#[must_use]
pub fn render_report(report: &NormalizedReport) -> String {
    if report.is_empty() {
        return String::from("The analysis returned no insights yet.");
    }

    let mut out = String::new();

    section(&mut out, "Summary");
    match &report.summary {
        Some(summary) => line(&mut out, summary),
        None => line(&mut out, "(no summary)"),
    }

    section(&mut out, "Key themes");
    if report.key_themes.is_empty() {
        line(&mut out, "(none)");
    }
    for theme in &report.key_themes {
        line(&mut out, &format!("• {theme}"));
    }

    section(&mut out, &format!("Insights ({})", report.insights_count));
    if report.insights.is_empty() {
        line(&mut out, "(none)");
    }
    for (index, insight) in report.insights.iter().enumerate() {
        line(&mut out, &format!("{}. {}", index + 1, insight.title));
        if !insight.description.is_empty() {
            line(&mut out, &format!("   {}", insight.description));
        }
        for evidence in &insight.evidence {
            line(&mut out, &format!("   › {evidence}"));
        }
    }

    section(&mut out, "Recommendations");
    if report.recommendations.is_empty() {
        line(&mut out, "(none)");
    }
    for rec in &report.recommendations {
        line(&mut out, &format!("→ {}", rec.action));
        if !rec.rationale.is_empty() {
            line(&mut out, &format!("  {}", rec.rationale));
        }
    }

    section(&mut out, "Responses");
    if report.responses.is_empty() {
        line(&mut out, "(none)");
    }
    for question in &report.responses {
        line(&mut out, &format!("Q. {}", question.question));
        for answer in &question.answers {
            line(&mut out, &format!("   {}: {}", answer.display_name(), answer.text));
        }
    }

    out.trim_end().to_string()
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

fn line(out: &mut String, text: &str) {
    let _ = writeln!(out, "{text}");
}
