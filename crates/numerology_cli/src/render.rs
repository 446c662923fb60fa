//! Plain-text report layout for terminal output.
//!
//! Section order follows the printed report: core numbers, personal year,
//! birth chart, life cycles, pinnacles.

use numerology_core::{LifePeriod, NumerologyReport};
use std::fmt::Write;

pub fn render_text(report: &NumerologyReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &NumerologyReport) -> std::fmt::Result {
    writeln!(out, "NUMEROLOGY REPORT")?;
    writeln!(out, "Full name:  {}", report.full_name)?;
    writeln!(out, "Birth date: {}", report.birth_date)?;
    writeln!(out)?;

    let life_path = &report.life_path;
    section(out, "Life Path", report.life_path_number, &life_path.meaning)?;
    field(out, "Strengths", &life_path.strengths.join(", "))?;
    field(out, "Challenges", &life_path.challenges.join(", "))?;
    field(out, "Career", &life_path.career.join(", "))?;
    field(out, "Relationships", &life_path.relationships)?;

    let expression = &report.expression;
    section(out, "Expression", report.expression_number, &expression.meaning)?;
    field(out, "Talents", &expression.talents.join(", "))?;
    field(out, "Purpose", &expression.purpose)?;

    let soul_urge = &report.soul_urge;
    section(out, "Soul Urge", report.soul_urge_number, &soul_urge.meaning)?;
    field(out, "Desires", &soul_urge.desires.join(", "))?;
    field(out, "Motivation", &soul_urge.motivation)?;

    let personality = &report.personality;
    section(out, "Personality", report.personality_number, &personality.meaning)?;
    field(out, "Impression", &personality.impression)?;
    field(out, "Traits", &personality.traits.join(", "))?;

    section(out, "Birthday", report.birthday_number, &report.birthday.meaning)?;
    field(out, "Gift", &report.birthday.gift)?;

    section(out, "Attitude", report.attitude_number, &report.attitude.meaning)?;
    field(out, "Outlook", &report.attitude.outlook)?;

    writeln!(
        out,
        "Personal Year {}: {}",
        report.evaluated_year, report.personal_year
    )?;
    writeln!(out, "  {}", report.personal_year_analysis)?;
    writeln!(out)?;

    writeln!(out, "Birth Chart")?;
    for digit in 1..=9 {
        let count = report.birth_chart.count_of(digit);
        writeln!(out, "  {digit}: {:<6} ({count})", "*".repeat(count as usize))?;
    }
    if !report.birth_chart.missing.is_empty() {
        let missing = report
            .birth_chart
            .missing
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>();
        field(out, "Missing", &missing.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "Life Cycles")?;
    for (index, period) in report.life_cycles.periods().into_iter().enumerate() {
        period_line(out, "Cycle", index + 1, period)?;
    }
    writeln!(out)?;

    writeln!(out, "Pinnacles")?;
    for (index, period) in report.pinnacles.periods().into_iter().enumerate() {
        period_line(out, "Pinnacle", index + 1, period)?;
    }
    Ok(())
}

fn section(
    out: &mut String,
    title: &str,
    number: impl std::fmt::Display,
    meaning: &str,
) -> std::fmt::Result {
    writeln!(out, "{title}: {number}")?;
    writeln!(out, "  {meaning}")
}

fn field(out: &mut String, label: &str, value: &str) -> std::fmt::Result {
    writeln!(out, "  {label}: {value}")
}

fn period_line(
    out: &mut String,
    label: &str,
    ordinal: usize,
    period: &LifePeriod,
) -> std::fmt::Result {
    writeln!(
        out,
        "  {label} {ordinal} ({}): {} - {}",
        period.age, period.number, period.meaning
    )
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use numerology_core::build_report;

    #[test]
    fn text_report_lists_every_section() {
        let report = build_report("Nguyen Van An", "1990-05-15", 2026).unwrap();
        let text = render_text(&report);

        assert!(text.contains("Life Path: 3"));
        assert!(text.contains("Expression: 3"));
        assert!(text.contains("Soul Urge: 8"));
        assert!(text.contains("Personality: 4"));
        assert!(text.contains("Personal Year 2026: 3"));
        assert!(text.contains("  1: **     (2)"));
        assert!(text.contains("Missing: 2, 3, 4, 6, 7, 8"));
        assert!(text.contains("Cycle 3 (61+): 1 - "));
        assert!(text.contains("Pinnacle 1 (0-33): 11 - "));
    }
}
