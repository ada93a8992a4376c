//! Grade report rendering.

use crate::grading::{GradeReport, GradeSource};
use crate::report::style::{bar, points, Palette};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Cell, ContentArrangement, Table};

const SCORE_BAR_WIDTH: usize = 30;
const DETAIL_BAR_WIDTH: usize = 10;
const WRAP_WIDTH: usize = 76;

/// Format a grade report: headline, score bar, feedback and rubric breakdown.
pub fn format_grade_report(report: &GradeReport, palette: &Palette) -> String {
    let result = &report.result;
    let tier = result.tier();
    let percentage = result.percentage();
    let mut out = String::new();

    let title = match report.source {
        GradeSource::Backend => "Grading Complete".to_string(),
        GradeSource::Demo => "Grading Complete (demo result)".to_string(),
    };
    out.push_str(&format!("{}\n\n", palette.heading(&title)));

    out.push_str(&format!(
        "  {}   {}{}   {}\n",
        palette.tier(&result.grade, tier),
        palette.tier(&points(result.score), tier),
        palette.muted(&format!("/{}", points(result.max_score))),
        palette.muted(&format!("{}% score", percentage))
    ));
    out.push_str(&format!(
        "  {}\n\n",
        palette.tier(&bar(f64::from(percentage) / 100.0, SCORE_BAR_WIDTH), tier)
    ));

    out.push_str(&format!("{}\n\n", palette.heading("Feedback")));
    if result.feedback.trim().is_empty() {
        out.push_str(&format!("  {}\n", palette.muted("No feedback provided.")));
    } else {
        for line in wrap(&result.feedback, WRAP_WIDTH) {
            out.push_str(&format!("  {}\n", line));
        }
    }

    if !result.details.is_empty() {
        out.push_str(&format!("\n{}\n\n", palette.heading("Detailed Breakdown")));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(WRAP_WIDTH as u16 + 4);
        table.set_header(vec!["Category", "Points", "", "Comment"]);
        for detail in &result.details {
            let band = detail.band();
            table.add_row(vec![
                Cell::new(&detail.category),
                palette.band_cell(
                    &format!("{}/{}", points(detail.points), points(detail.max_points)),
                    band,
                ),
                palette.band_cell(&bar(detail.ratio(), DETAIL_BAR_WIDTH), band),
                Cell::new(&detail.comment),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }

    out.push_str(&format!(
        "\n{}\n",
        palette.muted(&format!(
            "Graded at {}",
            report.graded_at.format("%Y-%m-%d %H:%M:%S UTC")
        ))
    ));
    out
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}
