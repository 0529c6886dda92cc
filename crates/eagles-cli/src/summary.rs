//! Console summary of a pipeline run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eagles_model::SeasonSummary;

use crate::pipeline::AnalyticsRun;

/// One line of the console summary: category, metric, display value.
pub type SummaryRow = (&'static str, &'static str, String);

pub fn print_summary(run: &AnalyticsRun) {
    if run.is_noop() {
        println!("No CSV files found in {}", run.input_dir.display());
        return;
    }
    if let Some(path) = &run.report_path {
        println!("Analytics report generated: {}", path.display());
    }
    println!(
        "Games: {} from {} file(s)",
        run.game_count,
        run.source_files.len()
    );
    let Some(summary) = &run.summary else {
        return;
    };

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Metric"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (category, metric, value) in summary_rows(summary) {
        table.add_row(vec![
            Cell::new(category).fg(Color::Blue),
            Cell::new(metric),
            Cell::new(value).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
}

/// Key season metrics in display order.
pub fn summary_rows(summary: &SeasonSummary) -> Vec<SummaryRow> {
    vec![
        ("Season", "Record", summary.record()),
        (
            "Season",
            "Win Percentage",
            format!("{:.1}%", summary.summary.win_percentage),
        ),
        (
            "Scoring",
            "Avg Points Scored",
            format!("{:.1}", summary.scoring.avg_points_scored),
        ),
        (
            "Scoring",
            "Avg Points Allowed",
            format!("{:.1}", summary.scoring.avg_points_allowed),
        ),
        (
            "Scoring",
            "Point Differential",
            summary.scoring.point_differential.to_string(),
        ),
        (
            "Offense",
            "Avg Total Yards",
            format!("{:.1}", summary.offense.avg_total_yards),
        ),
        (
            "Home/Away",
            "Home Record",
            summary.home_away.home_record.clone(),
        ),
        (
            "Home/Away",
            "Away Record",
            summary.home_away.away_record.clone(),
        ),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
