use board_core::responses::BoardSnapshot;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render the board. Tables get one row per visible activity, in column
/// order, followed by a visible/total summary.
pub fn render_board(snapshot: &BoardSnapshot, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(snapshot, format);
    }

    let headers = ["column", "id", "title", "priority", "updated"];
    let rows: Vec<Vec<String>> = snapshot
        .columns
        .iter()
        .flat_map(|view| {
            view.activities.iter().map(|activity| {
                vec![
                    view.column.title.to_string(),
                    activity.id.clone(),
                    activity.title.clone(),
                    activity.priority.to_string(),
                    activity.updated_at.format("%Y-%m-%d %H:%M").to_string(),
                ]
            })
        })
        .collect();

    let summary = format!("{} of {} activities shown", snapshot.visible, snapshot.total);
    if rows.is_empty() {
        return Ok(format!("(no rows)\n{summary}"));
    }
    let table = table::render_table(&headers, &rows, table_options());
    Ok(format!("{table}\n\n{summary}"))
}

pub fn output_board(snapshot: &BoardSnapshot, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_board(snapshot, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let settings = ui::settings();
    table::TableOptions {
        max_width: settings.max_width,
        color: settings.color,
    }
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(value_to_cell(scalar)),
    }
}

/// Arrays of objects become one row per item, with the union of their keys as headers.
fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }
    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(&headers, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use board_config::OrderingMode;
    use board_core::clock::ManualClock;
    use board_core::layout::COLUMNS;
    use board_store::ActivityStore;
    use board_store::updates::filter::FilterUpdateBuilder;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_store() -> ActivityStore {
        ActivityStore::with_sample_data(ManualClock::new(Utc::now()), OrderingMode::Manual)
    }

    #[test]
    fn json_board_is_valid_json() {
        let out = render_board(&sample_store().snapshot(), OutputFormat::Json)
            .expect("json render should work");
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["total"], 4);
        assert_eq!(parsed["columns"][1]["status"], "in_progress");
        assert_eq!(parsed["columns"][1]["title"], "In progress");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&COLUMNS, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[3]["accent"], "gray");
    }

    #[test]
    fn table_board_lists_visible_activities_with_summary() {
        let mut store = sample_store();
        store.set_filters(FilterUpdateBuilder::new().search("dashboard").build());

        let out = render_board(&store.snapshot(), OutputFormat::Table)
            .expect("table render should work");

        assert!(out.starts_with("COLUMN"));
        assert_eq!(out.lines().count(), 2 + store.filtered().len() + 2);
        assert!(out.contains("Dashboard design"));
        assert!(out.ends_with("1 of 4 activities shown"));
    }

    #[test]
    fn empty_board_table_says_so() {
        let mut store = sample_store();
        store.set_filters(FilterUpdateBuilder::new().search("zzz-no-match").build());

        let out = render_board(&store.snapshot(), OutputFormat::Table).expect("render");

        assert_eq!(out, "(no rows)\n0 of 4 activities shown");
    }

    #[test]
    fn array_table_has_one_row_per_item() {
        let out = render(&COLUMNS, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let columns: Vec<&str> = header.split_whitespace().collect();
        assert_eq!(columns, vec!["ACCENT", "STATUS", "TITLE"]);
        assert_eq!(out.lines().count(), 2 + COLUMNS.len());
    }
}
