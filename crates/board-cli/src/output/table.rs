//! Plain aligned tables with optional ANSI coloring of board vocabulary.

const MIN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render rows under `headers`, shrinking the widest columns to fit
/// `max_width` and truncating cells with an ellipsis.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .chain(std::iter::once(display_len(header)))
                .max()
                .unwrap_or(0)
                .max(MIN_WIDTH)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = join_cells(headers.iter().zip(&widths).map(|(header, width)| {
        pad(&truncate(&header.to_uppercase(), *width), *width)
    }));
    let divider = "-".repeat(display_len(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(join_cells(widths.iter().enumerate().map(|(index, width)| {
            let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
            let padded = pad(&cell, *width);
            if options.color {
                colorize(&cell, &padded)
            } else {
                padded
            }
        })));
    }
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(SEPARATOR).trim_end().to_string()
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > display_len(headers[*index]).max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

fn truncate(value: &str, width: usize) -> String {
    if display_len(value) <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_len(value));
    format!("{value}{}", " ".repeat(fill))
}

/// Color status and priority names; padding stays outside the escape codes.
fn colorize(cell: &str, padded: &str) -> String {
    let code = match cell {
        "completed" | "low" => "32",
        "in_progress" | "medium" => "34",
        "todo" | "high" => "31",
        "cancelled" => "90",
        _ => return padded.to_string(),
    };
    let fill = &padded[cell.len()..];
    format!("\u{1b}[{code}m{cell}\u{1b}[0m{fill}")
}
