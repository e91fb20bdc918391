use crate::browser::Browser;
use crate::tree::{ItemKind, UsageTree};

/// Cells in the proportional usage bar.
pub const BAR_WIDTH: usize = 10;
/// Column the human-readable size is right-justified into.
const SIZE_COLUMN: usize = 8;
/// Kept clear at the right edge of every line.
const LINE_MARGIN: usize = 2;

/// The computed view for one frame: the ".." row plus the visible child rows,
/// and the status line. Pure data; the terminal layer only styles and blits.
#[derive(Debug)]
pub struct ViewLines {
    pub rows: Vec<String>,
    pub status: String,
}

/// Number of child rows the content area can show: everything except the
/// ".." row and the status line.
pub fn content_rows(height: usize) -> usize {
    height.saturating_sub(2)
}

/// Compute the display lines for the browser's current folder. Children are
/// read in display order (descending size); the slice shown is
/// `[scroll, scroll + viewport)`. An empty folder renders only the ".." row.
pub fn render_view(tree: &UsageTree, browser: &Browser, width: usize, height: usize) -> ViewLines {
    let viewport = content_rows(height);
    let max_line = width.saturating_sub(LINE_MARGIN);

    let mut rows = vec![truncate_to("..".to_string(), max_line)];

    let order = tree.children_sorted(browser.current());
    let largest = order.first().map(|&id| tree.node(id).size).unwrap_or(0);
    for &child in order.iter().skip(browser.scroll()).take(viewport) {
        let node = tree.node(child);
        let marker = match node.kind {
            ItemKind::Folder => "/",
            ItemKind::File => " ",
        };
        let filled = bar_cells(node.size, largest);
        let line = format!(
            "{:>size_col$} [{:<bar$}] {}{}",
            format_size(node.size),
            "#".repeat(filled),
            marker,
            node.name,
            size_col = SIZE_COLUMN,
            bar = BAR_WIDTH,
        );
        rows.push(truncate_to(line, max_line));
    }

    let status = format!(
        "Press 'q' to exit | Current folder: {}",
        tree.node(browser.current()).name
    );
    ViewLines {
        rows,
        status: pad_to(status, width),
    }
}

/// Filled cells for a usage bar: `floor(size * BAR_WIDTH / largest)`. A bar
/// against an all-zero folder has no reference and stays empty.
pub fn bar_cells(size: u64, largest: u64) -> usize {
    if largest == 0 {
        return 0;
    }
    ((size as u128 * BAR_WIDTH as u128) / largest as u128) as usize
}

/// Human-readable SI-suffixed byte size, e.g. 1000 -> "1.0K".
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
    let mut value = size as f64;
    let mut unit_index = 0;
    while value >= 1000.0 && unit_index < UNITS.len() - 1 {
        value /= 1000.0;
        unit_index += 1;
    }
    if unit_index == 0 {
        format!("{}B", size)
    } else {
        format!("{:.1}{}", value, UNITS[unit_index])
    }
}

fn truncate_to(line: String, max: usize) -> String {
    if line.chars().count() <= max {
        line
    } else {
        line.chars().take(max).collect()
    }
}

/// Truncate or pad with blanks to exactly `width` characters.
fn pad_to(line: String, width: usize) -> String {
    let mut out = truncate_to(line, width);
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}
