//! Terminal rendition of the content dashboard.

use culture_archive_shared::{dashboard::format_date, ContentItem, ContentKind};

/// Badge text for articles.
pub const LABEL_ARTICLE: &str = "觀點文章";
/// Badge text for photographs.
pub const LABEL_PHOTOGRAPH: &str = "光影故事";
/// Date cell of an article without a publication date.
pub const LABEL_NOT_PUBLISHED: &str = "未發布";

const HEADERS: [&str; 6] = ["類別", "標題", "說明", "作者", "日期", "最後更新"];

/// Localized badge text for a content kind.
pub fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Article => LABEL_ARTICLE,
        ContentKind::Photograph => LABEL_PHOTOGRAPH,
    }
}

/// Cells of one table row: kind, title, secondary text, author, effective
/// date and last update.
pub fn row_cells(item: &ContentItem) -> [String; 6] {
    [
        kind_label(item.kind()).to_string(),
        item.title().to_string(),
        item.secondary_text().to_string(),
        item.author().to_string(),
        item.effective_date()
            .map(format_date)
            .unwrap_or_else(|| LABEL_NOT_PUBLISHED.to_string()),
        format_date(item.updated_at()),
    ]
}

/// Plain-text table, one row per item in the given order. Column widths are
/// counted in chars.
pub fn content_table(items: &[ContentItem]) -> String {
    let rows: Vec<[String; 6]> = items.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().copied(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 6]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
