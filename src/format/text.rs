use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Names wider than this are cut with an ellipsis in listings.
pub(crate) const MAX_NAME_WIDTH: usize = 24;

pub(crate) fn name_column_width<'a>(names: impl IntoIterator<Item = &'a str>) -> usize {
    names
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH)
}

pub(crate) fn format_contact_line(name: &str, phones: &[String], name_width: usize) -> String {
    let line = format!("{} {}", name_label(name, name_width), phones.join(", "));
    line.trim_end().to_string()
}

// `name:` padded to `width` columns; names wider than that end in `...`.
fn name_label(name: &str, width: usize) -> String {
    let name = name.replace(['\n', '\r', '\t'], " ");
    let full_width = UnicodeWidthStr::width(name.as_str());
    if full_width <= width {
        return format!("{}:{}", name, " ".repeat(width - full_width));
    }

    let budget = width.saturating_sub(3);
    let mut used = 0;
    let mut shown = String::new();
    for ch in name.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if used + ch_width > budget {
            break;
        }
        shown.push(ch);
        used += ch_width;
    }
    format!("{}...:{}", shown, " ".repeat(budget - used))
}
