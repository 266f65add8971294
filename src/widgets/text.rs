/// Pad or cut `text` to exactly `width` characters, marking cuts with `…`
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{:<width$}", text, width = width);
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Like `fit`, but pads on the left
pub fn fit_right(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        format!("{:>width$}", text, width = width)
    } else {
        fit(text, width)
    }
}
