use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Unified diff from the current file content to what a build would write
pub fn render_unified_diff(
    path: &str,
    current: &str,
    expected: &str,
    supports_color: bool,
) -> String {
    let diff = TextDiff::from_lines(current, expected);
    let mut out = String::new();

    let unified = diff
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string();

    for line in unified.lines() {
        out.push_str(&color_line(line, supports_color));
        out.push('\n');
    }

    out
}

fn color_line(line: &str, supports_color: bool) -> String {
    if !supports_color {
        return line.to_string();
    }

    if line.starts_with("+++") || line.starts_with("---") || line.starts_with("@@") {
        format!("{}", line.with(theme::colors::INFO))
    } else {
        match line.chars().next() {
            Some('-') => format!("{}", line.with(tag_color(ChangeTag::Delete))),
            Some('+') => format!("{}", line.with(tag_color(ChangeTag::Insert))),
            _ => format!("{}", line.with(tag_color(ChangeTag::Equal))),
        }
    }
}

fn tag_color(tag: ChangeTag) -> crossterm::style::Color {
    match tag {
        ChangeTag::Delete => theme::colors::ERROR,
        ChangeTag::Insert => theme::colors::SUCCESS,
        ChangeTag::Equal => theme::colors::DIM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_and_changed_lines() {
        let rendered = render_unified_diff(".clinerules", "a\nold\n", "a\nnew\n", false);

        assert!(rendered.contains("--- a/.clinerules"));
        assert!(rendered.contains("+++ b/.clinerules"));
        assert!(rendered.contains("-old"));
        assert!(rendered.contains("+new"));
        assert!(rendered.contains(" a"));
    }

    #[test]
    fn identical_content_has_no_hunks() {
        let rendered = render_unified_diff("x", "same\n", "same\n", false);
        assert!(!rendered.contains("@@"));
    }
}
