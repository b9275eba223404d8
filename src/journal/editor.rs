//! Toolbar formatting helper for the draft content field.

use std::ops::Range;

/// Formatting actions the editor toolbar offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatAction {
    Bold,
    Italic,
    Heading,
    Bullet,
}

/// Result of applying a toolbar action: the rewritten content and the
/// selection span to restore so the cursor lands after the wrapped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatApplied {
    pub content: String,
    pub selection: Range<usize>,
}

/// Applies `action` to the selected span of `content`.
///
/// `selection` is in byte offsets; offsets are clamped into range and
/// snapped back to char boundaries before use. Bold and italic wrap the
/// span and extend the restored selection past the closing marker;
/// heading and bullet prefix the span and keep the selection as-is. The
/// bullet action also prefixes every line inside the span, and inserts a
/// bare `- ` when the span is empty.
pub fn apply_format(content: &str, selection: Range<usize>, action: FormatAction) -> FormatApplied {
    let start = snap_to_boundary(content, selection.start);
    let end = snap_to_boundary(content, selection.end).max(start);

    let before = &content[..start];
    let mid = &content[start..end];
    let after = &content[end..];

    let (rewritten, end_shift) = match action {
        FormatAction::Bold => (format!("{before}**{mid}**{after}"), 4),
        FormatAction::Italic => (format!("{before}*{mid}*{after}"), 2),
        FormatAction::Heading => (format!("{before}# {mid}{after}"), 0),
        FormatAction::Bullet => {
            let bulleted = if mid.is_empty() {
                "- ".to_string()
            } else {
                format!("- {}", mid.replace('\n', "\n- "))
            };
            (format!("{before}{bulleted}{after}"), 0)
        }
    };

    FormatApplied {
        content: rewritten,
        selection: start..end + end_shift,
    }
}

fn snap_to_boundary(content: &str, offset: usize) -> usize {
    let mut offset = offset.min(content.len());
    while offset > 0 && !content.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
