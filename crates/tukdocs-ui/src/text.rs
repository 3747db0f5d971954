use unicode_segmentation::UnicodeSegmentation;

pub const ELLIPSIS: char = '…';

/// Cut `text` to at most `max` grapheme clusters, ending in `…` when
/// something was dropped.
pub fn ellipsize(text: &str, max: usize) -> String {
    let count = text.graphemes(true).count();
    if count <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.graphemes(true).take(max - 1).collect();
    out.truncate(out.trim_end().len());
    out.push(ELLIPSIS);
    out
}
