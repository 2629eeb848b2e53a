//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

/// Cut `s` to at most `max_chars` characters, ending in '…' when cut.
/// Ex: ("Bohemian Rhapsody", 8) -> "Bohemia…"
pub(crate) fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
