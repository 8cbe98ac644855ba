//! Case-insensitive substring highlighter for search views.
//!
//! # Responsibility
//! - Wrap every query occurrence in presentation markers while preserving
//!   the original text content exactly.
//! - Define the containment test that search inclusion shares with markup,
//!   so a field never counts as matched without a visible highlight.
//!
//! # Invariants
//! - An empty query never matches anything; the degenerate empty-needle
//!   found-at-every-position case is excluded outright.
//! - Stripping markers from highlighted output restores the input exactly.
//! - Matching folds case via `char::to_lowercase` on both sides; emitted
//!   spans always carry the original casing.
//! - Emitted spans never overlap: once a span is written, the next one is
//!   clamped to start at the previous span's end.

/// Opening marker wrapped around each matched span.
pub const MARK_OPEN: &str = "<span class=\"highlight\"><strong>";
/// Closing marker wrapped around each matched span.
pub const MARK_CLOSE: &str = "</strong></span>";

/// Wraps every case-insensitive occurrence of `query` in `text` with the
/// highlight markers.
///
/// Occurrences are collected at every character position, so overlapping
/// repeats of the query are all found; emission then walks the spans in
/// start order and never re-covers characters an earlier span already
/// emitted. Zero occurrences (including an empty query) return the input
/// unchanged.
pub fn highlight(text: &str, query: &str) -> String {
    let spans = match_spans(text, query);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(
        text.len() + spans.len() * (MARK_OPEN.len() + MARK_CLOSE.len()),
    );
    let mut cursor = 0;
    for (start, end) in spans {
        if end <= cursor {
            continue;
        }
        let begin = start.max(cursor);
        output.push_str(&text[cursor..begin]);
        output.push_str(MARK_OPEN);
        output.push_str(&text[begin..end]);
        output.push_str(MARK_CLOSE);
        cursor = end;
    }
    output.push_str(&text[cursor..]);
    output
}

/// Wraps a complete value in one marker pair.
///
/// Used where a matched field is presented highlighted wholesale rather than
/// substring-marked (year values on search results).
pub fn wrap_whole(text: &str) -> String {
    format!("{MARK_OPEN}{text}{MARK_CLOSE}")
}

/// Returns whether `query` occurs in `text`, folding case on both sides.
///
/// An empty query is defined as not contained, keeping inclusion consistent
/// with [`highlight`] producing no spans for it.
pub fn contains_ci(text: &str, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return false;
    }
    text.char_indices()
        .any(|(start, _)| folded_match_len(&text[start..], &needle).is_some())
}

/// Removes every highlight marker, restoring the unmarked text.
pub fn strip_marks(text: &str) -> String {
    text.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

/// Collects `(start, end)` byte spans of every occurrence, in start order.
///
/// Spans may overlap each other; [`highlight`] resolves overlap at emission
/// time.
fn match_spans(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    for (start, _) in text.char_indices() {
        if let Some(len) = folded_match_len(&text[start..], &needle) {
            spans.push((start, start + len));
        }
    }
    spans
}

/// Returns the byte length of `needle` matched at the head of `suffix`,
/// comparing case-folded characters, or `None` on mismatch.
///
/// When the needle runs out inside one character's case expansion, the whole
/// character still belongs to the match, so span ends always land on char
/// boundaries of the original text.
fn folded_match_len(suffix: &str, needle: &str) -> Option<usize> {
    let mut pending = needle.chars();
    let mut expected = pending.next()?;
    let mut matched = 0;

    for ch in suffix.chars() {
        let mut satisfied = false;
        for folded in ch.to_lowercase() {
            if satisfied {
                continue;
            }
            if folded != expected {
                return None;
            }
            match pending.next() {
                Some(next) => expected = next,
                None => satisfied = true,
            }
        }
        matched += ch.len_utf8();
        if satisfied {
            return Some(matched);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{contains_ci, highlight, strip_marks, wrap_whole, MARK_CLOSE, MARK_OPEN};

    #[test]
    fn empty_query_returns_text_unchanged() {
        assert_eq!(highlight("Paint and Sip", ""), "Paint and Sip");
        assert!(!contains_ci("Paint and Sip", ""));
    }

    #[test]
    fn zero_occurrences_pass_text_through() {
        assert_eq!(highlight("Game Night", "poetry"), "Game Night");
        assert!(!contains_ci("Game Night", "poetry"));
    }

    #[test]
    fn wraps_every_occurrence_preserving_original_casing() {
        let marked = highlight("Tet and tet", "TET");
        assert_eq!(
            marked,
            format!("{MARK_OPEN}Tet{MARK_CLOSE} and {MARK_OPEN}tet{MARK_CLOSE}")
        );
    }

    #[test]
    fn matching_folds_case_on_both_sides() {
        assert!(contains_ci("Đá cầu (shuttlecock kicking)", "đá CẦU"));
        let marked = highlight("Đá cầu", "đá");
        assert_eq!(marked, format!("{MARK_OPEN}Đá{MARK_CLOSE} cầu"));
    }

    #[test]
    fn overlapping_occurrences_never_recover_emitted_characters() {
        let marked = highlight("aaa", "aa");
        assert_eq!(
            marked,
            format!("{MARK_OPEN}aa{MARK_CLOSE}{MARK_OPEN}a{MARK_CLOSE}")
        );
        assert_eq!(strip_marks(&marked), "aaa");
    }

    #[test]
    fn stripping_markers_restores_input_exactly() {
        let texts = [
            "Mid Autumn Festival",
            "chè ba màu (three-color dessert)",
            "2025",
            "",
        ];
        for text in texts {
            for query in ["a", "è", "202", "festival"] {
                assert_eq!(strip_marks(&highlight(text, query)), text);
            }
        }
    }

    #[test]
    fn rehighlighting_marked_text_leaves_existing_spans_intact() {
        let first = highlight("Lantern making and lion dance", "lantern");
        let second = highlight(&first, "dance");
        assert!(second.contains(&format!("{MARK_OPEN}Lantern{MARK_CLOSE}")));
        assert!(second.contains(&format!("{MARK_OPEN}dance{MARK_CLOSE}")));
        assert_eq!(strip_marks(&second), "Lantern making and lion dance");
    }

    #[test]
    fn wrap_whole_marks_the_entire_value() {
        assert_eq!(wrap_whole("2025"), format!("{MARK_OPEN}2025{MARK_CLOSE}"));
    }
}
