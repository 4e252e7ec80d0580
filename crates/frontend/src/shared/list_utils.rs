//! Search highlighting and sort-header helpers shared by list views.
use leptos::prelude::*;

/// Case-insensitive highlight of every occurrence of `term` in `text`.
/// A blank term renders the text unchanged.
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let segments = match_segments(text, term);
    if segments.iter().all(|(_, hit)| !hit) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    segments
        .into_iter()
        .map(|(part, hit)| {
            if hit {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Byte length of the prefix of `rest` whose lowercase form equals `needle`
fn match_len_at(rest: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in rest.char_indices() {
        for lower in ch.to_lowercase() {
            if matched == needle.len() || needle[matched] != lower {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

/// Split `text` into `(segment, is_match)` pieces for highlighting.
///
/// Case folding is the same Unicode lowercasing the catalog search uses, so
/// every row returned for a term shows where it matched.
pub fn match_segments(text: &str, term: &str) -> Vec<(String, bool)> {
    let needle: Vec<char> = term.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let mut segments = Vec::new();
    let mut last_pos = 0;
    let mut pos = 0;
    while pos < text.len() {
        match match_len_at(&text[pos..], &needle) {
            Some(len) => {
                if pos > last_pos {
                    segments.push((text[last_pos..pos].to_string(), false));
                }
                segments.push((text[pos..pos + len].to_string(), true));
                pos += len;
                last_pos = pos;
            }
            None => pos += text[pos..].chars().next().map_or(1, char::len_utf8),
        }
    }
    if last_pos < text.len() || segments.is_empty() {
        segments.push((text[last_pos..].to_string(), false));
    }
    segments
}

/// Sort indicator for a header cell
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Sort state after clicking the header of `field`: the active column flips
/// direction, any other column becomes active ascending.
pub fn next_sort(current_field: &str, ascending: bool, field: &str) -> (String, bool) {
    if current_field == field {
        (field.to_string(), !ascending)
    } else {
        (field.to_string(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_segments_case_insensitive() {
        let segments = match_segments("EELS map of eels edge", "eels");
        assert_eq!(
            segments,
            vec![
                ("EELS".to_string(), true),
                (" map of ".to_string(), false),
                ("eels".to_string(), true),
                (" edge".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_match_segments_non_ascii_case() {
        assert_eq!(
            match_segments("ÅNGSTRÖM-scale Ångström grid", "ångström"),
            vec![
                ("ÅNGSTRÖM".to_string(), true),
                ("-scale ".to_string(), false),
                ("Ångström".to_string(), true),
                (" grid".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_match_segments_agrees_with_catalog_search() {
        use contracts::domain::a001_dataset::aggregate::{Dataset, DatasetDto};

        let dataset = Dataset::new_for_insert(DatasetDto {
            code: Some("DS-0007".into()),
            name: "Σύνθεση ÉCHANTILLON".into(),
            description: String::new(),
            measurement_type: "EELS".into(),
            detector: "GIF".into(),
            voltage_kv: 200.0,
            file_size_mb: 64.0,
            sample: String::new(),
            acquired_at: None,
            file_path: String::new(),
        });
        for term in ["échantillon", "ΣΎΝΘΕΣΗ", "ill", "zzz"] {
            let highlighted = match_segments(&dataset.name, term)
                .iter()
                .any(|(_, hit)| *hit);
            assert_eq!(highlighted, dataset.matches_search(term), "term {term}");
        }
    }

    #[test]
    fn test_match_segments_blank_term() {
        assert_eq!(
            match_segments("HAADF", "  "),
            vec![("HAADF".to_string(), false)]
        );
        assert_eq!(
            match_segments("HAADF", "cl"),
            vec![("HAADF".to_string(), false)]
        );
    }

    #[test]
    fn test_next_sort() {
        assert_eq!(next_sort("name", true, "name"), ("name".to_string(), false));
        assert_eq!(
            next_sort("name", false, "voltage_kv"),
            ("voltage_kv".to_string(), true)
        );
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "detector", true), " ⇅");
        assert_eq!(get_sort_class("name", "detector"), "sort-icon");
    }
}
