//! Suggestion filter for the ask-me-anything palette (fuzzy match on draft).

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::content::SUGGESTIONS;
use crate::state::PaletteState;

/// Update the filtered suggestion list from the current draft. An empty draft
/// shows everything; otherwise entries are ranked by fuzzy score. The
/// highlight resets to the top on every change.
pub fn update_suggestion_filter(palette: &mut PaletteState) {
    let query = palette.draft.trim().to_lowercase();
    if query.is_empty() {
        palette.filtered = (0..SUGGESTIONS.len()).collect();
    } else {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = SUGGESTIONS
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                matcher
                    .fuzzy_match(&s.to_lowercase(), &query)
                    .map(|score| (score, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        palette.filtered = scored.into_iter().map(|(_, i)| i).collect();
    }
    palette.selected_index = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_shows_all_suggestions() {
        let mut palette = PaletteState::default();
        palette.open();
        palette.draft = "  ".into();
        update_suggestion_filter(&mut palette);
        assert_eq!(palette.filtered.len(), SUGGESTIONS.len());
    }

    #[test]
    fn draft_narrows_the_list_and_resets_the_highlight() {
        let mut palette = PaletteState::default();
        palette.open();
        palette.selected_index = 3;
        palette.draft = "girlfriend".into();
        update_suggestion_filter(&mut palette);
        assert_eq!(palette.filtered.len(), 1);
        assert_eq!(SUGGESTIONS[palette.filtered[0]], "Who is your girlfriend?");
        assert_eq!(palette.selected_index, 0);
    }

    #[test]
    fn unmatched_draft_leaves_no_suggestions() {
        let mut palette = PaletteState::default();
        palette.open();
        palette.draft = "zzzzqqqq".into();
        update_suggestion_filter(&mut palette);
        assert!(palette.filtered.is_empty());
        assert_eq!(palette.selected_suggestion(), None);
    }
}
