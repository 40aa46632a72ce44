// File: ./src/model/parser.rs
// Handles smart text input parsing for the event form
use crate::model::item::Category;
use std::collections::HashMap;

/// Splits `input` into `(gap_before, word)` pairs, keeping the whitespace
/// exactly as typed.
fn words_with_gaps(input: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut rest = input;
    loop {
        let word_start = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let (gap, tail) = rest.split_at(word_start);
        if tail.is_empty() {
            break;
        }
        let word_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (word, next) = tail.split_at(word_end);
        out.push((gap, word));
        rest = next;
    }
    out
}

/// Splits a typed line into the event description and an optional category
/// picked from `#work` / `#personal` or a configured alias tag.
///
/// Recognised tags are removed together with the whitespace before them;
/// unknown `#tags` and the spacing between kept words stay as typed. When
/// several tags are present the last one wins.
pub fn parse_smart_input(
    input: &str,
    aliases: &HashMap<String, Category>,
) -> (String, Option<Category>) {
    let mut description = String::new();
    let mut category = None;

    for (gap, word) in words_with_gaps(input) {
        if let Some(tag) = word.strip_prefix('#')
            && !tag.is_empty()
        {
            if let Some(cat) = Category::from_tag(tag) {
                category = Some(cat);
                continue;
            }
            if let Some(cat) = aliases.get(&tag.to_lowercase()) {
                category = Some(*cat);
                continue;
            }
        }
        if !description.is_empty() {
            description.push_str(gap);
        }
        description.push_str(word);
    }

    (description, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_has_no_category() {
        let (desc, cat) = parse_smart_input("Dentist at 3pm", &HashMap::new());
        assert_eq!(desc, "Dentist at 3pm");
        assert_eq!(cat, None);
    }

    #[test]
    fn builtin_tags_are_stripped() {
        let (desc, cat) = parse_smart_input("Standup #Work", &HashMap::new());
        assert_eq!(desc, "Standup");
        assert_eq!(cat, Some(Category::Work));

        let (desc, cat) = parse_smart_input("#personal call mum", &HashMap::new());
        assert_eq!(desc, "call mum");
        assert_eq!(cat, Some(Category::Personal));
    }

    #[test]
    fn aliases_map_to_categories() {
        let mut aliases = HashMap::new();
        aliases.insert("gym".to_string(), Category::Personal);
        let (desc, cat) = parse_smart_input("Leg day #GYM", &aliases);
        assert_eq!(desc, "Leg day");
        assert_eq!(cat, Some(Category::Personal));
    }

    #[test]
    fn unknown_tags_and_lone_hash_stay_in_text() {
        let (desc, cat) = parse_smart_input("Fix bug #42 #", &HashMap::new());
        assert_eq!(desc, "Fix bug #42 #");
        assert_eq!(cat, None);
    }

    #[test]
    fn tags_only_leave_empty_description() {
        let (desc, cat) = parse_smart_input("  #work  ", &HashMap::new());
        assert!(desc.is_empty());
        assert_eq!(cat, Some(Category::Work));
    }

    #[test]
    fn interior_spacing_is_kept() {
        let (desc, cat) = parse_smart_input("  Call  Bob \t at 3 ", &HashMap::new());
        assert_eq!(desc, "Call  Bob \t at 3");
        assert_eq!(cat, None);

        let (desc, cat) = parse_smart_input("Lunch #work   with  Ann", &HashMap::new());
        assert_eq!(desc, "Lunch   with  Ann");
        assert_eq!(cat, Some(Category::Work));
    }
}
