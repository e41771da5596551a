//! Fallback ordering for comments the table of contents does not place.

use crate::config::SortOrder;
use crate::model::Comment;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort comments in place, stably.
///
/// In alpha mode comments without a name compare equal to everything, so they
/// keep their slots and the named comments are sorted around them.
pub fn sort_comments(comments: &mut [Comment], order: SortOrder) {
    match order {
        SortOrder::Alpha => sort_named_around_anonymous(comments),
        SortOrder::Source => comments.sort_by(compare_by_source_location),
    }
}

/// Name order: base letters first, then accents, then uppercase before
/// lowercase. Either side missing a name gives `Equal`.
pub fn compare_by_name(a: &Comment, b: &Comment) -> Ordering {
    match (sort_name(a), sort_name(b)) {
        (Some(a), Some(b)) => collate(a, b),
        _ => Ordering::Equal,
    }
}

/// Plain string order on `context.sortKey` (so `a.js:10` < `a.js:2`).
pub fn compare_by_source_location(a: &Comment, b: &Comment) -> Ordering {
    a.context.sort_key.cmp(&b.context.sort_key)
}

fn sort_name(comment: &Comment) -> Option<&str> {
    comment.name.as_deref().filter(|name| !name.is_empty())
}

fn sort_named_around_anonymous(comments: &mut [Comment]) {
    let slots: Vec<usize> = comments
        .iter()
        .enumerate()
        .filter(|(_, c)| sort_name(c).is_some())
        .map(|(i, _)| i)
        .collect();
    let mut named: Vec<Comment> = slots
        .iter()
        .map(|&i| std::mem::take(&mut comments[i]))
        .collect();
    named.sort_by(compare_by_name);
    for (slot, comment) in slots.into_iter().zip(named) {
        comments[slot] = comment;
    }
}

/// One base character of a decomposed name with the marks that follow it.
struct Element {
    primary: (u8, char),
    accents: Vec<char>,
    lowercase: bool,
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.accents.push(c);
                continue;
            }
        }
        out.push(Element {
            primary: primary_key(c),
            accents: Vec::new(),
            lowercase: !c.is_uppercase(),
        });
    }
    out
}

/// Three-level collation over the canonical decomposition: base characters
/// (punctuation < digits < letters, letters without case), then accents,
/// then case with uppercase first.
fn collate(a: &str, b: &str) -> Ordering {
    let (a_elems, b_elems) = (elements(a), elements(b));
    a_elems
        .iter()
        .map(|e| e.primary)
        .cmp(b_elems.iter().map(|e| e.primary))
        .then_with(|| {
            a_elems
                .iter()
                .map(|e| &e.accents)
                .cmp(b_elems.iter().map(|e| &e.accents))
        })
        .then_with(|| {
            a_elems
                .iter()
                .map(|e| e.lowercase)
                .cmp(b_elems.iter().map(|e| e.lowercase))
        })
        .then_with(|| a.cmp(b))
}

fn primary_key(c: char) -> (u8, char) {
    if c.is_alphabetic() {
        (2, c.to_lowercase().next().unwrap_or(c))
    } else if c.is_numeric() {
        (1, c)
    } else {
        (0, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Context;

    fn named(name: &str) -> Comment {
        Comment {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn at(key: &str) -> Comment {
        Comment {
            context: Context {
                sort_key: key.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn uppercase_first_on_case_tie() {
        assert_eq!(compare_by_name(&named("Apple"), &named("apple")), Ordering::Less);
        assert_eq!(compare_by_name(&named("apple"), &named("Apple")), Ordering::Greater);
    }

    #[test]
    fn case_does_not_beat_letters() {
        assert_eq!(compare_by_name(&named("apple"), &named("Banana")), Ordering::Less);
        assert_eq!(compare_by_name(&named("Apple"), &named("banana")), Ordering::Less);
        assert_eq!(compare_by_name(&named("Zeta"), &named("alpha")), Ordering::Greater);
    }

    #[test]
    fn punctuation_and_digits_before_letters() {
        assert_eq!(compare_by_name(&named("_private"), &named("a")), Ordering::Less);
        assert_eq!(compare_by_name(&named("2d"), &named("a")), Ordering::Less);
    }

    #[test]
    fn missing_name_is_equal() {
        assert_eq!(compare_by_name(&Comment::default(), &named("a")), Ordering::Equal);
        assert_eq!(compare_by_name(&named("a"), &Comment::default()), Ordering::Equal);
    }

    #[test]
    fn source_location_is_lexicographic() {
        assert_eq!(
            compare_by_source_location(&at("file1.js:10"), &at("file1.js:2")),
            Ordering::Less
        );
    }

    #[test]
    fn accents_sort_with_their_base_letter() {
        let mut list = vec![named("zebra"), named("éclair"), named("Émile"), named("eclair")];
        sort_comments(&mut list, SortOrder::Alpha);
        let names: Vec<_> = list.iter().filter_map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec!["eclair", "éclair", "Émile", "zebra"]);
    }

    #[test]
    fn accent_outranks_case() {
        assert_eq!(compare_by_name(&named("Eclair"), &named("éclair")), Ordering::Less);
        assert_eq!(compare_by_name(&named("Éclair"), &named("éclair")), Ordering::Less);
        // Decomposed input lands where the precomposed form does
        let decomposed = named("e\u{301}clair");
        assert_eq!(compare_by_name(&named("eclair"), &decomposed), Ordering::Less);
        assert_eq!(compare_by_name(&decomposed, &named("Émile")), Ordering::Less);
    }

    #[test]
    fn sort_order_picks_comparator() {
        let mut a = named("b");
        a.context.sort_key = "x.js:1".to_string();
        let mut b = named("a");
        b.context.sort_key = "x.js:2".to_string();

        let mut list = vec![a.clone(), b.clone()];
        sort_comments(&mut list, SortOrder::Alpha);
        assert_eq!(list[0].name.as_deref(), Some("a"));

        let mut list = vec![b, a];
        sort_comments(&mut list, SortOrder::Source);
        assert_eq!(list[0].name.as_deref(), Some("b"));
    }

    #[test]
    fn alpha_sort_keeps_anonymous_in_place() {
        let mut list = vec![named("b"), Comment::default(), named("a")];
        sort_comments(&mut list, SortOrder::Alpha);
        let names: Vec<_> = list.iter().map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec![Some("a"), None, Some("b")]);
    }

    #[test]
    fn source_sort_is_stable() {
        let mut first = at("a.js:1");
        first.name = Some("first".to_string());
        let mut second = at("a.js:1");
        second.name = Some("second".to_string());
        let mut list = vec![at("b.js:1"), first, second];
        sort_comments(&mut list, SortOrder::Source);
        assert_eq!(list[0].name.as_deref(), Some("first"));
        assert_eq!(list[1].name.as_deref(), Some("second"));
        assert_eq!(list[2].context.sort_key, "b.js:1");
    }
}
