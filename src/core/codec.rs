//! Filter state <-> query string codec.
//!
//! Only filter-owned keys (the [`FilterSection`] keys and `page`) are read
//! or written here. Everything else in the query, such as the modal `tab`,
//! passes through untouched.

use crate::config::query_keys;
use crate::models::{FilterSection, FilterState, QueryString};
use crate::utils::log;

/// Decode the filter state carried by a query string.
///
/// Unknown keys are dropped. Empty values are treated as absent, and so is
/// a `page` that is repeated or not a canonical positive integer.
pub fn decode(query: &QueryString) -> FilterState {
    let mut state = FilterState::new();

    for (key, value) in query.pairs() {
        if let Some(section) = FilterSection::from_key(key) {
            state.select(section, value.as_str());
        }
    }

    // Selecting resets the cursor, so the page is applied last.
    let pages: Vec<&str> = query.get_all(query_keys::PAGE).collect();
    match pages.as_slice() {
        [] => {}
        [raw] => match parse_page(raw) {
            Some(page) => state.set_page(page),
            None => log::warn(&format!("ignoring malformed page cursor {:?}", raw)),
        },
        _ => log::warn(&format!("ignoring repeated page cursor {:?}", pages)),
    }

    state
}

/// A page cursor in canonical form: a positive integer without sign or
/// leading zeros, so it encodes back to the same text.
fn parse_page(raw: &str) -> Option<u32> {
    let page = raw.parse::<u32>().ok().filter(|&page| page > 0)?;
    (page.to_string() == raw).then_some(page)
}

/// Encode a filter state as a standalone query string.
///
/// Sections are emitted in sidebar order with sorted values; `page` comes
/// last and only when the state carries an explicit cursor.
pub fn encode(state: &FilterState) -> QueryString {
    let mut query = QueryString::new();
    write_filters(state, &mut query);
    query
}

/// Rewrite the filter-owned keys of `base` to match `state`.
///
/// Foreign keys keep their values and relative order.
pub fn apply(state: &FilterState, base: &QueryString) -> QueryString {
    let mut query: QueryString = base
        .pairs()
        .iter()
        .filter(|(key, _)| !is_filter_key(key))
        .cloned()
        .collect();
    write_filters(state, &mut query);
    query
}

/// Whether `key` belongs to the filter codec.
pub fn is_filter_key(key: &str) -> bool {
    key == query_keys::PAGE || FilterSection::from_key(key).is_some()
}

fn write_filters(state: &FilterState, query: &mut QueryString) {
    for section in FilterSection::ALL {
        for value in state.selected(section) {
            query.append(section.key(), value);
        }
    }
    if let Some(page) = state.page_cursor() {
        query.append(query_keys::PAGE, page.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_recognized_keys() {
        let q = QueryString::parse("?category=slots&category=live&provider=pragmatic&page=2");
        let state = decode(&q);

        assert!(state.is_selected(FilterSection::Category, "slots"));
        assert!(state.is_selected(FilterSection::Category, "live"));
        assert!(state.is_selected(FilterSection::Provider, "pragmatic"));
        assert_eq!(state.page(), 2);
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn test_decode_drops_unknown_keys() {
        let q = QueryString::parse("?tab=deposit&utm_source=mail&category=slots");
        let state = decode(&q);

        assert_eq!(state.active_count(), 1);
        let encoded = encode(&state);
        assert!(!encoded.contains_key("tab"));
        assert!(!encoded.contains_key("utm_source"));
    }

    #[test]
    fn test_decode_malformed_values_are_absent() {
        let q = QueryString::parse("?category=&page=abc&volatility=high");
        let state = decode(&q);

        assert_eq!(state.sections().collect::<Vec<_>>(), vec![FilterSection::Volatility]);
        assert_eq!(state.page_cursor(), None);

        assert_eq!(decode(&QueryString::parse("?page=0")).page_cursor(), None);
        assert_eq!(decode(&QueryString::parse("?page=-3")).page_cursor(), None);
    }

    #[test]
    fn test_decode_non_canonical_page_is_absent() {
        for case in ["?page=02", "?page=+2", "?page=2&page=3", "?page=2&page=2", "?page=%202"] {
            let state = decode(&QueryString::parse(case));
            assert_eq!(state.page_cursor(), None, "{:?} kept a cursor", case);
        }
        let kept = decode(&QueryString::parse("?category=slots&page=1"));
        assert_eq!(kept.page(), 1);
        assert!(encode(&kept).same_pairs(&QueryString::parse("?category=slots&page=1")));
    }

    #[test]
    fn test_decode_page_survives_selection_order() {
        let q = QueryString::parse("?page=4&theme=egypt");
        assert_eq!(decode(&q).page(), 4);
    }

    #[test]
    fn test_encode_omits_empty_sections() {
        let mut state = FilterState::new();
        state.select(FilterSection::Provider, "netent");
        state.deselect(FilterSection::Provider, "netent");
        state.select(FilterSection::Volatility, "low");

        assert_eq!(encode(&state).to_search(), "?volatility=low");
        assert_eq!(encode(&FilterState::new()).to_search(), "");
    }

    #[test]
    fn test_encode_decode_is_set_equal() {
        let cases = [
            "?category=slots",
            "?provider=pragmatic&category=slots&category=live",
            "?feature=bonus-buy&feature=megaways&page=3",
            "?theme=ancient%20egypt&volatility=high",
            "?category=slots&category=slots",
            "",
        ];
        for case in cases {
            let q = QueryString::parse(case);
            let round_trip = encode(&decode(&q));
            assert!(round_trip.same_pairs(&q), "round trip changed {:?}", case);
        }
    }

    #[test]
    fn test_decode_encode_decode_is_stable() {
        let q = QueryString::parse("?page=2&provider=b&provider=a&junk=1");
        let once = decode(&q);
        assert_eq!(decode(&encode(&once)), once);
    }

    #[test]
    fn test_apply_preserves_foreign_keys() {
        let base = QueryString::parse("?tab=deposit&category=slots&page=2&ref=abc");
        let mut state = decode(&base);
        state.toggle(FilterSection::Provider, "pragmatic");

        let next = apply(&state, &base);
        assert_eq!(
            next.to_search(),
            "?tab=deposit&ref=abc&category=slots&provider=pragmatic"
        );
    }

    #[test]
    fn test_apply_clear_removes_filter_keys() {
        let base = QueryString::parse("?category=slots&tab=swap&page=5");
        let next = apply(&FilterState::new(), &base);
        assert_eq!(next.to_search(), "?tab=swap");
    }

    #[test]
    fn test_is_filter_key() {
        assert!(is_filter_key("category"));
        assert!(is_filter_key("page"));
        assert!(!is_filter_key("tab"));
    }
}
