//! Tab completion tests

use ttycmd::completion::expand;

fn names<'a>(list: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
    list.iter().copied()
}

#[test]
fn test_single_match_expands_to_full_name() {
    assert_eq!(expand("he", names(&["help"])), Some("lp"));
}

#[test]
fn test_typed_equals_common_prefix_no_expansion() {
    // "set" is the full common prefix of {set, setall}
    assert_eq!(expand("set", names(&["set", "setall"])), None);
}

#[test]
fn test_expands_to_common_prefix_of_multiple_matches() {
    assert_eq!(expand("se", names(&["set", "setall"])), Some("t"));
    assert_eq!(expand("f", names(&["flash", "flags"])), Some("la"));
}

#[test]
fn test_no_match() {
    assert_eq!(expand("xy", names(&["help", "set"])), None);
}

#[test]
fn test_exact_full_name_no_expansion() {
    assert_eq!(expand("help", names(&["help"])), None);
}

#[test]
fn test_case_sensitive() {
    assert_eq!(expand("He", names(&["help"])), None);
}

#[test]
fn test_non_matching_candidates_ignored() {
    assert_eq!(expand("re", names(&["help", "reboot", "set"])), Some("boot"));
}

#[test]
fn test_empty_candidate_list() {
    assert_eq!(expand("he", names(&[])), None);
}
