use lazy_static::lazy_static;
use std::collections::HashSet;

/// Elements that never have content or a closing tag
pub const VOID_TAG_NAMES: [&str; 16] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

lazy_static! {
    static ref VOID_TAGS: HashSet<&'static str> = VOID_TAG_NAMES.into_iter().collect();
}

/// Checks whether `tag` names a self-closing element. Matching is exact, so
/// tag names must be given in lowercase.
pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

#[cfg(test)]
#[test]
fn test_is_void() {
    assert!(is_void("img"));
    assert!(is_void("br"));
    assert!(is_void("keygen"));
    assert!(!is_void("div"));
    assert!(!is_void("IMG"));
    assert!(!is_void(""));
    assert!(!is_void(" img"));
}
