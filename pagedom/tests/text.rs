use pagedom::text::{char_width, display_width, wrap_chars, wrap_words};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a b c"), 5);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters take two cells
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
    assert_eq!(char_width('\u{301}'), 0);
}

#[test]
fn test_wrap_words_simple() {
    assert_eq!(wrap_words("hello world", 20), vec!["hello world"]);
}

#[test]
fn test_wrap_words_breaks() {
    assert_eq!(
        wrap_words("hello world foo bar", 11),
        vec!["hello world", "foo bar"]
    );
}

#[test]
fn test_wrap_words_exact_fit() {
    assert_eq!(wrap_words("abc def", 7), vec!["abc def"]);
    assert_eq!(wrap_words("abc def", 6), vec!["abc", "def"]);
}

#[test]
fn test_wrap_words_long_word_is_broken() {
    assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
}

#[test]
fn test_wrap_words_long_word_tail_takes_next_word() {
    assert_eq!(wrap_words("abcdefg hi", 5), vec!["abcde", "fg hi"]);
}

#[test]
fn test_wrap_words_keeps_explicit_newlines() {
    assert_eq!(wrap_words("a1\na2", 40), vec!["a1", "a2"]);
    assert_eq!(wrap_words("a\n\nb", 40), vec!["a", "", "b"]);
}

#[test]
fn test_wrap_words_edge_cases() {
    assert!(wrap_words("anything", 0).is_empty());
    assert_eq!(wrap_words("", 10), vec![""]);
    assert_eq!(wrap_words("   ", 10), vec![""]);
}

#[test]
fn test_wrap_chars_cjk() {
    // Two wide characters per five columns
    assert_eq!(wrap_chars("日本語です", 5), vec!["日本", "語で", "す"]);
}

#[test]
fn test_wrap_chars_edge_cases() {
    assert!(wrap_chars("abc", 0).is_empty());
    assert_eq!(wrap_chars("", 3), vec![""]);
}
