use crate::sql::word::Word;
use regex::Regex;
use std::sync::LazyLock;

/// Word grammar shared by hover and diagnostic positioning.
///
/// A word is either a number with an optional leading `-` and a decimal
/// fraction (`-?\d*\.\d\w*`), or a maximal run of characters outside the
/// separator set `` `~!@#$%^&*()-=+[{]}\|;:'",.<>/? `` and whitespace.
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"(-?\d*\.\d\w*)|([^`~!@#$%\^&*()\-=+\[{\]}\\|;:'",.<>/?\s]+)"##)
        .expect("word grammar is a valid regex")
});

/// Scan `text` left to right, yielding every word with its byte span.
///
/// Never fails; text made only of separators simply yields nothing.
pub fn words(text: &str) -> impl Iterator<Item = Word> + '_ {
    WORD.find_iter(text)
        .map(|m| Word::new(m.as_str(), m.start(), m.end()))
}

/// Find the word touching byte `offset` in `text`.
///
/// The first word whose span encloses the offset wins (a word ending exactly
/// at `offset` counts). A word starting strictly after `offset` before any
/// match means nothing covers it: no fallback to the nearest word.
pub fn locate(offset: usize, text: &str) -> Option<Word> {
    for word in words(text) {
        if word.start > offset {
            return None;
        }
        if word.end >= offset {
            return Some(word);
        }
    }
    None
}

/// Byte span of the first whole-word occurrence of `target` in `text`.
///
/// Every textual occurrence is checked with [`locate`]; the first whose
/// enclosing word equals `target` exactly is returned, so `user` is never
/// found inside `users`. Occurrences inside string literals are not
/// distinguished.
pub fn first_whole_word(text: &str, target: &str) -> Option<(usize, usize)> {
    if target.is_empty() {
        return None;
    }
    text.match_indices(target)
        .map(|(index, _)| index)
        .find(|&index| locate(index, text).is_some_and(|w| w.text == target))
        .map(|index| (index, index + target.len()))
}

/// Like [`first_whole_word`] but compares words ignoring ASCII case.
pub fn first_whole_word_ignore_case(text: &str, target: &str) -> Option<(usize, usize)> {
    words(text)
        .find(|w| w.text.eq_ignore_ascii_case(target))
        .map(|w| w.span())
}

/// Convert a 1-based (line, column) location into a byte offset of `text`.
///
/// Columns count characters, not bytes. Column `len + 1` of a line resolves
/// to the offset just past its last character.
pub fn byte_offset(text: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 || column == 0 {
        return None;
    }
    let mut line_start = 0;
    for (index, content) in text.split('\n').enumerate() {
        if index + 1 == line {
            return content
                .char_indices()
                .map(|(b, _)| b)
                .chain(std::iter::once(content.len()))
                .nth(column - 1)
                .map(|b| line_start + b);
        }
        line_start += content.len() + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rstest::rstest;

    #[rstest]
    #[case(16, "sql`SELECT * FRO`", Some(("FRO", 13, 16)))]
    #[case(14, "sql`SELECT * FRO`", Some(("FRO", 13, 16)))]
    #[case(13, "sql`SELECT * FRO`", Some(("FRO", 13, 16)))]
    #[case(0, "SELECT * FROM users", Some(("SELECT", 0, 6)))]
    #[case(6, "SELECT * FROM users", Some(("SELECT", 0, 6)))]
    #[case(19, "SELECT * FROM users", Some(("users", 14, 19)))]
    #[case(7, "id = -1.5", Some(("-1.5", 5, 9)))]
    #[case(21, "SELECT * FROM users WHERE", Some(("WHERE", 20, 25)))]
    fn locates_enclosing_word(
        #[case] offset: usize,
        #[case] text: &str,
        #[case] expected: Option<(&str, usize, usize)>,
    ) {
        let found = locate(offset, text);
        let found = found.as_ref().map(|w| (w.text.as_str(), w.start, w.end));
        assert_eq!(found, expected);
    }

    #[rstest]
    #[case(3, "id = -1.5")]
    #[case(8, "SELECT *   FROM")]
    #[case(30, "SELECT * FROM users")]
    #[case(0, "")]
    #[case(1, "(  )")]
    fn no_word_covers_offset(#[case] offset: usize, #[case] text: &str) {
        assert_eq!(locate(offset, text), None);
    }

    #[test]
    fn numbers_keep_their_fraction() {
        let found: Vec<_> = words("x = 3.25, y = .5e1").map(|w| w.text).collect();
        assert_eq!(found, vec!["x", "3.25", "y", ".5e1"]);
    }

    #[rstest]
    #[case("SELECT * FROM users", "users", Some((14, 19)))]
    #[case("SELECT * FROM users JOIN user", "user", Some((25, 29)))]
    #[case("SELECT username FROM users", "user", None)]
    #[case("SELECT id FROM users WHERE i = 1", "i", Some((27, 28)))]
    #[case("SELECT * FROM users", "", None)]
    fn finds_first_whole_word(
        #[case] text: &str,
        #[case] target: &str,
        #[case] expected: Option<(usize, usize)>,
    ) {
        assert_eq!(first_whole_word(text, target), expected);
    }

    #[test]
    fn finds_whole_word_ignoring_case() {
        let text = "INSERT INTO users (id) values (1, 2)";
        assert_eq!(first_whole_word_ignore_case(text, "VALUES"), Some((23, 29)));
        assert_eq!(first_whole_word_ignore_case(text, "VALUE"), None);
    }

    #[rstest]
    #[case("SELECT 1", 1, 1, Some(0))]
    #[case("SELECT 1", 1, 8, Some(7))]
    #[case("SELECT 1", 1, 9, Some(8))]
    #[case("SELECT 1", 1, 10, None)]
    #[case("SELECT\n  id", 2, 3, Some(9))]
    #[case("SELECT 'é' FRM", 1, 12, Some(12))]
    #[case("SELECT", 0, 1, None)]
    #[case("SELECT", 3, 1, None)]
    fn converts_line_and_column(
        #[case] text: &str,
        #[case] line: usize,
        #[case] column: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(byte_offset(text, line, column), expected);
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace() || "`~!@#$%^&*()-=+[{]}\\|;:'\",.<>/?".contains(c)
    }

    #[test]
    fn located_span_always_encloses_offset_and_is_maximal() {
        let text = "SELECT u.id, u.name FROM users u WHERE u.email = \"a@b\" AND (x <> y);";
        let mut rng = rand::rng();
        for _ in 0..500 {
            let offset = rng.random_range(0..=text.len());
            match locate(offset, text) {
                Some(word) => {
                    assert!(word.encloses(offset), "{word:?} does not enclose {offset}");
                    assert_eq!(&text[word.start..word.end], word.text);
                    let before = text[..word.start].chars().next_back();
                    let after = text[word.end..].chars().next();
                    assert!(before.is_none_or(is_separator), "{word:?} not maximal");
                    assert!(after.is_none_or(is_separator), "{word:?} not maximal");
                }
                None => assert!(
                    words(text).all(|w| !w.encloses(offset)),
                    "a word covers {offset} but none was located"
                ),
            }
        }
    }
}
