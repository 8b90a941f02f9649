use std::borrow::Cow;
use std::ops::Range;

/// Appended to text cut short by `clamp_lines`
pub const ELLIPSIS: char = '…';

/// Limit `text` to `max_lines` lines of at most `chars_per_line` characters.
///
/// Text that already fits is returned borrowed and untouched. Otherwise the
/// result is a prefix of `text` (original spacing and newlines kept) ending
/// in `…`, and still wraps to at most `max_lines` lines.
pub fn clamp_lines(text: &str, chars_per_line: usize, max_lines: usize) -> Cow<'_, str> {
    let lines = wrap(text, chars_per_line);
    if lines.len() <= max_lines {
        return Cow::Borrowed(text);
    }
    if max_lines == 0 {
        return Cow::Owned(String::new());
    }

    // Leave one column on the last kept line for the ellipsis
    let last = lines[max_lines - 1].clone();
    let room = chars_per_line.max(1) - 1;
    let cut = text[last.clone()]
        .char_indices()
        .nth(room)
        .map_or(last.end, |(offset, _)| last.start + offset);

    Cow::Owned(format!("{}{}", text[..cut].trim_end(), ELLIPSIS))
}

/// Greedy word wrap, returning each line as a byte range into `text`.
///
/// Explicit newlines start a new line, words longer than a line are split.
fn wrap(text: &str, chars_per_line: usize) -> Vec<Range<usize>> {
    let width = chars_per_line.max(1);
    let mut lines = Vec::new();
    let mut paragraph_start = 0;

    for paragraph in text.split('\n') {
        let mut line: Option<Range<usize>> = None;

        for word in word_spans(paragraph) {
            let mut start = paragraph_start + word.start;
            let end = paragraph_start + word.end;

            while text[start..end].chars().count() > width {
                if let Some(current) = line.take() {
                    lines.push(current);
                }
                let split = text[start..end]
                    .char_indices()
                    .nth(width)
                    .map_or(end, |(offset, _)| start + offset);
                lines.push(start..split);
                start = split;
            }

            line = match line {
                Some(current) if text[current.start..end].chars().count() <= width => Some(current.start..end),
                Some(current) => {
                    lines.push(current);
                    Some(start..end)
                }
                None => Some(start..end),
            };
        }

        lines.push(line.unwrap_or(paragraph_start..paragraph_start));
        paragraph_start += paragraph.len() + 1;
    }

    lines
}

/// Byte ranges of the whitespace-separated words in `text`
fn word_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    text.split(char::is_whitespace)
        .filter(|word| !word.is_empty())
        .map(move |word| {
            let start = word.as_ptr() as usize - text.as_ptr() as usize;
            start..start + word.len()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTION: &str = "Your perfect pack for everyday use and walks in the forest. \
        Stash your laptop (up to 15 inches) in the padded sleeve, your everyday essentials \
        in the main compartment, and your water bottle in the side pocket.";

    fn lines(text: &str, chars_per_line: usize) -> Vec<&str> {
        wrap(text, chars_per_line).into_iter().map(|range| &text[range]).collect()
    }

    /// Clamped output is the original text cut short, plus the ellipsis
    fn assert_clamped_prefix(original: &str, clamped: &str, chars_per_line: usize, max_lines: usize) {
        let body = clamped.strip_suffix(ELLIPSIS).expect("clamped text ends with an ellipsis");
        assert!(original.starts_with(body), "{clamped:?} is not a prefix of {original:?}");
        assert!(wrap(clamped, chars_per_line).len() <= max_lines);
    }

    #[test]
    fn test_short_text_is_borrowed() {
        let clamped = clamp_lines("Slim-fitting style", 40, 3);
        assert!(matches!(clamped, Cow::Borrowed("Slim-fitting style")));
    }

    #[test]
    fn test_long_text_is_cut_to_three_lines() {
        let clamped = clamp_lines(DESCRIPTION, 40, 3);
        assert_clamped_prefix(DESCRIPTION, &clamped, 40, 3);
    }

    #[test]
    fn test_exact_fit_is_not_truncated() {
        // Three lines of exactly ten characters
        let text = "aaaa bbbbb cccc ddddd eeee fffff";
        assert_eq!(lines(text, 10), vec!["aaaa bbbbb", "cccc ddddd", "eeee fffff"]);
        assert_eq!(clamp_lines(text, 10, 3), text);
    }

    #[test]
    fn test_overlong_word_is_split() {
        assert_eq!(lines("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(clamp_lines("abcdefghijklmnop", 4, 2), "abcdefg…");
    }

    #[test]
    fn test_long_url_stays_a_prefix() {
        let text = format!("See https://example.com/{}/x for details", "a".repeat(100));
        let clamped = clamp_lines(&text, 48, 3);

        assert!(!clamped.contains("a a"));
        assert_clamped_prefix(&text, &clamped, 48, 3);
    }

    #[test]
    fn test_newlines_are_kept() {
        let text = "one\ntwo\nthree\nfour";
        assert_eq!(lines(text, 80), vec!["one", "two", "three", "four"]);
        assert_eq!(clamp_lines(text, 80, 3), "one\ntwo\nthree…");
    }

    #[test]
    fn test_original_spacing_is_kept() {
        let text = "Cotton  blend,   machine wash. Imported from the best mills in the region.";
        let clamped = clamp_lines(text, 20, 2);

        assert!(clamped.starts_with("Cotton  blend,   machine"));
        assert_clamped_prefix(text, &clamped, 20, 2);
    }

    #[test]
    fn test_multibyte_text() {
        let text = "Étoffe légère, coupe ajustée, idéale pour l'été et les soirées fraîches.";
        let clamped = clamp_lines(text, 12, 2);
        assert_clamped_prefix(text, &clamped, 12, 2);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(clamp_lines("", 40, 3), "");
    }
}
