//! Word wrapping for panel canvases
//!
//! Greedy wrap against a caller-supplied measure function so the logic
//! stays independent of the font stack (tests measure by character count,
//! the painter measures with the real font).

/// Wrap `text` into at most `max_lines` lines no wider than `max_width`.
///
/// Words never split; a word wider than the limit gets a line to itself.
/// When the text doesn't fit, the last kept line gains an ellipsis.
pub fn wrap_lines(
    text: &str,
    max_width: f32,
    max_lines: usize,
    measure: impl Fn(&str) -> f32,
) -> Vec<String> {
    if max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };

        if !line.is_empty() && measure(&candidate) > max_width {
            lines.push(line);
            line = word.to_string();

            if lines.len() >= max_lines {
                // Out of room with words still pending
                if let Some(last) = lines.last_mut() {
                    last.push_str("...");
                }
                return lines;
            }
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One unit per character, so widths are easy to reason about
    fn char_width(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_lines("hello world", 20.0, 5, char_width);
        assert_eq!(lines, vec!["hello world"]);
    }

    #[test]
    fn wraps_at_the_width_limit() {
        let lines = wrap_lines("aaa bbb ccc ddd", 7.0, 5, char_width);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn truncation_adds_an_ellipsis() {
        let lines = wrap_lines("one two three four five six", 7.0, 2, char_width);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."), "got {:?}", lines);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let lines = wrap_lines("tiny incomprehensibilities tiny", 10.0, 5, char_width);
        assert_eq!(lines, vec!["tiny", "incomprehensibilities", "tiny"]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap_lines("", 10.0, 5, char_width).is_empty());
        assert!(wrap_lines("   ", 10.0, 5, char_width).is_empty());
        assert!(wrap_lines("words", 10.0, 0, char_width).is_empty());
    }
}
