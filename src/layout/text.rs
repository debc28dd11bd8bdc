use crate::units::Pt;

/// Slack allowed when comparing measured text against a box, so that text which fits
/// exactly isn't rejected over float rounding
pub const FUZZ: f32 = 1e-3;

/// Anything that can tell how wide a run of text is at a given size. Implemented by
/// [`Font`](crate::Font); tests use fixed-advance stand-ins.
pub trait TextMetrics {
    /// Width of `text` set on a single line at `size`
    fn width_of(&self, text: &str, size: Pt) -> Pt;
}

/// A single line produced by [wrap_words]
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub width: Pt,
}

/// Breaks `text` into lines no wider than `max_width`, breaking only between words.
///
/// Runs of whitespace (including newlines) collapse into single spaces, the same way a
/// paragraph would be set. Returns [None] if any single word is wider than `max_width`
/// on its own, since words are never split. Empty or blank text produces no lines.
pub fn wrap_words(
    metrics: &dyn TextMetrics,
    text: &str,
    size: Pt,
    max_width: Pt,
) -> Option<Vec<WrappedLine>> {
    let limit = max_width + Pt(FUZZ);
    let mut lines: Vec<WrappedLine> = Vec::new();
    let mut current: Option<WrappedLine> = None;

    for word in text.split_whitespace() {
        let word_width = metrics.width_of(word, size);
        if word_width > limit {
            return None;
        }

        current = Some(match current.take() {
            None => WrappedLine {
                text: word.to_string(),
                width: word_width,
            },
            Some(mut line) => {
                let candidate = format!("{} {}", line.text, word);
                let candidate_width = metrics.width_of(&candidate, size);
                if candidate_width > limit {
                    lines.push(line);
                    WrappedLine {
                        text: word.to_string(),
                        width: word_width,
                    }
                } else {
                    line.text = candidate;
                    line.width = candidate_width;
                    line
                }
            }
        });
    }

    lines.extend(current);
    Some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// every character is exactly one em wide
    struct Square;

    impl TextMetrics for Square {
        fn width_of(&self, text: &str, size: Pt) -> Pt {
            Pt(text.chars().count() as f32 * size.0)
        }
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_words(&Square, "Oil on canvas", Pt(1.0), Pt(20.0)).expect("fits");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Oil on canvas");
        assert_eq!(lines[0].width, Pt(13.0));
    }

    #[test]
    fn breaks_between_words() {
        let lines = wrap_words(&Square, "Oil on canvas", Pt(1.0), Pt(8.0)).expect("fits");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Oil on", "canvas"]);
    }

    #[test]
    fn whitespace_collapses() {
        let lines = wrap_words(&Square, "  Dragon\n\tHoard  ", Pt(1.0), Pt(40.0)).expect("fits");
        assert_eq!(lines[0].text, "Dragon Hoard");
    }

    #[test]
    fn overlong_word_does_not_wrap() {
        assert_eq!(wrap_words(&Square, "Supercalifragilistic", Pt(1.0), Pt(10.0)), None);
    }

    #[test]
    fn blank_text_has_no_lines() {
        let lines = wrap_words(&Square, "   ", Pt(12.0), Pt(1.0)).expect("fits");
        assert!(lines.is_empty());
    }

    #[test]
    fn exact_width_fits() {
        let lines = wrap_words(&Square, "abcd", Pt(2.5), Pt(10.0)).expect("fits");
        assert_eq!(lines.len(), 1);
    }
}
