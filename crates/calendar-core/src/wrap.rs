//! Greedy word-wrap under a pixel-width budget.
//!
//! Width is measured by the caller's font metrics ([`TextMeasure`]), so the
//! same engine serves every font the renderer uses. Lines break at spaces
//! and, except on the last line, after hyphens. The last line gets an
//! ellipsis when text remains and the ellipsis still fits.
//!
//! A token wider than the budget with no break point is emitted as-is and
//! logged. Every iteration either finishes or consumes at least one byte, so
//! wrapping always terminates.

use alloc::string::String;
use alloc::vec::Vec;

/// Appended to a truncated last line.
pub const ELLIPSIS: &str = "...";

/// Font metrics provider: pixel width of a string in the active font.
pub trait TextMeasure {
    /// Width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> u32,
{
    fn text_width(&self, text: &str) -> u32 {
        self(text)
    }
}

/// A candidate place to end the current line.
#[derive(Clone, Copy)]
struct Break<'t> {
    /// Text emitted on this line (hyphen kept, space dropped).
    line: &'t str,
    /// Text left for the following lines.
    rest: &'t str,
}

fn break_points(text: &str, allow_hyphen: bool) -> impl Iterator<Item = Break<'_>> {
    text.char_indices().filter_map(move |(at, ch)| {
        // ' ' and '-' are single bytes, so `at + 1` is a char boundary.
        let after = at.saturating_add(1);
        let line = match ch {
            ' ' => text.get(..at)?,
            '-' if allow_hyphen => text.get(..after)?,
            _ => return None,
        };
        let rest = text.get(after..)?;
        (!line.trim_end().is_empty()).then_some(Break { line, rest })
    })
}

/// Wrap `text` into at most `max_lines` lines no wider than `max_width`.
///
/// Pure function of its arguments. Lines only exceed `max_width` when they
/// hold a single token that cannot be broken.
///
/// ```
/// use calendar_core::wrap;
///
/// let measure = |s: &str| s.chars().count() as u32 * 6;
/// let lines = wrap("Harvest Festival Competition Announcement", 120, 2, &measure);
/// assert_eq!(lines, ["Harvest Festival", "Competition..."]);
/// ```
pub fn wrap<M>(text: &str, max_width: u32, max_lines: usize, measure: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut lines = Vec::new();
    let mut rest = text.trim_start_matches(' ');
    let mut scratch = String::new();

    while !rest.is_empty() && lines.len() < max_lines {
        if measure.text_width(rest) <= max_width {
            lines.push(String::from(rest));
            break;
        }

        let last_line = lines.len().saturating_add(1) == max_lines;
        let fits = |candidate: &Break<'_>| measure.text_width(candidate.line) <= max_width;

        if last_line {
            let with_ellipsis = break_points(rest, false)
                .filter(|candidate| {
                    scratch.clear();
                    scratch.push_str(candidate.line);
                    scratch.push_str(ELLIPSIS);
                    measure.text_width(&scratch) <= max_width
                })
                .last();
            let line = match with_ellipsis {
                Some(candidate) => {
                    let mut line = String::from(candidate.line);
                    line.push_str(ELLIPSIS);
                    line
                }
                None => match break_points(rest, false).filter(fits).last() {
                    Some(candidate) => String::from(candidate.line),
                    None => {
                        let token = break_points(rest, false)
                            .next()
                            .map_or(rest, |candidate| candidate.line);
                        log_overwide(token, max_width);
                        String::from(token)
                    }
                },
            };
            lines.push(line);
            break;
        }

        let chosen = break_points(rest, true)
            .filter(fits)
            .last()
            .or_else(|| {
                let first = break_points(rest, true).next();
                if let Some(candidate) = first {
                    log_overwide(candidate.line, max_width);
                }
                first
            });
        match chosen {
            Some(candidate) => {
                lines.push(String::from(candidate.line));
                rest = candidate.rest.trim_start_matches(' ');
            }
            None => {
                log_overwide(rest, max_width);
                lines.push(String::from(rest));
                break;
            }
        }
    }

    lines
}

fn log_overwide(token: &str, max_width: u32) {
    tracing::warn!(token, max_width, "unbreakable text exceeds wrap width");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(s: &str) -> u32 {
        s.chars().count() as u32 * 6
    }

    #[test]
    fn short_text_is_single_line() {
        assert_eq!(wrap("Swim", 120, 2, &mono), ["Swim"]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap("", 120, 2, &mono).is_empty());
        assert!(wrap("   ", 120, 2, &mono).is_empty());
    }

    #[test]
    fn zero_lines_yields_nothing() {
        assert!(wrap("anything at all", 10, 0, &mono).is_empty());
    }

    #[test]
    fn breaks_at_rightmost_fitting_space() {
        // 10 chars per line.
        let lines = wrap("one two three four", 60, 3, &mono);
        assert_eq!(lines, ["one two", "three four"]);
    }

    #[test]
    fn hyphen_stays_on_line() {
        let lines = wrap("well-known places", 36, 3, &mono);
        assert_eq!(lines, ["well-", "known", "places"]);
    }

    #[test]
    fn last_line_ignores_hyphens() {
        // Only a space may end the final line.
        let lines = wrap("aa bbbbbb-cc dd", 60, 1, &mono);
        assert_eq!(lines, ["aa..."]);
    }

    #[test]
    fn ellipsis_only_when_it_fits() {
        // "abcd efgh" at 5 chars: "abcd..." does not fit, "abcd" does.
        let lines = wrap("abcd efgh", 30, 1, &mono);
        assert_eq!(lines, ["abcd"]);
    }

    #[test]
    fn unbreakable_token_is_emitted_whole() {
        let lines = wrap("Supercalifragilistic", 30, 2, &mono);
        assert_eq!(lines, ["Supercalifragilistic"]);
    }

    #[test]
    fn overwide_first_token_then_continues() {
        let lines = wrap("Supercalifragilistic is long", 60, 2, &mono);
        assert_eq!(lines, ["Supercalifragilistic", "is long"]);
    }

    #[test]
    fn multibyte_text_does_not_split_chars() {
        let lines = wrap("Übung für Åsa und Öl", 60, 3, &mono);
        assert_eq!(lines, ["Übung für", "Åsa und Öl"]);
    }

    #[test]
    fn wrapping_is_deterministic() {
        let text = "Parent-teacher conference and school board meeting";
        assert_eq!(wrap(text, 90, 2, &mono), wrap(text, 90, 2, &mono));
    }
}
