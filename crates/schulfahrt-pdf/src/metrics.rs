//! Text measurement approximations
//!
//! The built-in PDF fonts ship without glyph metrics, so widths are
//! estimated from an average glyph advance. That is enough for
//! centering, right-alignment and greedy wrapping of short label text.

/// One typographic point in millimetres
const PT_TO_MM: f64 = 0.352_778;

/// Average Helvetica glyph advance in em
const AVG_GLYPH_EM: f64 = 0.5;

/// Approximate rendered width of a text run in mm
pub(crate) fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * AVG_GLYPH_EM * PT_TO_MM
}

/// Greedy word wrap to a maximum line width in mm
///
/// Embedded newlines force breaks. A single word wider than the limit
/// overflows its line rather than being split mid-word. Always returns
/// at least one line.
pub(crate) fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if current.is_empty() || text_width(&candidate, font_size) <= max_width {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_grows_with_text_and_size() {
        assert_eq!(text_width("", 12.0), 0.0);
        assert!(text_width("Mustermann", 12.0) > text_width("Max", 12.0));
        assert!(text_width("Max", 18.0) > text_width("Max", 9.0));
    }

    #[test]
    fn test_wrap_respects_max_width() {
        let lines = wrap_text("Klasse 3b Klasse 4a Klasse 5c", 20.0, 12.0);
        assert!(lines.len() > 1);
        for line in &lines {
            // A line may hold a single oversized word, but never grows
            // past the limit by appending another.
            assert!(line.split_whitespace().count() <= 2);
        }
    }

    #[test]
    fn test_wide_line_stays_single() {
        let lines = wrap_text("Gruppe: 3b", 100.0, 12.0);
        assert_eq!(lines, vec!["Gruppe: 3b".to_string()]);
    }

    #[test]
    fn test_embedded_newlines_force_breaks() {
        let lines = wrap_text("Abfahrt: --:-- (N/A)\nAnkunft: --:-- (N/A)", 100.0, 9.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Abfahrt: --:-- (N/A)");
    }

    #[test]
    fn test_empty_text_is_one_blank_line() {
        assert_eq!(wrap_text("", 50.0, 9.0), vec![String::new()]);
    }
}
