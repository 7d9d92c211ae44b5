//! Block-character font for the large time readout.

use crate::config::FONT_SIZE_MIN;

pub const GLYPH_HEIGHT: u16 = 5;

/// Font size points covered by one step of horizontal scale
const POINTS_PER_SCALE: u16 = 16;

fn glyph(c: char) -> Option<[&'static str; GLYPH_HEIGHT as usize]> {
    let rows = match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        '.' => [" ", " ", " ", " ", "█"],
        _ => return None,
    };
    Some(rows)
}

/// Horizontal scale for a font size: 32-47 is 1x, 48-63 is 2x, and so on
pub fn scale_for(font_size: u16) -> u16 {
    1 + font_size.saturating_sub(FONT_SIZE_MIN) / POINTS_PER_SCALE
}

/// Width in cells of `text` drawn at `scale`, or `None` if it has unsupported characters
pub fn width(text: &str, scale: u16) -> Option<u16> {
    let mut total = 0u16;
    for (i, c) in text.chars().enumerate() {
        let rows = glyph(c)?;
        if i > 0 {
            total += 1;
        }
        total += rows[0].chars().count() as u16 * scale;
    }
    Some(total)
}

/// Render `text` as rows of block characters, each glyph column repeated `scale` times
pub fn render(text: &str, scale: u16) -> Option<Vec<String>> {
    let glyphs = text.chars().map(glyph).collect::<Option<Vec<_>>>()?;
    let rows = (0..GLYPH_HEIGHT as usize)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| {
                    g[row]
                        .chars()
                        .flat_map(|c| std::iter::repeat_n(c, scale as usize))
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    Some(rows)
}

/// Largest scale not above `preferred` at which `text` fits in `max_width`
pub fn fitting_scale(text: &str, preferred: u16, max_width: u16) -> Option<u16> {
    (1..=preferred.max(1))
        .rev()
        .find(|&scale| width(text, scale).is_some_and(|w| w <= max_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for_font_sizes() {
        assert_eq!(scale_for(32), 1);
        assert_eq!(scale_for(42), 1);
        assert_eq!(scale_for(48), 2);
        assert_eq!(scale_for(64), 3);
        assert_eq!(scale_for(80), 4);
    }

    #[test]
    fn test_width() {
        // 6 digits * 3 + 2 colons * 1 + 7 gaps
        assert_eq!(width("00:00:00", 1), Some(27));
        assert_eq!(width("00:00:00", 2), Some(47));
        assert_eq!(width("1a", 1), None);
    }

    #[test]
    fn test_render_rows_match_width() {
        let rows = render("12:34", 2).unwrap();
        assert_eq!(rows.len(), GLYPH_HEIGHT as usize);
        let expected = width("12:34", 2).unwrap() as usize;
        for row in rows {
            assert_eq!(row.chars().count(), expected);
        }
    }

    #[test]
    fn test_fitting_scale() {
        assert_eq!(fitting_scale("00:00:00", 4, 200), Some(4));
        assert_eq!(fitting_scale("00:00:00", 4, 50), Some(2));
        assert_eq!(fitting_scale("00:00:00", 4, 10), None);
    }
}
