//! Pixel-art letters for the brand logo.

/// Height of every logo glyph, in rows.
pub const LOGO_HEIGHT: usize = 7;

const LETTER_A: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

const LETTER_B: [&str; 7] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
];

const LETTER_E: [&str; 7] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██████",
];

const LETTER_I: [&str; 7] = [
    "██████",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "██████",
];

const LETTER_N: [&str; 7] = [
    "██   ██",
    "███  ██",
    "████ ██",
    "██ ████",
    "██  ███",
    "██   ██",
    "██   ██",
];

const LETTER_O: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

const LETTER_T: [&str; 7] = [
    "██████",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

const LETTER_Y: [&str; 7] = [
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

const SPACE: [&str; 7] = ["  ", "  ", "  ", "  ", "  ", "  ", "  "];

fn glyph(ch: char) -> &'static [&'static str; 7] {
    match ch.to_ascii_uppercase() {
        'A' => &LETTER_A,
        'B' => &LETTER_B,
        'E' => &LETTER_E,
        'I' => &LETTER_I,
        'N' => &LETTER_N,
        'O' => &LETTER_O,
        'T' => &LETTER_T,
        'Y' => &LETTER_Y,
        _ => &SPACE,
    }
}

/// Build the large pixel-art rendering of `text`.
///
/// Returns [`LOGO_HEIGHT`] strings, one per row. Characters without a
/// glyph render as blank space, which also covers the word gap.
pub fn build_logo_art(text: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(LOGO_HEIGHT);

    for row in 0..LOGO_HEIGHT {
        let mut line = String::new();
        for (i, ch) in text.chars().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(glyph(ch)[row]);
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_uniform_per_rendering() {
        let art = build_logo_art("NEOBYTE AI");
        assert_eq!(art.len(), LOGO_HEIGHT);
        let width = art[0].chars().count();
        assert!(width > 0);
        for row in &art {
            assert_eq!(row.chars().count(), width);
        }
    }

    #[test]
    fn empty_text_renders_empty_rows() {
        let art = build_logo_art("");
        assert_eq!(art.len(), LOGO_HEIGHT);
        assert!(art.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn prefix_renderings_grow_monotonically() {
        let short = build_logo_art("NE");
        let long = build_logo_art("NEO");
        assert!(long[0].chars().count() > short[0].chars().count());
    }
}
