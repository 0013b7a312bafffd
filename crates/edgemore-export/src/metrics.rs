//! Helvetica metrics, line wrapping, and WinAnsi text encoding.
//!
//! Widths are the standard AFM advance widths in 1/1000 em. The oblique
//! variant shares the bold widths.

use crate::styles::Font;

/// Advance widths for `' '..='~'`.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

const DEFAULT_WIDTH: u16 = 556;

/// Advance width of `ch` in 1/1000 em.
pub fn char_width(font: Font, ch: char) -> u16 {
    let table = match font {
        Font::Helvetica => &HELVETICA,
        Font::HelveticaBold | Font::HelveticaBoldOblique => &HELVETICA_BOLD,
    };

    match ch {
        ' '..='~' => table[ch as usize - 0x20],
        '\u{2022}' => 350,
        '\u{2013}' => 556,
        '\u{2014}' => 1000,
        '\u{2018}' | '\u{2019}' => 222,
        '\u{201C}' | '\u{201D}' => 333,
        '\u{00A0}' => 278,
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` in points at `size`.
pub fn text_width(font: Font, text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(font, c))).sum();
    units as f32 * size / 1000.0
}

/// Greedily wrap `text` into lines no wider than `max_width`.
///
/// Runs of whitespace collapse to a single space. A word wider than the line
/// is broken between characters. Always returns at least one line.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let space = text_width(font, " ", size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = text_width(font, word, size);

        if !current.is_empty() && current_width + space + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Break the oversized word; its tail stays open for following words.
        current_width = 0.0;
        for ch in word.chars() {
            let w = text_width(font, ch.encode_utf8(&mut [0; 4]), size);
            if !current.is_empty() && current_width + w > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Encode `text` for a simple font using `WinAnsiEncoding`.
///
/// Characters outside the encoding become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\t' => b' ',
        ' '..='~' | '\u{00A0}'..='\u{00FF}' => ch as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_afm() {
        assert_eq!(char_width(Font::Helvetica, 'i'), 222);
        assert_eq!(char_width(Font::HelveticaBold, 'i'), 278);
        assert_eq!(char_width(Font::Helvetica, 'W'), 944);
        assert_eq!(char_width(Font::Helvetica, '~'), 584);
        assert_eq!(char_width(Font::Helvetica, '\u{2022}'), 350);
    }

    #[test]
    fn text_width_scales_with_size() {
        let w10 = text_width(Font::Helvetica, "Budget", 10.0);
        let w20 = text_width(Font::Helvetica, "Budget", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-3);
    }

    #[test]
    fn wrap_collapses_whitespace() {
        let lines = wrap_text("  garage \t floor  ", Font::Helvetica, 10.0, 500.0);
        assert_eq!(lines, vec!["garage floor".to_string()]);
    }

    #[test]
    fn wrap_empty_yields_one_empty_line() {
        assert_eq!(wrap_text("", Font::Helvetica, 10.0, 100.0), vec![String::new()]);
        assert_eq!(wrap_text("   ", Font::Helvetica, 10.0, 100.0), vec![String::new()]);
    }

    #[test]
    fn wrap_respects_width() {
        let text = "metallic epoxy with a high gloss topcoat over the whole two car garage";
        let lines = wrap_text(text, Font::Helvetica, 10.0, 120.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(Font::Helvetica, line, 10.0) <= 120.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_breaks_oversized_words() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, Font::Helvetica, 10.0, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width(Font::Helvetica, line, 10.0) <= 100.0);
        }
    }

    #[test]
    fn encodes_win_ansi() {
        assert_eq!(encode_win_ansi("A\u{2022}B"), vec![b'A', 0x95, b'B']);
        assert_eq!(encode_win_ansi("caf\u{e9}"), b"caf\xe9".to_vec());
        assert_eq!(encode_win_ansi("\u{4e2d}"), b"?".to_vec());
    }
}
