use crate::key::Key;
use crate::puzzle::Puzzle;
use crate::scorer::{map_characters, Glyph};

/// Plain-text view of the whole ciphertext under `key`.
///
/// First line is the key itself. Unresolved symbols print as `?`, or as
/// `.<symbol>.` when `show_symbols` is set, in which case runs of markers are
/// merged and word gaps widened so the numbers stay readable.
pub fn render_text(puzzle: &Puzzle, key: &Key, show_symbols: bool) -> String {
    let body: String = map_characters(&puzzle.characters, &puzzle.assumed, key)
        .into_iter()
        .map(|glyph| match glyph {
            Glyph::Plain(c) => c.to_string(),
            Glyph::Cipher(s) if show_symbols => format!(".{}.", s),
            Glyph::Cipher(_) => "?".to_string(),
        })
        .collect();

    let body = if show_symbols {
        body.replace("..", ".")
            .replace(" .", " ")
            .replace(". ", " ")
            .replace(' ', "   ")
    } else {
        body
    };

    format!("{}\n{}", key, body)
}
