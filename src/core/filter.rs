use super::ranges::EMOJI_RANGES;

/// Remove every emoji code point from `text`.
///
/// Returns the cleaned text and the number of code points removed. Everything
/// else is kept in its original order. Works on individual code points, so a
/// joined sequence loses its emoji parts and keeps any non-emoji ones (a keycap
/// sequence keeps its digit and combining mark).
pub fn remove_emojis(text: &str) -> (String, usize) {
    let mut removed = 0;
    let cleaned = text
        .chars()
        .filter(|&c| {
            let is_emoji = EMOJI_RANGES.contains(c);
            if is_emoji {
                removed += 1;
            }
            !is_emoji
        })
        .collect();
    (cleaned, removed)
}
