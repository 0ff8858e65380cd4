//! Glyphs used to paint particles into terminal cells.

/// Petal body.
pub const PETAL_CHAR: char = '✿';

/// Leaf body.
pub const LEAF_CHAR: char = '❦';

/// Rain streak.
pub const RAIN_CHAR: char = '│';

/// Snowflakes from small to large.
pub const SNOW_CHARS: &[char] = &['·', '•', '❄'];

/// Stars from dim to bright.
pub const STAR_CHARS: &[char] = &['·', '✧', '✦'];

/// Pick a glyph from `chars` by how far `value` sits in `0.0..max`.
pub fn graded(chars: &[char], value: f32, max: f32) -> char {
    let idx = ((value / max) * chars.len() as f32) as usize;
    chars[idx.min(chars.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graded_bounds() {
        assert_eq!(graded(SNOW_CHARS, 0.0, 4.0), '·');
        assert_eq!(graded(SNOW_CHARS, 2.0, 4.0), '•');
        assert_eq!(graded(SNOW_CHARS, 4.0, 4.0), '❄');
        assert_eq!(graded(SNOW_CHARS, 40.0, 4.0), '❄');
    }
}
