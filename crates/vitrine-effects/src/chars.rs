//! Character constants for the background and glitch effects.

/// Vertical grid line.
pub const GRID_V: char = '│';

/// Horizontal grid line.
pub const GRID_H: char = '─';

/// Grid line crossing.
pub const GRID_X: char = '┼';

/// Fill block for rasterized particle shapes.
pub const FILL: char = '█';

/// Single-cell glyphs for the smallest particles, by shape.
pub const SMALL_SQUARE: char = '▪';
pub const SMALL_CIRCLE: char = '•';
pub const SMALL_TRIANGLE: char = '▴';

/// Characters substituted into text during a matrix glitch burst.
pub const MATRIX_CHARS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];
