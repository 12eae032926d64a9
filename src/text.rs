use std::collections::HashMap;

use once_cell::sync::Lazy;

// Text consts
pub const C_WIDTH: usize = 3;
pub const C_HEIGHT: usize = 5;
pub type CharGrid = [[bool; C_WIDTH]; C_HEIGHT];

/// Glyphs keyed by lowercase character.
pub static GRIDS: Lazy<HashMap<char, CharGrid>> = Lazy::new(|| {
    GLYPHS
        .iter()
        .map(|(c, rows)| (*c, parse_grid(rows)))
        .collect()
});

fn parse_grid(rows: &[&str; C_HEIGHT]) -> CharGrid {
    let mut grid = [[false; C_WIDTH]; C_HEIGHT];
    for (y, row) in rows.iter().enumerate() {
        for (x, px) in row.bytes().take(C_WIDTH).enumerate() {
            grid[y][x] = px == b'#';
        }
    }
    grid
}

/// Width in pixels of `text` drawn with square pixels of side `px`.
/// Characters without a glyph take no room.
pub fn text_width(text: &str, px: u32) -> u32 {
    let n = glyphs(text).count() as u32;
    match n {
        0 => 0,
        n => (n * (C_WIDTH as u32 + 1) - 1) * px,
    }
}

pub fn text_height(px: u32) -> u32 {
    C_HEIGHT as u32 * px
}

/// Filled pixel squares `(x, y, side)` for `text` with its top-left corner at
/// `(x, y)`.
pub fn text_pixels(text: &str, (x, y): (i32, i32), px: u32) -> Vec<(i32, i32, u32)> {
    let advance = (C_WIDTH as i32 + 1) * px as i32;
    glyphs(text)
        .enumerate()
        .flat_map(|(i, grid)| {
            let gx = x + i as i32 * advance;
            grid.iter().enumerate().flat_map(move |(row, cells)| {
                cells.iter().enumerate().filter(|(_, on)| **on).map(move |(col, _)| {
                    (gx + col as i32 * px as i32, y + row as i32 * px as i32, px)
                })
            })
        })
        .collect()
}

fn glyphs(text: &str) -> impl Iterator<Item = &'static CharGrid> + '_ {
    text.chars().filter_map(|c| GRIDS.get(&c.to_ascii_lowercase()))
}

static GLYPHS: [(char, [&str; C_HEIGHT]); 43] = [
    ('a', [".#.", "#.#", "###", "#.#", "#.#"]),
    ('b', ["##.", "#.#", "##.", "#.#", "##."]),
    ('c', [".##", "#..", "#..", "#..", ".##"]),
    ('d', ["##.", "#.#", "#.#", "#.#", "##."]),
    ('e', ["###", "#..", "##.", "#..", "###"]),
    ('f', ["###", "#..", "##.", "#..", "#.."]),
    ('g', [".##", "#..", "#.#", "#.#", ".##"]),
    ('h', ["#.#", "#.#", "###", "#.#", "#.#"]),
    ('i', ["###", ".#.", ".#.", ".#.", "###"]),
    ('j', ["..#", "..#", "..#", "#.#", ".#."]),
    ('k', ["#.#", "#.#", "##.", "#.#", "#.#"]),
    ('l', ["#..", "#..", "#..", "#..", "###"]),
    ('m', ["#.#", "###", "###", "#.#", "#.#"]),
    ('n', ["##.", "#.#", "#.#", "#.#", "#.#"]),
    ('o', [".#.", "#.#", "#.#", "#.#", ".#."]),
    ('p', ["##.", "#.#", "##.", "#..", "#.."]),
    ('q', [".#.", "#.#", "#.#", "##.", ".##"]),
    ('r', ["##.", "#.#", "##.", "#.#", "#.#"]),
    ('s', [".##", "#..", ".#.", "..#", "##."]),
    ('t', ["###", ".#.", ".#.", ".#.", ".#."]),
    ('u', ["#.#", "#.#", "#.#", "#.#", "###"]),
    ('v', ["#.#", "#.#", "#.#", "#.#", ".#."]),
    ('w', ["#.#", "#.#", "###", "###", "#.#"]),
    ('x', ["#.#", "#.#", ".#.", "#.#", "#.#"]),
    ('y', ["#.#", "#.#", ".#.", ".#.", ".#."]),
    ('z', ["###", "..#", ".#.", "#..", "###"]),
    ('0', ["###", "#.#", "#.#", "#.#", "###"]),
    ('1', [".#.", "##.", ".#.", ".#.", "###"]),
    ('2', ["##.", "..#", ".#.", "#..", "###"]),
    ('3', ["##.", "..#", ".#.", "..#", "##."]),
    ('4', ["#.#", "#.#", "###", "..#", "..#"]),
    ('5', ["###", "#..", "##.", "..#", "##."]),
    ('6', [".##", "#..", "###", "#.#", "###"]),
    ('7', ["###", "..#", ".#.", ".#.", ".#."]),
    ('8', ["###", "#.#", "###", "#.#", "###"]),
    ('9', ["###", "#.#", "###", "..#", "##."]),
    (' ', ["...", "...", "...", "...", "..."]),
    (':', ["...", ".#.", "...", ".#.", "..."]),
    ('-', ["...", "...", "###", "...", "..."]),
    ('\'', [".#.", ".#.", "...", "...", "..."]),
    ('.', ["...", "...", "...", "...", ".#."]),
    (',', ["...", "...", "...", ".#.", "#.."]),
    ('!', [".#.", ".#.", ".#.", "...", ".#."]),
];
