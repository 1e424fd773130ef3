// Terminal square-wave rendering of a voltage sequence.
//
// Three rails (+1 / 0 / -1), one column group per symbol, corner and
// connector glyphs at level changes, and a bit-position ruler underneath.

use crate::phy::LineCodeKind;
use crate::utils::consts::{PLOT_SYMBOL_WIDTH, PLOT_TICK_STEP, PLOT_WRAP};

/// Aligns ruler columns with the rail labels.
const MARGIN: &str = "   ";

pub fn render(levels: &[i8], line_code: LineCodeKind) -> String {
    let mut out = String::new();
    let symbols_per_bit = line_code.symbols_per_bit();

    for (chunk_index, chunk) in levels.chunks(PLOT_WRAP).enumerate() {
        if chunk_index > 0 {
            out.push('\n');
        }
        render_chunk(&mut out, chunk, chunk_index * PLOT_WRAP, symbols_per_bit);
    }

    if symbols_per_bit == 2 {
        out.push_str("   Bit Position (mid-bit transitions between ticks)\n");
    } else {
        out.push_str("   Bit Position\n");
    }
    out
}

fn row_of(level: i8) -> usize {
    match level {
        1 => 0,
        0 => 1,
        _ => 2,
    }
}

fn render_chunk(
    out: &mut String,
    chunk: &[i8],
    base: usize,
    symbols_per_bit: usize,
) {
    let width = chunk.len() * PLOT_SYMBOL_WIDTH;
    let mut rails = [vec![' '; width], vec![' '; width], vec![' '; width]];

    for (i, &level) in chunk.iter().enumerate() {
        let row = row_of(level);
        for col in i * PLOT_SYMBOL_WIDTH..(i + 1) * PLOT_SYMBOL_WIDTH {
            rails[row][col] = '─';
        }
    }

    for i in 1..chunk.len() {
        if chunk[i] == chunk[i - 1] {
            continue;
        }
        let from = row_of(chunk[i - 1]);
        let to = row_of(chunk[i]);
        let col = i * PLOT_SYMBOL_WIDTH;
        let (top, bottom) = if from < to { (from, to) } else { (to, from) };
        for row in top..=bottom {
            rails[row][col] = if row == from {
                if from < to { '┐' } else { '┘' }
            } else if row == to {
                if from < to { '└' } else { '┌' }
            } else {
                '│'
            };
        }
    }

    for (label, rail) in ["+1 ", " 0 ", "-1 "].iter().zip(rails.iter()) {
        out.push_str(label);
        out.extend(rail.iter());
        out.push('\n');
    }

    // whole-bit labels only; half-bit columns of the Manchester family
    // fall between ticks
    let mut ruler = vec![' '; width];
    for i in 0..chunk.len() {
        let position = base + i;
        if position % PLOT_TICK_STEP != 0 || position % symbols_per_bit != 0 {
            continue;
        }
        let text = (position / symbols_per_bit).to_string();
        for (k, c) in text.chars().enumerate() {
            let col = i * PLOT_SYMBOL_WIDTH + k;
            if col < width {
                ruler[col] = c;
            }
        }
    }
    out.push_str(MARGIN);
    out.extend(ruler.iter());
    out.push('\n');
}
