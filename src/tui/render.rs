//! Turn ratatui buffers into printable lines for static output

use colored::Colorize;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use unicode_width::UnicodeWidthStr;

/// Render something into an off-screen buffer of `width` x `height` and
/// return its rows as styled text
pub fn render_lines(width: u16, height: u16, draw: impl FnOnce(Rect, &mut Buffer)) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    draw(area, &mut buf);
    buffer_lines(&buf)
}

/// One string per buffer row, trailing blanks dropped
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let end = (area.left()..area.right())
                .rev()
                .find(|&x| {
                    let cell = &buf[(x, y)];
                    cell.symbol() != " " || cell.modifier.contains(Modifier::REVERSED)
                })
                .map_or(area.left(), |x| x + 1);

            let mut line = String::new();
            let mut run = String::new();
            let mut run_style = (Color::Reset, Modifier::empty());
            let mut skip = 0;
            for x in area.left()..end {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let cell = &buf[(x, y)];
                let symbol = cell.symbol();
                // Wide glyphs cover the following cell(s)
                skip = symbol.width().saturating_sub(1);
                let style = (cell.fg, cell.modifier);
                if style != run_style && !run.is_empty() {
                    line.push_str(&paint(&run, run_style));
                    run.clear();
                }
                run_style = style;
                run.push_str(symbol);
            }
            line.push_str(&paint(&run, run_style));
            line
        })
        .collect()
}

fn paint(text: &str, (fg, modifier): (Color, Modifier)) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut styled = match fg {
        Color::Cyan => text.cyan(),
        Color::Yellow => text.yellow(),
        Color::Green => text.green(),
        Color::Blue => text.blue(),
        Color::Red => text.red(),
        Color::Magenta => text.magenta(),
        Color::White => text.white(),
        Color::DarkGray => text.bright_black(),
        _ => text.normal(),
    };
    if modifier.contains(Modifier::BOLD) {
        styled = styled.bold();
    }
    if modifier.contains(Modifier::DIM) {
        styled = styled.dimmed();
    }
    if modifier.contains(Modifier::UNDERLINED) {
        styled = styled.underline();
    }
    if modifier.contains(Modifier::REVERSED) {
        styled = styled.reversed();
    }
    styled.to_string()
}
