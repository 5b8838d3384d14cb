//! Text helpers shared by every screen

use std::path::Path;

const FULL_STAR: char = '★';
const HALF_STAR: char = '½';
const EMPTY_STAR: char = '☆';

/// Render a 0-5 rating as star glyphs
pub fn rating_stars(rating: f64) -> String {
    rating_stars_max(rating, 5)
}

/// Render a rating as `max_stars` glyphs: full stars, an optional half
/// star, then empty stars
pub fn rating_stars_max(rating: f64, max_stars: usize) -> String {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, max_stars as f64)
    } else {
        0.0
    };
    let full = rating.trunc() as usize;
    let half = rating - rating.trunc() >= 0.5;
    let empty = max_stars.saturating_sub(full + usize::from(half));

    let mut out = String::with_capacity(max_stars * 3);
    out.extend(std::iter::repeat(FULL_STAR).take(full));
    if half {
        out.push(HALF_STAR);
    }
    out.extend(std::iter::repeat(EMPTY_STAR).take(empty));
    out
}

/// Rating glyphs followed by the numeric average, e.g. `★★★½☆ 3.7`
pub fn rating_display(rating: f64) -> String {
    format!("{} {:.1}", rating_stars(rating), rating)
}

/// Cut `text` to at most `max_length` characters, ending in `...` when cut
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let keep = max_length.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Format an integer with `,` thousands separators
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// GitHub star count for tables: `-` when there are none
pub fn github_stars_display(stars: u64) -> String {
    if stars > 0 {
        thousands(stars)
    } else {
        "-".to_string()
    }
}

/// First eight characters of an id followed by `...`
pub fn short_id(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    let mut out: String = id.chars().take(8).collect();
    out.push_str("...");
    out
}

/// Byte count as kibibytes with one decimal, e.g. `2.0 KB`
pub fn kib(bytes: f64) -> String {
    format!("{:.1} KB", bytes / 1024.0)
}

/// Replace the user's home directory prefix with `~`
pub fn shorten_home(path: &str) -> String {
    shorten_path(path, dirs::home_dir().as_deref())
}

fn shorten_path(path: &str, home: Option<&Path>) -> String {
    match home.and_then(|h| h.to_str()) {
        Some(home) if !home.is_empty() => path.replace(home, "~"),
        _ => path.to_string(),
    }
}

/// Wrap `text` in an OSC 8 terminal hyperlink when `enabled`
pub fn hyperlink(url: &str, text: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
    } else {
        text.to_string()
    }
}
