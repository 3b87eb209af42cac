//! Startup banner: "HVUT 2290" in figlet with a highway-sign gradient.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};
use tracing::debug;

const TITLE: &str = "HVUT 2290";
const TAGLINE: &str = "Form 2290 site navigator";

/// Interstate Blue (#003f87) at the top row, Caution Amber (#ffb300) at the bottom.
const TOP: [u8; 3] = [0x00, 0x3f, 0x87];
const BOTTOM: [u8; 3] = [0xff, 0xb3, 0x00];

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb { r, g, b }
}

/// One color per row, stepping evenly from `TOP` to `BOTTOM`.
fn row_shades(rows: usize) -> Vec<[u8; 3]> {
    let last = rows.saturating_sub(1).max(1) as i32;
    (0..rows as i32)
        .map(|row| {
            let mut shade = TOP;
            for (c, (&from, &to)) in shade.iter_mut().zip(TOP.iter().zip(BOTTOM.iter())) {
                *c = (i32::from(from) + (i32::from(to) - i32::from(from)) * row / last) as u8;
            }
            shade
        })
        .collect()
}

/// Banner lines; plain title when the figlet font is unavailable.
fn banner_lines() -> Vec<String> {
    let plain = || vec![TITLE.to_string()];
    let Ok(font) = FIGfont::standard() else {
        return plain();
    };
    match font.convert(TITLE) {
        Some(figure) => figure.to_string().lines().map(String::from).collect(),
        None => plain(),
    }
}

fn draw(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for (line, shade) in lines.iter().zip(row_shades(lines.len())) {
        queue!(out, SetForegroundColor(rgb(shade)), Print(line), Print("\r\n"))?;
    }
    queue!(
        out,
        SetForegroundColor(rgb(BOTTOM)),
        Print(format!("v{} | {}\r\n", env!("CARGO_PKG_VERSION"), TAGLINE)),
        ResetColor
    )?;
    out.flush()
}

/// Prints the shaded title and version line to stdout.
pub fn print_welcome() {
    if let Err(e) = draw(&mut stdout(), &banner_lines()) {
        debug!(error = %e, "banner not drawn");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_shades_span_both_ends() {
        let shades = row_shades(6);
        assert_eq!(shades.len(), 6);
        assert_eq!(shades[0], TOP);
        assert_eq!(shades[5], BOTTOM);
        assert!(shades.windows(2).all(|w| w[0][0] <= w[1][0]));
        assert_eq!(row_shades(1), vec![TOP]);
        assert!(row_shades(0).is_empty());
    }

    #[test]
    fn test_draw_writes_every_line_and_version() {
        let lines = banner_lines();
        assert!(!lines.is_empty());

        let mut buf = Vec::new();
        draw(&mut buf, &lines).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(lines.iter().all(|l| text.contains(l.as_str())));
        assert!(text.contains(TAGLINE));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }
}
