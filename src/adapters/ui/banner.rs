//! ASCII startup banner with a vertical color gradient (CAMPUS-SCHED).
//! Uses the built-in figlet standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Indigo (#5c6bc0), top of the gradient.
const INDIGO: (u8, u8, u8) = (0x5c, 0x6b, 0xc0);
/// Cyan (#26c6da), bottom of the gradient.
const CYAN: (u8, u8, u8) = (0x26, 0xc6, 0xda);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "CAMPUS-SCHED" in figlet with an indigo→cyan
/// gradient, then the version and a tagline.
pub fn print_welcome() {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("CAMPUS-SCHED").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "CAMPUS-SCHED\n".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(INDIGO, CYAN, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: CYAN.0,
        g: CYAN.1,
        b: CYAN.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Weekly timetables in your terminal\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
