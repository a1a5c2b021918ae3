use std::io::Write;

use crossterm::{cursor, queue, style, terminal};

/// Queue one hint, bolding `[key]` spans and dimming the description.
pub fn print_hint(out: &mut impl Write, hint: &str) -> anyhow::Result<()> {
    let mut rest = hint;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|c| open + c) else {
            break;
        };
        if open > 0 {
            print_dim(out, &rest[..open])?;
        }
        queue!(
            out,
            style::SetAttribute(style::Attribute::Bold),
            style::Print(&rest[open..=close]),
            style::SetAttribute(style::Attribute::Reset),
        )?;
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        print_dim(out, rest)?;
    }
    Ok(())
}

/// Replace row `y` with a two-space separated list of hints.
pub fn print_hint_bar(out: &mut impl Write, x: u16, y: u16, hints: &[&str]) -> anyhow::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, y),
        terminal::Clear(terminal::ClearType::CurrentLine),
        cursor::MoveTo(x, y),
    )?;
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            queue!(out, style::Print("  "))?;
        }
        print_hint(out, hint)?;
    }
    Ok(())
}

fn print_dim(out: &mut impl Write, text: &str) -> anyhow::Result<()> {
    queue!(
        out,
        style::SetAttribute(style::Attribute::Dim),
        style::Print(text),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    Ok(())
}
