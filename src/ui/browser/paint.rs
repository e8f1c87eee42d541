//! crossterm backend: writes a [`Frame`] to the terminal.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::ui::theme::Palette;

use super::render::{Frame, Tone};

/// Paint every row of `frame`, clearing what the previous frame left behind.
pub fn paint<W: Write>(out: &mut W, frame: &Frame, palette: &Palette, color: bool) -> io::Result<()> {
    queue!(out, cursor::Hide)?;
    for (row, line) in frame.lines.iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, cursor::MoveTo(0, row), Clear(ClearType::CurrentLine))?;
        for span in &line.spans {
            apply_tone(out, span.tone, palette, color)?;
            queue!(out, Print(&span.text))?;
            queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
    }
    out.flush()
}

fn apply_tone<W: Write>(out: &mut W, tone: Tone, palette: &Palette, color: bool) -> io::Result<()> {
    match tone {
        Tone::Normal => Ok(()),
        Tone::Caret => queue!(out, SetAttribute(Attribute::Reverse)),
        Tone::Highlight | Tone::Title => {
            foreground(out, palette.highlight, color)?;
            queue!(out, SetAttribute(Attribute::Bold))
        }
        Tone::Border => foreground(out, palette.highlight, color),
        Tone::Dim if color => foreground(out, palette.muted, color),
        Tone::Dim => queue!(out, SetAttribute(Attribute::Dim)),
    }
}

fn foreground<W: Write>(out: &mut W, c: Color, color: bool) -> io::Result<()> {
    if color {
        queue!(out, SetForegroundColor(c))?;
    }
    Ok(())
}
