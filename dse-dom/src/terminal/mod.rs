//! Crossterm backend: raw mode, alternate screen, mouse capture and
//! double-buffered drawing.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent};
use crossterm::style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle, Theme};

pub struct Terminal {
    out: Stdout,
    front: Buffer,
    back: Buffer,
    layout: LayoutResult,
}

impl Terminal {
    /// Enter raw mode and the alternate screen. Restored on drop.
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide, EnableMouseCapture)?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            out,
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.front.width(), self.front.height())
    }

    /// Block for up to `timeout`, then return everything that is queued.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        let mut wait = timeout;
        while event::poll(wait)? {
            events.push(event::read()?);
            wait = Duration::ZERO;
        }
        Ok(events)
    }

    /// Lay out and paint `root`, writing only the cells that changed since
    /// the previous frame.
    pub fn render(&mut self, root: &Element, theme: &dyn Theme) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("[terminal] resized to {width}x{height}");
            self.front = Buffer::new(width, height);
            self.back = Buffer::new(width, height);
            execute!(self.out, Clear(ClearType::All))?;
        }

        self.front.reset();
        self.layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.layout, &mut self.front, theme);

        self.flush()?;
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(&self.layout)
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut pen = Pen::default();
        queue!(self.out, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.front.changes(&self.back) {
            if cell.continuation {
                continue;
            }
            if pen.cursor != Some((x, y)) {
                queue!(self.out, MoveTo(x, y))?;
            }
            pen.apply(&mut self.out, cell)?;
            queue!(self.out, Print(cell.symbol))?;
            pen.cursor = Some((x.saturating_add(char_width(cell.symbol).max(1) as u16), y));
        }

        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

/// What the terminal is currently set to draw with.
struct Pen {
    cursor: Option<(u16, u16)>,
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            cursor: None,
            fg: Cell::BLANK.fg,
            bg: Cell::BLANK.bg,
            style: TextStyle::new(),
        }
    }
}

impl Pen {
    fn apply(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if cell.style != self.style {
            // Attributes can only be switched off all at once.
            queue!(out, SetAttribute(Attribute::Reset))?;
            for (on, attribute) in [
                (cell.style.bold, Attribute::Bold),
                (cell.style.dim, Attribute::Dim),
                (cell.style.italic, Attribute::Italic),
                (cell.style.underline, Attribute::Underlined),
            ] {
                if on {
                    queue!(out, SetAttribute(attribute))?;
                }
            }
            queue!(
                out,
                SetForegroundColor(crossterm_color(cell.fg)),
                SetBackgroundColor(crossterm_color(cell.bg))
            )?;
            self.style = cell.style;
            self.fg = cell.fg;
            self.bg = cell.bg;
            return Ok(());
        }
        if cell.fg != self.fg {
            queue!(out, SetForegroundColor(crossterm_color(cell.fg)))?;
            self.fg = cell.fg;
        }
        if cell.bg != self.bg {
            queue!(out, SetBackgroundColor(crossterm_color(cell.bg)))?;
            self.bg = cell.bg;
        }
        Ok(())
    }
}

fn crossterm_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
