//! Terminal console.
//!
//! Implements [`Console`] for a real terminal: boxed dice grids and the
//! command menu via comfy-table, severity-styled notifications, screen
//! clearing, and a raw-mode line editor whose interrupt keys route to
//! the redacted quit path instead of killing the process.

use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_BORDERS_ONLY, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ColumnConstraint, Table, Width};
use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};
use thiserror::Error;

use diceware_app::{Console, GridView, LineInput, MENU, Notification, Severity};

/// Minimum rendered width of the word column.
const WORD_COL_WIDTH: u16 = 14;

/// Terminal console errors.
#[derive(Debug, Error)]
pub enum TermError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// [`Console`] implementation over any writer.
///
/// Rendering goes through the writer (tests use a buffer); line input
/// always reads real terminal events, so only [`TermConsole::stdout`]
/// instances should call [`Console::read_line`].
pub struct TermConsole<W: Write> {
    out: W,
}

impl TermConsole<io::Stdout> {
    /// Console writing to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TermConsole<W> {
    /// Console writing to an arbitrary writer.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Rounded-box table in the style shared by grid and menu.
    fn boxed_table(preset: &str) -> Table {
        let mut table = Table::new();
        table.load_preset(preset).apply_modifier(UTF8_ROUND_CORNERS);
        table
    }

    /// Redraw the prompt line during raw-mode editing.
    fn redraw_prompt(&mut self, prompt: &str, buffer: &str, cursor: usize) -> io::Result<()> {
        let column = (prompt.chars().count() + cursor) as u16;
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(prompt),
            Print(buffer),
            MoveToColumn(column)
        )?;
        self.out.flush()
    }

    /// Blocking raw-mode line editor.
    ///
    /// Enter submits; Ctrl-C, Ctrl-D, and Esc report an interrupted
    /// input stream. Only ASCII printable characters are accepted -
    /// the command alphabet needs nothing more.
    fn edit_line(&mut self, prompt: &str) -> io::Result<LineInput> {
        let mut buffer = String::new();
        let mut cursor = 0usize;

        loop {
            let Event::Key(key) = event::read()? else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if matches!(key.code, KeyCode::Char('c' | 'd')) {
                    return Ok(LineInput::Interrupted);
                }
                continue;
            }
            match key.code {
                KeyCode::Enter => return Ok(LineInput::Line(buffer)),
                KeyCode::Esc => return Ok(LineInput::Interrupted),
                KeyCode::Char(c) if c.is_ascii() && !c.is_ascii_control() => {
                    buffer.insert(cursor, c);
                    cursor += 1;
                },
                KeyCode::Backspace => {
                    if cursor > 0 {
                        cursor -= 1;
                        buffer.remove(cursor);
                    }
                },
                KeyCode::Delete => {
                    if cursor < buffer.len() {
                        buffer.remove(cursor);
                    }
                },
                KeyCode::Left => cursor = cursor.saturating_sub(1),
                KeyCode::Right => {
                    if cursor < buffer.len() {
                        cursor += 1;
                    }
                },
                KeyCode::Home => cursor = 0,
                KeyCode::End => cursor = buffer.len(),
                _ => continue,
            }
            self.redraw_prompt(prompt, &buffer, cursor)?;
        }
    }
}

/// Restores cooked mode even if editing bails out early.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl<W: Write> Console for TermConsole<W> {
    type Error = TermError;

    fn clear(&mut self) -> Result<(), Self::Error> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn render_grid(&mut self, view: &GridView) -> Result<(), Self::Error> {
        let mut table = Self::boxed_table(UTF8_FULL);
        table.apply_modifier(UTF8_SOLID_INNER_BORDERS);

        for row in &view.rows {
            let mut cells: Vec<Cell> = row
                .faces
                .iter()
                .map(|face| Cell::new(face).set_alignment(CellAlignment::Center))
                .collect();
            if view.redacted {
                cells.push(Cell::new(&row.word));
                cells.push(Cell::new("-").fg(Color::DarkGrey));
            } else {
                cells.push(Cell::new(&row.word).fg(Color::Blue).add_attribute(Attribute::Bold));
                cells.push(Cell::new(row.label).fg(Color::Magenta));
            }
            table.add_row(cells);
        }
        if let Some(column) = table.column_mut(diceware_core::DICE_PER_ROW) {
            column.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(WORD_COL_WIDTH)));
        }

        writeln!(self.out, "{table}")?;
        self.out.flush()?;
        Ok(())
    }

    fn render_menu(&mut self) -> Result<(), Self::Error> {
        let mut table = Self::boxed_table(UTF8_BORDERS_ONLY);
        for (command, description) in MENU {
            table.add_row(vec![
                Cell::new(command)
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Right),
                Cell::new(description),
            ]);
        }
        if let Some(column) = table.column_mut(1) {
            column.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(30)));
        }

        writeln!(self.out, "{table}")?;
        self.out.flush()?;
        Ok(())
    }

    fn render_notification(&mut self, notification: &Notification) -> Result<(), Self::Error> {
        let text = notification.text.as_str();
        match notification.severity {
            Severity::Info => writeln!(self.out, "\n{}\n", text.cyan().bold())?,
            Severity::Error => writeln!(self.out, "\n{}\n", text.red())?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<LineInput, Self::Error> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let guard = RawModeGuard::enable()?;
        let input = self.edit_line(prompt)?;
        drop(guard);

        writeln!(self.out)?;
        self.out.flush()?;
        Ok(input)
    }

    fn farewell(&mut self) -> Result<(), Self::Error> {
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }
}
