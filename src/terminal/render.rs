//! Game rendering system (terminal).
//!
//! Draws the composed frame, the countdown and the status lines, and prints
//! the end screens once the terminal has been restored.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use crate::game::state::Snapshot;
use crate::game::systems::{compose, Glyph, Renderer};
use crate::game::types::Tile;

const INSTRUCTIONS: &str = "Use WASD to move and Enter to fire. ESC to quit.";

const VICTORY_BANNER: &str = r"
 __     __ _        _
 \ \   / /(_)  ___ | |_  ___   _ __  _   _
  \ \ / / | | / __|| __|/ _ \ | '__|| | | |
   \ V /  | || (__ | |_| (_) || |   | |_| |
    \_/   |_| \___| \__|\___/ |_|    \__, |
                                     |___/
      Congratulations! All enemies were defeated.
";

const TIMEOUT_BANNER: &str = r"
   ____                         ___
  / ___|  __ _  _ __ ___    ___/ _ \ __   __ ___  _ __
 | |  _  / _` || '_ ` _ \  / _ \ | | |\ \ / // _ \| '__|
 | |_| || (_| || | | | | ||  __/ |_| | \ V /|  __/| |
  \____| \__,_||_| |_| |_| \___|\___/   \_/  \___||_|

                      TIME'S UP!
";

/// Renders into the alternate screen. Dropping it restores the terminal.
pub struct TerminalRenderer {
    out: Stdout,
    active: bool,
}

impl TerminalRenderer {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self { out, active: true })
    }

    fn print_banner(&mut self, banner: &str) -> io::Result<()> {
        self.restore()?;
        writeln!(self.out, "{}", banner)?;
        self.out.flush()
    }
}

fn colors(glyph: Glyph) -> (Color, Color) {
    match glyph {
        Glyph::Player => (Color::DarkGrey, Color::Reset),
        Glyph::Enemy => (Color::Red, Color::Reset),
        Glyph::DefeatedEnemy => (Color::DarkGrey, Color::Reset),
        Glyph::Terrain(Tile::Wall) => (Color::Black, Color::DarkGrey),
        Glyph::Terrain(Tile::Vegetation) | Glyph::Terrain(Tile::Projectile) => {
            (Color::Green, Color::Reset)
        }
        Glyph::Terrain(Tile::Empty) => (Color::Reset, Color::Reset),
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        let frame = compose(snapshot);
        queue!(self.out, Clear(ClearType::All))?;

        for (y, row) in frame.iter().enumerate() {
            queue!(self.out, MoveTo(0, y as u16))?;
            for glyph in row {
                let (fg, bg) = colors(*glyph);
                queue!(
                    self.out,
                    SetForegroundColor(fg),
                    SetBackgroundColor(bg),
                    Print(glyph.symbol())
                )?;
            }
        }
        queue!(self.out, ResetColor)?;

        let hud_row = frame.len() as u16 + 1;
        queue!(
            self.out,
            MoveTo(0, hud_row),
            SetForegroundColor(Color::White),
            Print(format!("Time left: {}s", snapshot.seconds_remaining.max(0))),
            MoveTo(0, hud_row + 1),
            SetForegroundColor(Color::DarkGrey),
            Print(&snapshot.status_msg),
            MoveTo(0, hud_row + 2),
            Print(INSTRUCTIONS),
            ResetColor
        )?;

        self.out.flush()
    }

    fn victory(&mut self) -> io::Result<()> {
        self.print_banner(VICTORY_BANNER)
    }

    fn timeout(&mut self) -> io::Result<()> {
        self.print_banner(TIMEOUT_BANNER)
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
