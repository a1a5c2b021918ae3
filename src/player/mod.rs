//! Player — the terminal front end.
//!
//! Hosts the faux shell and backs the frame driver's scheduling boundary
//! with `crossterm::event::poll`: while the cube is running, the player waits
//! at most one frame interval for input, delivers any key to the driver
//! first, and only then redeems the pending frame request.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::config::{CubeConfig, matches_binding};
use crate::driver::FrameDriver;
use crate::hints::print_hint_bar;
use crate::shell::{PROMPT, Shell, ShellAction};
use crate::types::DriverState;

/// Rows reserved below the canvas for the hint bar.
const HINT_ROWS: u16 = 1;

const SHELL_HINTS: &[&str] = &[
    "[Enter] run",
    "[Tab] complete",
    "[↑][↓] history",
    "[Ctrl-c] quit",
];

const BANNER: &[&str] = &[
    "ASCII Cube Terminal",
    "",
    "Type \"help\" to see available commands, or \"matrix\" to spin the cube.",
    "",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Run the animation once and exit when it stops.
    Spin,
    /// Interactive shell; the animation is an overlay started by `matrix`.
    Shell,
}

pub struct Player {
    config: CubeConfig,
    driver: FrameDriver,
    shell: Shell,
    mode: Mode,
    input: String,
    scrollback: Vec<String>,
}

impl Player {
    /// Spin the cube until a key press or the timeout, then return.
    pub fn spin(config: CubeConfig) -> Self {
        Self::new(config, Mode::Spin)
    }

    /// Interactive shell where `matrix` starts the cube.
    pub fn shell(config: CubeConfig) -> Self {
        let mut player = Self::new(config, Mode::Shell);
        player.scrollback.extend(BANNER.iter().map(|s| s.to_string()));
        player
    }

    fn new(config: CubeConfig, mode: Mode) -> Self {
        Self {
            driver: FrameDriver::new(config.clone()),
            config,
            shell: Shell::new(),
            mode,
            input: String::new(),
            scrollback: Vec::new(),
        }
    }

    /// Sets up the terminal, enters the event loop, and restores the terminal
    /// on exit (even on error).
    pub fn play(&mut self) -> Result<()> {
        let (term_w, term_h) = terminal::size()?;
        let need_w = self.config.viewport.width;
        let need_h = self.config.viewport.height + HINT_ROWS;
        if term_w < need_w || term_h < need_h {
            bail!(
                "Terminal too small: need {}x{}, have {}x{}",
                need_w,
                need_h,
                term_w,
                term_h,
            );
        }

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        let result = self.run_loop(&mut stdout);

        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        log::info!("player exited after {} frames", self.driver.frames_produced());
        result
    }

    // -----------------------------------------------------------------------
    // Event loop
    // -----------------------------------------------------------------------

    fn run_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        match self.mode {
            Mode::Spin => self.start_animation(stdout)?,
            Mode::Shell => self.render_shell(stdout)?,
        }

        loop {
            if let Some(request) = self.driver.pending() {
                if event::poll(self.config.animation.frame_interval())? {
                    match event::read()? {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if matches_binding(&self.config.keys.quit, &key) {
                                break;
                            }
                            self.driver.handle_key(&key);
                        }
                        Event::Resize(_, _) => {
                            execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
                        }
                        _ => {}
                    }
                } else if let Some(frame) = self.driver.fire(request, Instant::now()) {
                    self.render_frame(stdout, &frame)?;
                }

                if self.driver.state() == DriverState::Idle {
                    match self.mode {
                        Mode::Spin => break,
                        Mode::Shell => self.render_shell(stdout)?,
                    }
                }
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches_binding(&self.config.keys.quit, &key) {
                        break;
                    }
                    if !self.handle_shell_key(stdout, key)? {
                        break;
                    }
                }
                Event::Resize(_, _) => self.render_shell(stdout)?,
                _ => {}
            }
        }

        Ok(())
    }

    /// Apply one key to the prompt. Returns `false` when the shell asked to exit.
    fn handle_shell_key(&mut self, stdout: &mut io::Stdout, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                let outcome = self.shell.execute(&line);
                self.scrollback.push(format!("{PROMPT}{line}"));
                self.scrollback.extend(outcome.lines);
                match outcome.action {
                    Some(ShellAction::Exit) => return Ok(false),
                    Some(ShellAction::Clear) => self.scrollback.clear(),
                    Some(ShellAction::StartAnimation) => {
                        self.start_animation(stdout)?;
                        return Ok(true);
                    }
                    None => {}
                }
            }
            KeyCode::Tab => {
                if let Some(command) = self.shell.complete(&self.input) {
                    self.input = command.to_string();
                }
            }
            KeyCode::Up => {
                if let Some(entry) = self.shell.history_up() {
                    self.input = entry.to_string();
                }
            }
            KeyCode::Down => {
                if let Some(entry) = self.shell.history_down() {
                    self.input = entry.to_string();
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => return Ok(true),
        }
        self.render_shell(stdout)?;
        Ok(true)
    }

    fn start_animation(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
        self.driver.start(Instant::now());
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Terminal output
    // -----------------------------------------------------------------------

    fn render_frame(&self, stdout: &mut io::Stdout, frame: &str) -> Result<()> {
        let (term_w, _) = terminal::size()?;
        let x = term_w.saturating_sub(self.config.viewport.width) / 2;

        for (y, row) in frame.lines().enumerate() {
            queue!(stdout, cursor::MoveTo(x, y as u16), style::Print(row))?;
        }

        print_hint_bar(
            stdout,
            x,
            self.config.viewport.height,
            &["[PRESS ANY KEY TO EXIT]"],
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn render_shell(&self, stdout: &mut io::Stdout) -> Result<()> {
        let (_, term_h) = terminal::size()?;
        // Scrollback fills everything above the prompt and hint rows.
        let room = term_h.saturating_sub(1 + HINT_ROWS) as usize;
        let start = self.scrollback.len().saturating_sub(room);

        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        let mut y = 0u16;
        for line in &self.scrollback[start..] {
            queue!(stdout, cursor::MoveTo(0, y), style::Print(line))?;
            y += 1;
        }
        queue!(
            stdout,
            cursor::MoveTo(0, y),
            style::Print(PROMPT),
            style::Print(&self.input),
            style::Print('_'),
        )?;
        print_hint_bar(stdout, 0, term_h.saturating_sub(HINT_ROWS), SHELL_HINTS)?;
        stdout.flush()?;
        Ok(())
    }
}
