//! Display: Synchronous terminal session for presenting buffers.
//!
//! The display owns terminal setup and teardown (raw mode, alternate
//! screen, cursor visibility), presents full frames as single-write ANSI
//! sequences, polls input events, and throttles the render loop to a
//! target frame rate. Everything happens on the caller's thread.

use super::output::OutputBuffer;
use crate::buffer::{Buffer, Modifiers, Rgb};
use crate::layout::Rect;
use crossterm::{
    cursor,
    event::{self, Event as CtEvent, KeyCode as CtKeyCode, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::{Duration, Instant};

/// Key codes reported by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Escape key.
    Esc,
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

/// Events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

/// Configuration for the display.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Target frames per second for the throttle.
    pub target_fps: u32,
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            alternate_screen: true,
        }
    }
}

/// A synchronous terminal display session.
///
/// Terminal state is restored on drop.
pub struct Display {
    /// Configuration.
    config: DisplayConfig,
    /// Accumulated ANSI output for the current frame.
    output: OutputBuffer,
    /// Terminal width.
    width: u16,
    /// Terminal height.
    height: u16,
    /// Frame timing.
    frame_start: Instant,
    frame_duration: Duration,
    frame_count: u64,
}

impl Display {
    /// Open a display with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate
    /// screen, etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_config(DisplayConfig::default())
    }

    /// Open a display with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: DisplayConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;

        log::debug!("display opened: {width}x{height}");

        let frame_duration = Duration::from_secs(1) / config.target_fps.max(1);
        let capacity = (width as usize) * (height as usize) * 8;

        Ok(Self {
            config,
            output: OutputBuffer::with_capacity(capacity),
            width,
            height,
            frame_start: Instant::now(),
            frame_duration,
            frame_count: 0,
        })
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The display's bounds at the origin.
    pub const fn frame(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Get the current frame count.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Poll for the next input event.
    ///
    /// Returns `None` when no event arrives within `timeout` (or the event
    /// is one this layer does not surface).
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            CtEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let code = match key.code {
                    CtKeyCode::Char(c) => KeyCode::Char(c),
                    CtKeyCode::Esc => KeyCode::Esc,
                    CtKeyCode::Enter => KeyCode::Enter,
                    CtKeyCode::Backspace => KeyCode::Backspace,
                    CtKeyCode::Tab => KeyCode::Tab,
                    CtKeyCode::Up => KeyCode::Up,
                    CtKeyCode::Down => KeyCode::Down,
                    CtKeyCode::Left => KeyCode::Left,
                    CtKeyCode::Right => KeyCode::Right,
                    _ => return Ok(None),
                };
                let modifiers = KeyModifiers {
                    shift: key.modifiers.contains(event::KeyModifiers::SHIFT),
                    control: key.modifiers.contains(event::KeyModifiers::CONTROL),
                    alt: key.modifiers.contains(event::KeyModifiers::ALT),
                };
                Ok(Some(Event::Key { code, modifiers }))
            }
            CtEvent::Resize(width, height) => {
                self.width = width;
                self.height = height;
                Ok(Some(Event::Resize { width, height }))
            }
            _ => Ok(None),
        }
    }

    /// Present a buffer as a full frame.
    ///
    /// Emits the whole buffer with run-length color and modifier tracking,
    /// flushed to the terminal in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn present(&mut self, buffer: &Buffer) -> io::Result<()> {
        self.output.clear();
        self.output.cursor_hide();
        self.output.cursor_move(0, 0);

        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_mods = Modifiers::empty();

        for (y, row) in buffer.rows().enumerate() {
            if y > 0 {
                self.output.write_raw(b"\r\n");
            }
            for cell in row {
                if cell.is_wide_continuation() {
                    continue;
                }
                if cell.modifiers() != last_mods {
                    // ANSI modifiers are additive; reset and re-emit colors
                    self.output.reset_attrs();
                    self.output.set_modifiers(cell.modifiers());
                    last_mods = cell.modifiers();
                    last_fg = None;
                    last_bg = None;
                }
                if last_fg != Some(cell.fg()) {
                    self.output.set_fg(cell.fg());
                    last_fg = Some(cell.fg());
                }
                if last_bg != Some(cell.bg()) {
                    self.output.set_bg(cell.bg());
                    last_bg = Some(cell.bg());
                }
                self.output.write_str(cell.glyph());
            }
        }

        self.output.reset_attrs();
        self.output.flush_to(&mut io::stdout())
    }

    /// Begin a new frame.
    ///
    /// Call this at the start of each render loop iteration.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// End a frame, sleeping if necessary to hold the target FPS.
    pub fn end_frame(&mut self) {
        self.frame_count += 1;
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        log::debug!("display closed after {} frames", self.frame_count);
    }
}
