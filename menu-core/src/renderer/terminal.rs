use std::cell::Cell;
use std::io::{self, BufRead, StdinLock, Stdout, Write, stdin, stdout};
use std::rc::Rc;

use crate::input::{CancelPhase, CancelSource};
use crate::navigator::Navigator;
use crate::renderer::Renderer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Switch(String),
    Back,
    Home,
    Lock,
    Reload,
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Some(Command::Back);
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        match (word.to_ascii_lowercase().as_str(), rest) {
            ("go", tag) if !tag.is_empty() => Some(Command::Go(tag.to_string())),
            ("switch", tag) if !tag.is_empty() => Some(Command::Switch(tag.to_string())),
            ("back", "") => Some(Command::Back),
            ("home", "") => Some(Command::Home),
            ("lock", "") => Some(Command::Lock),
            ("reload", "") => Some(Command::Reload),
            ("exit", "") | ("quit", "") => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Why the event loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Reload,
    /// Input ran out.
    Eof,
}

/// Line-based driver: prints the navigation state and turns typed commands
/// into navigator calls. An empty line acts as the cancel button.
pub struct TerminalRenderer<R, W> {
    input: R,
    output: W,
    cancel_subscribed: bool,
    locked: Rc<Cell<bool>>,
}

impl TerminalRenderer<StdinLock<'static>, Stdout> {
    pub fn new() -> Self {
        Self::with_io(stdin().lock(), stdout())
    }
}

impl<R: BufRead, W: Write> TerminalRenderer<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self {
            input,
            output,
            cancel_subscribed: false,
            locked: Rc::new(Cell::new(false)),
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn run_event_loop(&mut self, nav: &mut Navigator) -> io::Result<SessionEnd> {
        nav.enable(self);
        let locked = Rc::clone(&self.locked);
        let lock_id = nav.intercept_back(move || locked.get());

        let end = self.drive(nav);
        nav.remove_back_interceptor(lock_id);
        nav.disable(self);
        end
    }

    fn drive(&mut self, nav: &mut Navigator) -> io::Result<SessionEnd> {
        loop {
            self.render(nav)?;

            let Some(command) = self.wait_command()? else {
                return Ok(SessionEnd::Eof);
            };

            match command {
                Command::Go(tag) => match nav.screen_by_tag(&tag) {
                    Some(key) => nav.set_current_screen(key),
                    None => writeln!(self.output, "unknown screen '{}'", tag)?,
                },
                Command::Switch(tag) => match nav.screen_by_tag(&tag) {
                    Some(key) => nav.switch_to(key),
                    None => writeln!(self.output, "unknown screen '{}'", tag)?,
                },
                Command::Back => {
                    if self.cancel_subscribed {
                        // one line = press + release
                        nav.on_cancel(CancelPhase::Started);
                        nav.on_cancel(CancelPhase::Canceled);
                    } else {
                        nav.request_back();
                    }
                }
                Command::Home => nav.back_all(),
                Command::Lock => {
                    self.locked.set(!self.locked.get());
                    writeln!(self.output, "[Lock] back {}", if self.locked.get() { "locked" } else { "unlocked" })?;
                }
                Command::Reload => {
                    nav.reload_current_scene();
                    return Ok(SessionEnd::Reload);
                }
                Command::Exit => {
                    nav.quit();
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    fn wait_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            if let Some(command) = Command::parse(&buf) {
                return Ok(Some(command));
            }
            writeln!(self.output, "invalid")?;
        }
    }
}

impl<R: BufRead, W: Write> Renderer for TerminalRenderer<R, W> {
    fn render(&mut self, nav: &Navigator) -> io::Result<()> {
        let Some(screen) = nav.current_screen() else {
            return writeln!(self.output, "[Screen] <none>");
        };

        let history: Vec<&str> = nav
            .history()
            .filter_map(|key| nav.screen(key))
            .map(|s| s.tag())
            .collect();

        writeln!(
            self.output,
            "[Screen] {}{} | history: {}",
            screen.tag(),
            if screen.is_end_screen() { " (end)" } else { "" },
            if history.is_empty() { "-".to_string() } else { history.join(" < ") }
        )
    }
}

impl<R, W> CancelSource for TerminalRenderer<R, W> {
    fn subscribe_cancel(&mut self) -> bool {
        self.cancel_subscribed = true;
        true
    }

    fn unsubscribe_cancel(&mut self) {
        self.cancel_subscribed = false;
    }
}
