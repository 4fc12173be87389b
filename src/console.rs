use anyhow::{anyhow, Context, Result};
use reflex_core::{InputSource, RestartSignal, TextSink};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Forwards stdin lines from a background thread so input can be both
/// read blocking (the console) and polled (the restart button).
pub fn spawn_line_reader() -> Result<Rc<Receiver<String>>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
            tracing::debug!("stdin closed");
        })
        .context("starting stdin reader")?;
    Ok(Rc::new(rx))
}

/// Receive side of the emulated serial terminal.
pub struct SerialConsole {
    lines: Rc<Receiver<String>>,
    pending: VecDeque<u8>,
}

impl SerialConsole {
    pub fn new(lines: Rc<Receiver<String>>) -> Self {
        Self {
            lines,
            pending: VecDeque::new(),
        }
    }
}

impl InputSource for SerialConsole {
    /// One byte of the current line per call; an empty line reads as `0`.
    fn read(&mut self) -> Result<u8> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(byte);
        }
        let line = self
            .lines
            .recv()
            .map_err(|_| anyhow!("input stream closed"))?;
        self.pending.extend(line.bytes().filter(|b| *b != b'\r'));
        Ok(self.pending.pop_front().unwrap_or(0))
    }
}

/// Transmit side of the emulated serial terminal.
pub struct ConsoleEcho<W: Write> {
    out: W,
}

impl<W: Write> ConsoleEcho<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TextSink for ConsoleEcho<W> {
    fn print(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .context("writing to console")
    }
}

/// Restart pushbutton: a fresh line on stdin counts as a press.
pub struct EnterButton {
    lines: Rc<Receiver<String>>,
}

impl EnterButton {
    pub fn new(lines: Rc<Receiver<String>>) -> Self {
        Self { lines }
    }
}

impl RestartSignal for EnterButton {
    fn is_pressed(&mut self) -> Result<bool> {
        match self.lines.try_recv() {
            Ok(_) => Ok(true),
            Err(TryRecvError::Empty) => Ok(false),
            Err(TryRecvError::Disconnected) => Err(anyhow!("input stream closed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console_with(lines: &[&str]) -> SerialConsole {
        let (tx, rx) = mpsc::channel();
        for line in lines {
            tx.send(line.to_string()).unwrap();
        }
        drop(tx);
        SerialConsole::new(Rc::new(rx))
    }

    #[test]
    fn yields_line_bytes_and_zero_for_empty_lines() {
        let mut console = console_with(&["kx", "", "7"]);
        assert_eq!(console.read().unwrap(), b'k');
        assert_eq!(console.read().unwrap(), b'x');
        assert_eq!(console.read().unwrap(), 0);
        assert_eq!(console.read().unwrap(), b'7');
        assert!(console.read().is_err());
    }

    #[test]
    fn strips_carriage_returns() {
        let mut console = console_with(&["q\r"]);
        assert_eq!(console.read().unwrap(), b'q');
        assert!(console.read().is_err());
    }

    #[test]
    fn print_goes_to_the_writer() {
        let mut echo = ConsoleEcho::new(Vec::new());
        echo.print("3\n").unwrap();
        echo.print("END. Avg:   1.00\n").unwrap();
        assert_eq!(echo.out, b"3\nEND. Avg:   1.00\n");
    }

    #[test]
    fn button_fires_on_new_line_only() {
        let (tx, rx) = mpsc::channel();
        let mut button = EnterButton::new(Rc::new(rx));
        assert!(!button.is_pressed().unwrap());
        tx.send(String::new()).unwrap();
        assert!(button.is_pressed().unwrap());
        assert!(!button.is_pressed().unwrap());
        drop(tx);
        assert!(button.is_pressed().is_err());
    }

    #[test]
    fn console_and_button_share_one_stream() {
        let (tx, rx) = mpsc::channel();
        let rx = Rc::new(rx);
        let mut console = SerialConsole::new(Rc::clone(&rx));
        let mut button = EnterButton::new(rx);
        tx.send("a".into()).unwrap();
        assert_eq!(console.read().unwrap(), b'a');
        assert!(!button.is_pressed().unwrap());
    }
}
