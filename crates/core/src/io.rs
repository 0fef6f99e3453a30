//! Console abstraction for the four I/O instructions.
//!
//! The machine talks to the outside world only through the [`Console`] trait,
//! the way bus-attached devices abstract MMIO in a hardware simulator. This
//! keeps IN/GETC/OUT/PUTC testable against in-memory streams while the CLI
//! wires them to process stdin/stdout.
//!
//! Input is fully synchronous: the two input methods block on the underlying
//! stream, and closing that stream is the only way to unblock them (producing
//! the end-of-input sentinel behavior of IN and GETC).

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Outcome of reading one textual integer from the input stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputInt {
    /// A decimal integer was parsed. Range validation against 32 bits is the
    /// machine's job, so the raw value is carried at full width.
    Value(i64),
    /// The input stream is exhausted (or failed, which the machine treats the
    /// same way the original treated a failed `scanf`: as end of input).
    Eof,
    /// The next token is not a decimal integer, or overflows 64 bits.
    Malformed,
}

/// Byte-stream console used by the I/O instructions.
pub trait Console {
    /// Skips whitespace and reads one signed decimal integer.
    fn read_int(&mut self) -> InputInt;

    /// Reads one raw byte; `None` on end of input or stream failure.
    fn read_byte(&mut self) -> Option<u8>;

    /// Writes a decimal integer plus whitespace, `printf("%d \n", …)`-style.
    ///
    /// # Errors
    ///
    /// Returns the underlying stream error; the machine records it as an I/O
    /// fault.
    fn write_int(&mut self, value: i32) -> io::Result<()>;

    /// Writes one raw byte.
    ///
    /// # Errors
    ///
    /// Returns the underlying stream error; the machine records it as an I/O
    /// fault.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;
}

/// [`Console`] over arbitrary buffered reader/writer pairs.
///
/// Tests drive it with `Cursor` and `Vec` streams; [`stdio`] produces the
/// process-stream instance the CLI uses.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Creates a console over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Peeks at the next input byte without consuming it.
    fn peek_byte(&mut self) -> Option<u8> {
        match self.input.fill_buf() {
            Ok(buf) => buf.first().copied(),
            Err(_) => None,
        }
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_int(&mut self) -> InputInt {
        while let Some(byte) = self.peek_byte() {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.input.consume(1);
        }

        let mut token = String::new();
        while let Some(byte) = self.peek_byte() {
            let at_sign = token.is_empty() && matches!(byte, b'+' | b'-');
            if !at_sign && !byte.is_ascii_digit() {
                break;
            }
            token.push(char::from(byte));
            self.input.consume(1);
        }

        if token.is_empty() {
            // Either the stream ran dry or the next byte is not numeric.
            return if self.peek_byte().is_none() {
                InputInt::Eof
            } else {
                InputInt::Malformed
            };
        }
        token
            .parse::<i64>()
            .map_or(InputInt::Malformed, InputInt::Value)
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.input.consume(1);
        Some(byte)
    }

    fn write_int(&mut self, value: i32) -> io::Result<()> {
        writeln!(self.output, "{value} ")?;
        self.output.flush()
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.output.write_all(&[byte])?;
        self.output.flush()
    }
}

/// Returns a console over the process standard streams.
pub fn stdio() -> StreamConsole<BufReader<Stdin>, Stdout> {
    StreamConsole::new(BufReader::new(io::stdin()), io::stdout())
}
