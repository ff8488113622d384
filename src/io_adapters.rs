use crate::input::BufReadInput;
use std::cell::RefCell;
use std::io::{Cursor, Result as IoResult, Write};
use std::rc::Rc;

/// Scripted answers for driving a [`Console`](crate::Console) without a terminal.
pub type MemInput = BufReadInput<Cursor<Vec<u8>>>;

impl MemInput {
    /// Input that yields `lines` one after another, then end of input.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buf = Vec::new();
        for line in lines {
            buf.extend_from_slice(line.as_ref().as_bytes());
            buf.push(b'\n');
        }
        BufReadInput::new(Cursor::new(buf))
    }
}

/// Memory-backed writer for capturing what a console printed.
///
/// The buffer is shared, so it can still be read after the console owning the
/// writer has been dropped.
#[derive(Default)]
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    /// A fresh writer together with a handle on its buffer.
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let writer = MemWriter::default();
        let handle = Rc::clone(&writer.buf);
        (writer, handle)
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(handle: &Rc<RefCell<Vec<u8>>>) -> String {
        String::from_utf8_lossy(&handle.borrow()).into_owned()
    }
}

impl Write for MemWriter {
    fn write(&mut self, bytes: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().write(bytes)
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}
