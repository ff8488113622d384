use crate::error::PromptError;
use crate::input::Input;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Default number of attempts a single question allows.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

const PROMPT_SUFFIX: &str = "? ";
const TRY_AGAIN: &str = "try again...";

/// A type the console can ask for.
pub trait Answer: Sized {
    /// Name shown to the user when conversion fails.
    fn type_name() -> &'static str;

    /// Convert a raw, non-blank line.
    fn parse_answer(line: &str) -> Result<Self, PromptError>;
}

impl Answer for String {
    fn type_name() -> &'static str {
        "text"
    }

    fn parse_answer(line: &str) -> Result<Self, PromptError> {
        Ok(line.to_string())
    }
}

macro_rules! integer_answer {
    ($($ty:ty),*) => {$(
        impl Answer for $ty {
            fn type_name() -> &'static str {
                "integer"
            }

            fn parse_answer(line: &str) -> Result<Self, PromptError> {
                line.parse().map_err(|_| PromptError::TypeConversion {
                    expected: Self::type_name(),
                    input: line.to_string(),
                })
            }
        }
    )*};
}

integer_answer!(i32, i64);

/// Owns the session's input and output and mediates every exchange with the user.
///
/// The streams live exactly as long as the console; dropping it flushes the
/// output, whatever path the session ends on.
pub struct Console {
    input: Box<dyn Input>,
    output: Box<dyn Write>,
    max_attempts: u32,
}

impl Console {
    pub fn new(input: Box<dyn Input>, output: Box<dyn Write>) -> Self {
        Self::with_max_attempts(input, output, DEFAULT_MAX_ATTEMPTS)
    }

    /// Validation of `max_attempts` belongs to [`Settings`](crate::Settings);
    /// with 0 every question fails at once without reading.
    pub fn with_max_attempts(input: Box<dyn Input>, output: Box<dyn Write>, max_attempts: u32) -> Self {
        Self {
            input,
            output,
            max_attempts,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Write one line and flush.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    /// Show `message`, then wait for the user to hit enter.
    ///
    /// Whatever is typed is discarded; end of input is accepted too.
    pub fn press_enter(&mut self, message: &str) -> Result<(), PromptError> {
        self.write_line(message)?;
        self.read("")?;
        Ok(())
    }

    /// Ask for a line of text with the bare `? ` prompt.
    pub fn ask(&mut self) -> Result<String, PromptError> {
        self.ask_as(None)
    }

    /// Ask `question` and return the text answer.
    pub fn ask_text(&mut self, question: &str) -> Result<String, PromptError> {
        self.ask_as(Some(question))
    }

    /// Ask for a value of type `T`.
    ///
    /// Blank answers and answers that do not convert to `T` are reported and
    /// asked again. Both kinds of failure draw from the same budget of
    /// [`max_attempts`](Self::max_attempts); once it is spent the call fails
    /// with [`PromptError::RetryBudgetExhausted`].
    pub fn ask_as<T: Answer>(&mut self, question: Option<&str>) -> Result<T, PromptError> {
        let prompt = match question {
            Some(q) => format!("{} {}", q, PROMPT_SUFFIX),
            None => PROMPT_SUFFIX.to_string(),
        };

        for attempt in 1..=self.max_attempts {
            match self.try_once::<T>(&prompt) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    debug!(attempt, max = self.max_attempts, error = %err, "rejected answer");
                    self.write_line(&err.to_string())?;
                    if let PromptError::TypeConversion { .. } = err {
                        self.write_line(TRY_AGAIN)?;
                    }
                }
                Err(err) => return Err(err),
            }
        }

        warn!(attempts = self.max_attempts, "no valid answer, giving up");
        Err(PromptError::RetryBudgetExhausted {
            attempts: self.max_attempts,
        })
    }

    fn try_once<T: Answer>(&mut self, prompt: &str) -> Result<T, PromptError> {
        match self.read(prompt)? {
            Some(line) if !line.trim().is_empty() => T::parse_answer(&line),
            _ => Err(PromptError::EmptyInput),
        }
    }

    fn read(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        self.input
            .read_line(prompt, &mut self.output)
            .map_err(|err| match err.kind() {
                io::ErrorKind::Interrupted => PromptError::Interrupted,
                _ => PromptError::Io(err),
            })
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        if let Err(err) = self.output.flush() {
            debug!(error = %err, "flushing console output on close failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::{MemInput, MemWriter};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn console(lines: &[&str]) -> (Console, Rc<RefCell<Vec<u8>>>) {
        let (writer, handle) = MemWriter::with_handle();
        let console = Console::new(
            Box::new(MemInput::from_lines(lines.iter().copied())),
            Box::new(writer),
        );
        (console, handle)
    }

    struct InterruptedInput;

    impl Input for InterruptedInput {
        fn read_line(&mut self, _prompt: &str, _output: &mut dyn Write) -> io::Result<Option<String>> {
            Err(io::Error::from(io::ErrorKind::Interrupted))
        }
    }

    #[test]
    fn test_ask_returns_raw_line() {
        let (mut console, handle) = console(&[" apple "]);
        assert_eq!(console.ask().unwrap(), " apple ");
        assert_eq!(MemWriter::contents(&handle), "? ");
    }

    #[test]
    fn test_question_is_prefixed_to_suffix() {
        let (mut console, handle) = console(&["Pommes"]);
        assert_eq!(console.ask_text("fruit").unwrap(), "Pommes");
        assert_eq!(MemWriter::contents(&handle), "fruit ? ");
    }

    #[test]
    fn test_blank_lines_are_rejected_then_accepted() {
        let (mut console, handle) = console(&["", "   ", "cherry"]);
        assert_eq!(console.ask().unwrap(), "cherry");
        assert_eq!(
            MemWriter::contents(&handle),
            "? empty response not allowed, try again...\n\
             ? empty response not allowed, try again...\n\
             ? "
        );
    }

    #[test]
    fn test_three_blank_lines_exhaust_budget() {
        let (mut console, handle) = console(&["", "", "", "apple"]);
        let err = console.ask().unwrap_err();
        assert!(matches!(err, PromptError::RetryBudgetExhausted { attempts: 3 }));
        // the fourth line was never read
        assert_eq!(MemWriter::contents(&handle).matches("? ").count(), 3);
        assert_eq!(console.ask().unwrap(), "apple");
    }

    #[test]
    fn test_end_of_input_counts_as_empty() {
        let (mut console, handle) = console(&[]);
        let err = console.ask().unwrap_err();
        assert!(matches!(err, PromptError::RetryBudgetExhausted { attempts: 3 }));
        assert_eq!(
            MemWriter::contents(&handle)
                .matches("empty response not allowed")
                .count(),
            3
        );
    }

    #[test]
    fn test_integer_answer_parses() {
        let (mut console, _) = console(&["42"]);
        assert_eq!(console.ask_as::<i32>(Some("how many")).unwrap(), 42);
    }

    #[test]
    fn test_integer_conversion_failure_is_retried() {
        let (mut console, handle) = console(&["two", "-7"]);
        assert_eq!(console.ask_as::<i64>(None).unwrap(), -7);
        assert_eq!(
            MemWriter::contents(&handle),
            "? the response does not have the expected type: integer\n\
             try again...\n\
             ? "
        );
    }

    #[test]
    fn test_integer_is_not_trimmed() {
        let (mut console, handle) = console(&[" 5", "5"]);
        assert_eq!(console.ask_as::<i32>(None).unwrap(), 5);
        assert!(MemWriter::contents(&handle).contains("expected type: integer"));
    }

    #[test]
    fn test_three_conversion_failures_exhaust_budget() {
        let (mut console, handle) = console(&["x", "y", "z", "1"]);
        let err = console.ask_as::<i32>(None).unwrap_err();
        assert!(matches!(err, PromptError::RetryBudgetExhausted { attempts: 3 }));
        assert_eq!(
            MemWriter::contents(&handle)
                .matches("expected type: integer")
                .count(),
            3
        );
        assert_eq!(console.ask_as::<i32>(None).unwrap(), 1);
    }

    #[test]
    fn test_mixed_failures_share_one_budget() {
        let (mut console, _) = console(&["", "x", " ", "1"]);
        let err = console.ask_as::<i32>(None).unwrap_err();
        assert!(matches!(err, PromptError::RetryBudgetExhausted { attempts: 3 }));
    }

    #[test]
    fn test_budget_is_per_call() {
        let (mut console, _) = console(&["", "", "a", "", "", "b"]);
        assert_eq!(console.ask().unwrap(), "a");
        assert_eq!(console.ask().unwrap(), "b");
    }

    #[test]
    fn test_custom_budget() {
        let (writer, _) = MemWriter::with_handle();
        let mut console = Console::with_max_attempts(
            Box::new(MemInput::from_lines(["", "apple"])),
            Box::new(writer),
            1,
        );
        assert!(matches!(
            console.ask().unwrap_err(),
            PromptError::RetryBudgetExhausted { attempts: 1 }
        ));
    }

    #[test]
    fn test_zero_budget_is_not_raised() {
        let (writer, handle) = MemWriter::with_handle();
        let mut console =
            Console::with_max_attempts(Box::new(MemInput::from_lines(["apple"])), Box::new(writer), 0);
        assert_eq!(console.max_attempts(), 0);
        assert!(matches!(
            console.ask().unwrap_err(),
            PromptError::RetryBudgetExhausted { attempts: 0 }
        ));
        assert_eq!(MemWriter::contents(&handle), "");
    }

    #[test]
    fn test_interrupt_is_not_retried() {
        let (writer, handle) = MemWriter::with_handle();
        let mut console = Console::new(Box::new(InterruptedInput), Box::new(writer));
        assert!(matches!(console.ask().unwrap_err(), PromptError::Interrupted));
        assert_eq!(MemWriter::contents(&handle), "");
    }

    #[test]
    fn test_press_enter_discards_line() {
        let (mut console, handle) = console(&["whatever", "banana"]);
        console.press_enter("press enter to start").unwrap();
        assert_eq!(console.ask().unwrap(), "banana");
        assert_eq!(MemWriter::contents(&handle), "press enter to start\n? ");
    }

    #[test]
    fn test_press_enter_accepts_end_of_input() {
        let (mut console, _) = console(&[]);
        assert!(console.press_enter("bye").is_ok());
    }

    #[test]
    fn test_output_survives_console_drop() {
        let (mut console, handle) = console(&[]);
        console.write_line("230").unwrap();
        drop(console);
        assert_eq!(MemWriter::contents(&handle), "230\n");
    }
}
