use crate::calc::calculate;
use numlex::OPERATORS;

/// A keypad action delivered to a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Key {
    /// A literal character: digit, decimal point, operator or parenthesis.
    Input(char),
    /// Dismiss an error, else erase backwards, else drop the previous line.
    Clear,
    /// Evaluate the current line.
    Equals,
}

/// Calculator state between key presses.
///
/// Tracks the line being edited, the previously evaluated expression and
/// the full precision answer. The displayed result is rounded to seven
/// fractional digits but pressing an operator right after `=` continues
/// from the unrounded answer.
#[derive(Debug, Default)]
pub struct Session {
    current: String,
    previous: String,
    answer: String,
    just_evaluated: bool,
    errored: bool,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// The line being edited, or the last result or error message.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The last successfully evaluated expression.
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// True when the current line shows an error message.
    pub fn errored(&self) -> bool {
        self.errored
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Input(ch) => self.input(ch),
            Key::Clear => self.clear(),
            Key::Equals => self.equals(),
        }
    }

    fn input(&mut self, ch: char) {
        if self.errored {
            self.current.clear();
            self.errored = false;
        }
        if self.just_evaluated {
            self.just_evaluated = false;
            if OPERATORS.contains(&ch) {
                // keep computing from the full precision answer
                self.current = format!("{}{}", self.answer, ch);
            } else {
                self.current = ch.to_string();
            }
            return;
        }
        self.current.push(ch);
    }

    fn clear(&mut self) {
        if self.errored {
            self.current.clear();
            self.errored = false;
        } else if self.current.is_empty() && !self.previous.is_empty() {
            self.previous.clear();
        } else {
            self.current.pop();
        }
    }

    fn equals(&mut self) {
        match calculate(&self.current) {
            Ok(value) => {
                self.previous = std::mem::take(&mut self.current);
                self.current = round_display(&value);
                self.answer = value;
                self.just_evaluated = true;
            }
            Err(err) => {
                self.current = err.to_string();
                self.just_evaluated = false;
                self.errored = true;
            }
        }
    }
}

// the display rounds to 7 fractional digits and renders negative zero as 0
fn round_display(value: &str) -> String {
    let num: f64 = match value.parse() {
        Ok(num) => num,
        Err(_) => return value.to_string(),
    };
    let rounded: f64 = format!("{:.7}", num).parse().unwrap_or(num);
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}
