// Typing banner state machine. A timer drives `step()`; each call
// returns the text to display and the delay before the next step.

const TYPE_DELAY_MS: u32 = 100;
const DELETE_DELAY_MS: u32 = 50;
const HOLD_DELAY_MS: u32 = 3000;
const SWITCH_DELAY_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingCycle {
    texts: Vec<String>,
    text_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingCycle {
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            text_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn step(&mut self) -> TypingStep {
        // An empty text list leaves the banner blank instead of
        // panicking on the index below.
        let Some(current) = self.texts.get(self.text_index) else {
            return TypingStep {
                text: String::new(),
                delay_ms: HOLD_DELAY_MS,
            };
        };
        let len = current.chars().count();
        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.char_index = (self.char_index + 1).min(len);
            TYPE_DELAY_MS
        };
        let text: String = current.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay_ms = HOLD_DELAY_MS;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            delay_ms = SWITCH_DELAY_MS;
        }

        TypingStep { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> TypingCycle {
        TypingCycle::new(vec!["AB".into(), "XYZ".into()])
    }

    #[test]
    fn types_forward_one_char_per_step() {
        let mut c = cycle();
        assert_eq!(c.step().text, "A");
        assert_eq!(c.step().text, "AB");
    }

    #[test]
    fn holds_when_text_is_complete() {
        let mut c = cycle();
        c.step();
        let done = c.step();
        assert_eq!(done.text, "AB");
        assert_eq!(done.delay_ms, HOLD_DELAY_MS);
    }

    #[test]
    fn deletes_then_switches_to_next_text() {
        let mut c = cycle();
        c.step();
        c.step();
        let del = c.step();
        assert_eq!(del.text, "A");
        assert_eq!(del.delay_ms, DELETE_DELAY_MS);
        let empty = c.step();
        assert_eq!(empty.text, "");
        assert_eq!(empty.delay_ms, SWITCH_DELAY_MS);
        assert_eq!(c.step().text, "X");
    }

    #[test]
    fn cycles_back_to_first_text() {
        let mut c = cycle();
        // "AB" out and back (4 steps), "XYZ" out and back (6 steps).
        for _ in 0..(4 + 6) {
            c.step();
        }
        assert_eq!(c.step().text, "A");
    }

    #[test]
    fn empty_text_list_stays_blank() {
        let mut c = TypingCycle::new(Vec::new());
        for _ in 0..3 {
            let step = c.step();
            assert_eq!(step.text, "");
            assert_eq!(step.delay_ms, HOLD_DELAY_MS);
        }
    }

    #[test]
    fn handles_multibyte_text() {
        let mut c = TypingCycle::new(vec!["ไทย".into()]);
        assert_eq!(c.step().text, "ไ");
        assert_eq!(c.step().text, "ไท");
        assert_eq!(c.step().text, "ไทย");
    }
}
