pub const TYPE_DELAY_MS: u32 = 80;
pub const DELETE_DELAY_MS: u32 = 40;
pub const HOLD_DELAY_MS: u32 = 2_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TypingPhase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TypingLoop {
    phrases: Vec<String>,
    phrase_index: usize,
    visible_chars: usize,
    phase: TypingPhase,
}

impl TypingLoop {
    pub fn new(phrases: Vec<String>) -> Self {
        let phrases = if phrases.is_empty() {
            vec![String::new()]
        } else {
            phrases
        };

        Self {
            phrases,
            phrase_index: 0,
            visible_chars: 0,
            phase: TypingPhase::Typing,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn visible(&self) -> String {
        self.current_phrase()
            .chars()
            .take(self.visible_chars)
            .collect()
    }

    pub fn advance(&mut self) {
        match self.phase {
            TypingPhase::Typing => {
                if self.visible_chars < self.current_phrase_chars() {
                    self.visible_chars += 1;
                }
                if self.visible_chars == self.current_phrase_chars() {
                    self.phase = TypingPhase::Holding;
                }
            }
            TypingPhase::Holding => {
                self.phase = TypingPhase::Deleting;
            }
            TypingPhase::Deleting => {
                if self.visible_chars > 0 {
                    self.visible_chars -= 1;
                }
                if self.visible_chars == 0 {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.phase = TypingPhase::Typing;
                }
            }
        }
    }

    pub fn delay_for_next_ms(&self) -> u32 {
        match self.phase {
            TypingPhase::Typing => TYPE_DELAY_MS,
            TypingPhase::Holding => HOLD_DELAY_MS,
            TypingPhase::Deleting => DELETE_DELAY_MS,
        }
    }

    fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    fn current_phrase_chars(&self) -> usize {
        self.current_phrase().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_phrase_loop() -> TypingLoop {
        TypingLoop::new(vec!["Hello".to_string(), "World".to_string()])
    }

    fn advance_collecting(looper: &mut TypingLoop, steps: usize) -> Vec<String> {
        (0..steps)
            .map(|_| {
                looper.advance();
                looper.visible()
            })
            .collect()
    }

    #[test]
    fn types_one_character_at_a_time() {
        let mut looper = two_phrase_loop();
        let seen = advance_collecting(&mut looper, 5);
        assert_eq!(seen, ["H", "He", "Hel", "Hell", "Hello"]);
        assert_eq!(looper.phase(), TypingPhase::Holding);
    }

    #[test]
    fn full_cycle_wraps_back_to_the_first_phrase() {
        let mut looper = two_phrase_loop();

        // type "Hello", hold, delete it, type "World", hold, delete it
        let first = advance_collecting(&mut looper, 5);
        assert_eq!(first.last().map(String::as_str), Some("Hello"));
        looper.advance();
        assert_eq!(looper.phase(), TypingPhase::Deleting);

        let deleted = advance_collecting(&mut looper, 5);
        assert_eq!(deleted, ["Hell", "Hel", "He", "H", ""]);
        assert_eq!(looper.phrase_index(), 1);
        assert_eq!(looper.phase(), TypingPhase::Typing);

        let second = advance_collecting(&mut looper, 5);
        assert_eq!(second.last().map(String::as_str), Some("World"));
        looper.advance();
        advance_collecting(&mut looper, 5);

        assert_eq!(looper.phrase_index(), 0);
        assert_eq!(looper.phase(), TypingPhase::Typing);
        looper.advance();
        assert_eq!(looper.visible(), "H");
    }

    #[test]
    fn loop_never_reaches_a_stuck_state() {
        let mut looper = two_phrase_loop();
        for _ in 0..1_000 {
            let before = (looper.phrase_index(), looper.visible(), looper.phase());
            looper.advance();
            let after = (looper.phrase_index(), looper.visible(), looper.phase());
            assert_ne!(before, after, "advance made no progress");
        }
    }

    #[test]
    fn delays_follow_the_phase() {
        let mut looper = two_phrase_loop();
        assert_eq!(looper.delay_for_next_ms(), TYPE_DELAY_MS);

        for _ in 0..5 {
            looper.advance();
        }
        assert_eq!(looper.delay_for_next_ms(), HOLD_DELAY_MS);

        looper.advance();
        assert_eq!(looper.delay_for_next_ms(), DELETE_DELAY_MS);
    }

    #[test]
    fn empty_phrase_list_degrades_to_a_blank_loop() {
        let mut looper = TypingLoop::new(Vec::new());
        assert_eq!(looper.visible(), "");
        for _ in 0..10 {
            looper.advance();
        }
        assert_eq!(looper.visible(), "");
    }

    #[test]
    fn multibyte_phrases_reveal_whole_characters() {
        let mut looper = TypingLoop::new(vec!["héllo".to_string()]);
        looper.advance();
        looper.advance();
        assert_eq!(looper.visible(), "hé");
    }
}
