//! Typewriter reveal for the brand logo text.

/// Delay before the first character appears.
const START_DELAY_MS: u64 = 500;

/// Delay between characters.
const CHAR_DELAY_MS: u64 = 150;

/// Types a line of text one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    start_ms: u64,
    skipped: bool,
}

impl Typewriter {
    /// Start typing `text`, with the clock currently at `now_ms`.
    pub fn new(text: impl Into<String>, now_ms: u64) -> Self {
        Self {
            text: text.into(),
            start_ms: now_ms,
            skipped: false,
        }
    }

    /// Show the full text immediately, as non-landing pages do.
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    fn visible_chars(&self, now_ms: u64) -> usize {
        let total = self.text.chars().count();
        if self.skipped {
            return total;
        }
        let typing_ms = now_ms.saturating_sub(self.start_ms + START_DELAY_MS);
        ((typing_ms / CHAR_DELAY_MS) as usize).min(total)
    }

    /// The typed prefix at `now_ms`.
    pub fn visible(&self, now_ms: u64) -> &str {
        let chars = self.visible_chars(now_ms);
        match self.text.char_indices().nth(chars) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// Whether every character has been typed.
    pub fn is_complete(&self, now_ms: u64) -> bool {
        self.visible_chars(now_ms) >= self.text.chars().count()
    }

    /// Whether the most recent character is still mid-entrance. The
    /// caller styles it as jumping until the line settles.
    pub fn last_char_jumping(&self, now_ms: u64) -> bool {
        let chars = self.visible_chars(now_ms);
        chars > 0 && !self.is_complete(now_ms)
    }

    /// The full text.
    pub fn text(&self) -> &str {
        &self.text
    }
}
