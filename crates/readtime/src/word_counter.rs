use std::num::NonZeroU32;

pub fn count_words(text: &str) -> u64 {
    words_count::count(text).words as u64
}

/// Seconds needed to read `text` at the given rate, rounded down.
pub fn seconds_for_text(text: &str, words_per_minute: NonZeroU32) -> u64 {
    let word_count = count_words(text);
    word_count * 60 / u64::from(words_per_minute.get())
}
