use rand::Rng;

/// Characters a prompt may contain: ASCII letters of both cases plus digits
pub const PROMPT_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const DEFAULT_PROMPT_LENGTH: usize = 3;

/// Handles prompt generation for trials
pub struct PromptGenerator<R: Rng> {
    rng: R,
    length: usize,
}

impl<R: Rng> PromptGenerator<R> {
    pub fn new(rng: R, length: usize) -> Self {
        Self { rng, length }
    }

    /// Draw a prompt uniformly, with replacement, from the alphabet
    pub fn generate_prompt(&mut self) -> String {
        (0..self.length)
            .map(|_| PROMPT_ALPHABET[self.rng.gen_range(0..PROMPT_ALPHABET.len())] as char)
            .collect()
    }
}
