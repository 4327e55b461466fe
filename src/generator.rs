use rand::Rng;

use crate::error::{Error, Result};

/// A uniform source of sampling indices.  The generator pulls one index per
/// output character; production code hands it the thread local rng, tests
/// inject a deterministic sequence.
pub trait IndexSource {
    /// Returns the next sampling index, expected to fall in `[0, bound)`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl IndexSource for rand::rngs::ThreadRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Generates a password of `length` characters drawn from `alphabet` with
/// the thread local random number generator.  The rng is unseeded, two calls
/// with the same inputs give different passwords.
pub fn generate(alphabet: &str, length: usize) -> Result<String> {
    generate_with(&mut rand::thread_rng(), alphabet, length)
}

/// Generates a password of `length` characters drawn from `alphabet`,
/// pulling sampling indices out of `source`.
///
/// An empty alphabet is rejected before any draw, and an index outside the
/// alphabet is rejected instead of being skipped, so a returned password
/// always holds exactly `length` characters.
pub fn generate_with<S: IndexSource>(
    source: &mut S,
    alphabet: &str,
    length: usize,
) -> Result<String> {
    if alphabet.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let chars: Vec<char> = alphabet.chars().collect();

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let index = source.next_index(chars.len());
        let c = chars
            .get(index)
            .copied()
            .ok_or(Error::SamplingIndexOutOfRange {
                index,
                alphabet_len: chars.len(),
            })?;
        password.push(c);
    }

    Ok(password)
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod generator;
