//! Strong password generator.
//!
//! Generates 12-character suggestions with at least one character from
//! each base character class. The RNG is injectable so tests can run
//! against a seeded generator.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*";

const GENERATED_LENGTH: usize = 12;

/// Generates a strong password suggestion using the thread-local RNG.
#[must_use]
pub fn generate_strong_password() -> SecretString {
    generate_with_rng(&mut rand::thread_rng())
}

/// Generates a strong password suggestion from the given RNG.
///
/// One character is drawn from each of the four classes (uppercase,
/// lowercase, digit, symbol), the remainder uniformly from their union,
/// and the result is shuffled so the guaranteed characters do not sit at
/// fixed positions.
#[must_use]
pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R) -> SecretString {
    let classes = [UPPER, LOWER, DIGITS, SYMBOLS];

    let mut chars: Vec<char> = classes.iter().map(|class| pick(rng, class)).collect();

    let union = classes.concat();
    while chars.len() < GENERATED_LENGTH {
        chars.push(pick(rng, &union));
    }

    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("generated password suggestion");

    SecretString::new(chars.into_iter().collect::<String>().into())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &str) -> char {
    let bytes = set.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}
