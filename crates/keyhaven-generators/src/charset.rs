//! Character classes and alphabet construction.

const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT_CHARS: &str = "0123456789";

// ASCII punctuation minus the quote-like characters (`"`, `'`, `` ` ``),
// which break naive shell or string embedding of the result.
const SYMBOL_CHARS: &str = "!#$%&()*+,-./:;<=>?@[\\]^_{|}~";

// Characters that are easy to misread across fonts. None of them are
// symbols, so filtering only ever affects letters and digits.
const AMBIGUOUS_CHARS: &str = "Il1O0";

/// A category of characters that can be enabled for generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// ASCII lowercase letters (`a-z`).
    Lowercase,
    /// ASCII uppercase letters (`A-Z`).
    Uppercase,
    /// ASCII digits (`0-9`).
    Digit,
    /// ASCII punctuation, minus the quote-like characters.
    Symbol,
}

impl CharacterClass {
    /// Every class, in the fixed order used for alphabet construction and
    /// guaranteed-character draws.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The full, unfiltered reference alphabet for this class.
    pub fn reference_alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Symbol => SYMBOL_CHARS,
        }
    }

    fn filtered_alphabet(self, avoid_ambiguous: bool) -> Vec<char> {
        self.reference_alphabet()
            .chars()
            .filter(|c| !avoid_ambiguous || !AMBIGUOUS_CHARS.contains(*c))
            .collect()
    }
}

/// The alphabet a single generation call draws from: one filtered character
/// set per enabled class, plus their concatenation (the pool).
///
/// Normally produced by [`build_alphabet`]. The fields are public so a
/// caller can supply custom sets; [`synthesize`](crate::synthesize) rejects
/// an empty pool on every call rather than trusting its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveAlphabet {
    /// Filtered character set per enabled class, in class order. A set may
    /// be empty, in which case it contributes no guaranteed character.
    pub class_sets: Vec<Vec<char>>,
    /// Concatenation of all class sets; the draw source for the
    /// non-guaranteed portion of a password.
    pub pool: Vec<char>,
}

/// Build the effective alphabet for the given classes.
///
/// Pure function of its inputs. Classes are processed in the order given;
/// [`GenerationPolicy`](crate::GenerationPolicy) hands them over in the
/// fixed [`CharacterClass::ALL`] order.
pub fn build_alphabet(classes: &[CharacterClass], avoid_ambiguous: bool) -> EffectiveAlphabet {
    let class_sets: Vec<Vec<char>> = classes
        .iter()
        .map(|class| class.filtered_alphabet(avoid_ambiguous))
        .collect();
    let pool = class_sets.iter().flatten().copied().collect();

    EffectiveAlphabet { class_sets, pool }
}
