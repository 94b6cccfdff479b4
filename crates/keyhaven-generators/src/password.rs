//! Password synthesis.

use rand::{
    seq::{index, SliceRandom},
    Rng, RngCore,
};
use thiserror::Error;

use crate::{
    charset::{build_alphabet, EffectiveAlphabet},
    policy::GenerationPolicy,
};

/// The ways password synthesis can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// No enabled class contributed any usable character.
    #[error("no usable characters in the effective alphabet")]
    EmptyAlphabet,
}

/// Synthesize one password of exactly `length` characters from `alphabet`.
///
/// One character is drawn from every non-empty class set (in class order)
/// so each enabled class is represented, the remainder is filled with
/// uniform draws from the pool, and the whole buffer is shuffled so the
/// guaranteed characters are not predictably placed.
///
/// When `length` is smaller than the number of class sets, a random sample
/// of `length` of the guaranteed characters is kept instead and per-class
/// coverage is lost. That cannot happen within the policy bounds (length
/// at least 8, at most 4 classes), but the function stays correct for
/// callers outside them.
///
/// Fails with [`PasswordError::EmptyAlphabet`] when the pool is empty.
pub fn synthesize(
    mut rng: impl RngCore,
    alphabet: &EffectiveAlphabet,
    length: usize,
) -> Result<String, PasswordError> {
    if alphabet.pool.is_empty() {
        return Err(PasswordError::EmptyAlphabet);
    }

    // One guaranteed character per enabled, non-empty class, in class order.
    let mut chars: Vec<char> = Vec::with_capacity(length.max(alphabet.class_sets.len()));
    for set in &alphabet.class_sets {
        if let Some(&c) = set.choose(&mut rng) {
            chars.push(c);
        }
    }

    if chars.len() > length {
        // More guaranteed characters than room: keep a random sample of
        // `length` distinct positions and drop the rest.
        chars = index::sample(&mut rng, chars.len(), length)
            .iter()
            .map(|i| chars[i])
            .collect();
    } else {
        for _ in 0..length - chars.len() {
            let i = rng.gen_range(0..alphabet.pool.len());
            chars.push(alphabet.pool[i]);
        }
    }

    chars.shuffle(&mut rng);
    Ok(chars.into_iter().collect())
}

/// Generate a single password using the thread-local secure generator.
pub fn password(policy: &GenerationPolicy) -> Result<String, PasswordError> {
    password_with_rng(rand::thread_rng(), policy)
}

/// Generate a single password from the provided randomness source.
///
/// Every draw comes from `rng`, so a seeded source makes the output
/// reproducible.
pub fn password_with_rng(
    mut rng: impl RngCore,
    policy: &GenerationPolicy,
) -> Result<String, PasswordError> {
    let alphabet = build_alphabet(policy.enabled_classes(), policy.avoid_ambiguous());
    synthesize(&mut rng, &alphabet, policy.length())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{CharacterClass, PasswordGeneratorRequest};

    fn policy(request: PasswordGeneratorRequest) -> GenerationPolicy {
        GenerationPolicy::try_from(request).unwrap()
    }

    #[test]
    fn password_has_exactly_the_requested_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for length in [8, 12, 16, 33, 64] {
            let policy = policy(PasswordGeneratorRequest {
                length,
                ..Default::default()
            });
            let generated = password_with_rng(&mut rng, &policy).unwrap();
            assert_eq!(generated.chars().count(), usize::from(length));
        }
    }

    #[test]
    fn every_character_comes_from_the_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let policy = policy(PasswordGeneratorRequest::default());
        let alphabet = build_alphabet(policy.enabled_classes(), policy.avoid_ambiguous());

        for _ in 0..50 {
            let generated = synthesize(&mut rng, &alphabet, policy.length()).unwrap();
            assert!(generated.chars().all(|c| alphabet.pool.contains(&c)));
        }
    }

    #[test]
    fn every_enabled_class_is_represented() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let policy = policy(PasswordGeneratorRequest {
            length: 16,
            ..Default::default()
        });

        for _ in 0..100 {
            let generated = password_with_rng(&mut rng, &policy).unwrap();
            for class in CharacterClass::ALL {
                assert!(
                    generated
                        .chars()
                        .any(|c| class.reference_alphabet().contains(c)),
                    "{class:?} missing from {generated:?}"
                );
            }
        }
    }

    #[test]
    fn lowercase_and_digits_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let policy = policy(PasswordGeneratorRequest {
            lowercase: true,
            uppercase: false,
            digits: true,
            symbols: false,
            length: 8,
            ..Default::default()
        });

        let generated = password_with_rng(&mut rng, &policy).unwrap();
        assert_eq!(generated.chars().count(), 8);
        assert!(generated
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(generated.chars().any(|c| c.is_ascii_lowercase()));
        assert!(generated.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn avoid_ambiguous_excludes_the_ambiguous_characters() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let policy = policy(PasswordGeneratorRequest {
            avoid_ambiguous: true,
            length: 8,
            ..Default::default()
        });

        for _ in 0..100 {
            let generated = password_with_rng(&mut rng, &policy).unwrap();
            assert!(generated.chars().all(|c| !"Il1O0".contains(c)));
        }
    }

    #[test]
    fn identical_seeds_produce_identical_passwords() {
        let policy = policy(PasswordGeneratorRequest::default());

        let first = password_with_rng(ChaCha8Rng::seed_from_u64(99), &policy).unwrap();
        let second = password_with_rng(ChaCha8Rng::seed_from_u64(99), &policy).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn batch_of_passwords_is_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let policy = policy(PasswordGeneratorRequest {
            length: 16,
            count: 5,
            ..Default::default()
        });

        let batch: HashSet<String> = (0..policy.count())
            .map(|_| password_with_rng(&mut rng, &policy).unwrap())
            .collect();
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn empty_pool_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let alphabet = EffectiveAlphabet {
            class_sets: vec![Vec::new()],
            pool: Vec::new(),
        };

        assert_eq!(
            synthesize(&mut rng, &alphabet, 8),
            Err(PasswordError::EmptyAlphabet)
        );
        assert_eq!(
            synthesize(&mut rng, &build_alphabet(&[], false), 8),
            Err(PasswordError::EmptyAlphabet)
        );
    }

    #[test]
    fn non_empty_pool_always_succeeds() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let alphabet = EffectiveAlphabet {
            class_sets: vec![vec!['x']],
            pool: vec!['x'],
        };

        assert_eq!(synthesize(&mut rng, &alphabet, 4).as_deref(), Ok("xxxx"));
    }

    #[test]
    fn length_shorter_than_class_count_samples_the_guarantees() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let alphabet = build_alphabet(&CharacterClass::ALL, false);

        // Outside the policy bounds on purpose: 4 guaranteed characters
        // only have room for 1.
        let generated = synthesize(&mut rng, &alphabet, 1).unwrap();
        assert_eq!(generated.chars().count(), 1);
        assert!(generated.chars().all(|c| alphabet.pool.contains(&c)));
    }

    #[test]
    fn class_counts_show_no_bias() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let policy = policy(PasswordGeneratorRequest {
            length: 16,
            ..Default::default()
        });
        let alphabet = build_alphabet(policy.enabled_classes(), policy.avoid_ambiguous());

        const SAMPLES: usize = 2_000;
        let mut observed = [0.0f64; 4];
        for _ in 0..SAMPLES {
            let generated = synthesize(&mut rng, &alphabet, policy.length()).unwrap();
            for c in generated.chars() {
                for (slot, class) in observed.iter_mut().zip(CharacterClass::ALL) {
                    if class.reference_alphabet().contains(c) {
                        *slot += 1.0;
                    }
                }
            }
        }

        // Expected count per class: one guaranteed draw per password plus a
        // uniform share of the remaining pool draws.
        let pool_len = alphabet.pool.len() as f64;
        let fill = (policy.length() - CharacterClass::ALL.len()) as f64;
        let chi_square: f64 = observed
            .iter()
            .zip(&alphabet.class_sets)
            .map(|(&obs, set)| {
                let expected = SAMPLES as f64 * (1.0 + fill * set.len() as f64 / pool_len);
                (obs - expected).powi(2) / expected
            })
            .sum();

        // 99.9th percentile of chi-square with 3 degrees of freedom.
        assert!(chi_square < 16.27, "class counts look biased: {chi_square}");
    }
}
