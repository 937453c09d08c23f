use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::fmt;

/// Source d'aléa du moteur : tire un indice uniforme dans `[0, len)`.
///
/// Injectée à la construction du moteur pour que la passe 2 soit rejouable
/// en test avec une séquence fixe ou enregistrée.
pub trait CandidatePicker: fmt::Debug {
    /// `len` est toujours strictement positif.
    fn pick(&mut self, len: usize) -> usize;
}

/// Tirage uniforme via un PRNG, graine process par défaut.
pub struct RandomPicker {
    rng: SmallRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Graine fixe pour des tirages reproductibles.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl fmt::Debug for RandomPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPicker").finish_non_exhaustive()
    }
}

impl CandidatePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
