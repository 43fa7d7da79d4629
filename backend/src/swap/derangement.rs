use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Number of shuffles tried before falling back to the repair sweep
pub const MAX_ATTEMPTS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerangementError {
    #[error("need at least 2 candidates, got {len}")]
    InfeasibleInput { len: usize },

    #[error("no fixed-point-free permutation found after {attempts} attempts and repair")]
    BudgetExhausted { attempts: usize },
}

/// A fixed-point-free pairing: `sources[i]` is assigned `targets[i]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<T> {
    sources: Vec<T>,
    targets: Vec<T>,
}

impl<T> Assignment<T> {
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Iterate `(from, to)` pairs in candidate order
    pub fn pairs(&self) -> impl Iterator<Item = (&T, &T)> {
        self.sources.iter().zip(self.targets.iter())
    }
}

/// Generate a derangement of `candidates`.
///
/// Shuffles up to [`MAX_ATTEMPTS`] times looking for a permutation with no
/// fixed points, then makes one last attempt that patches fixed points by
/// swapping each with its right neighbour (wrapping at the end). The caller's
/// slice is never reordered.
pub fn generate<T, R>(candidates: &[T], rng: &mut R) -> Result<Assignment<T>, DerangementError>
where
    T: PartialEq + Clone,
    R: Rng + ?Sized,
{
    generate_with_budget(candidates, rng, MAX_ATTEMPTS)
}

pub(crate) fn generate_with_budget<T, R>(
    candidates: &[T],
    rng: &mut R,
    attempts: usize,
) -> Result<Assignment<T>, DerangementError>
where
    T: PartialEq + Clone,
    R: Rng + ?Sized,
{
    if candidates.len() < 2 {
        return Err(DerangementError::InfeasibleInput {
            len: candidates.len(),
        });
    }

    let mut perm = candidates.to_vec();

    for _ in 0..attempts {
        perm.shuffle(rng);
        if is_fixed_point_free(candidates, &perm) {
            return Ok(assignment(candidates, perm));
        }
    }

    perm.shuffle(rng);
    repair(candidates, &mut perm);

    if is_fixed_point_free(candidates, &perm) {
        Ok(assignment(candidates, perm))
    } else {
        Err(DerangementError::BudgetExhausted { attempts })
    }
}

/// Swap every fixed point with the slot after it, in one left-to-right pass
pub(crate) fn repair<T: PartialEq>(candidates: &[T], perm: &mut [T]) {
    let n = perm.len();
    for i in 0..n {
        if perm[i] == candidates[i] {
            perm.swap(i, (i + 1) % n);
        }
    }
}

pub(crate) fn is_fixed_point_free<T: PartialEq>(candidates: &[T], perm: &[T]) -> bool {
    candidates.iter().zip(perm).all(|(a, b)| a != b)
}

fn assignment<T: Clone>(candidates: &[T], targets: Vec<T>) -> Assignment<T> {
    Assignment {
        sources: candidates.to_vec(),
        targets,
    }
}
