use std::collections::VecDeque;
use rand::{Rng, SeedableRng};
use rand::rngs::{StdRng, ThreadRng};
use crate::Error;


/// Supplies the face values for a batch of dice.
///
/// This is the only nondeterministic input of a check. Implementations return
/// `count` unsorted faces, each independently uniform in `1..=faces`.
pub trait DiceSource {
    /// Rolls `count` dice with `faces` sides each.
    ///
    /// # Errors
    /// Implementations return an [`Error`] when they cannot produce the batch.
    fn roll_dice(&mut self, count: u16, faces: u16) -> Result<Vec<u16>, Error>;
}

impl<S: DiceSource + ?Sized> DiceSource for &mut S {
    fn roll_dice(&mut self, count: u16, faces: u16) -> Result<Vec<u16>, Error> {
        (**self).roll_dice(count, faces)
    }
}


/// A [`DiceSource`] backed by any [`rand::Rng`].
///
/// # Examples
/// ```
/// use alsetto::{DiceSource, RandomSource};
///
/// let mut source = RandomSource::seeded(42);
/// let faces = source.roll_dice(5, 6).unwrap();
///
/// assert_eq!(faces.len(), 5);
/// assert!(faces.iter().all(|face| (1..=6).contains(face)));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource<R = ThreadRng> {
    rng: R
}

impl RandomSource<ThreadRng> {
    /// Creates a source drawing from the thread-local generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource<StdRng> {
    /// Creates a reproducible source, the same seed always yields the same faces.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> RandomSource<R> {
    /// Wraps an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiceSource for RandomSource<R> {
    fn roll_dice(&mut self, count: u16, faces: u16) -> Result<Vec<u16>, Error> {
        if faces == 0 {
            return Err(Error::ZeroValue);
        }

        Ok((0..count)
            .map(|_| self.rng.random_range(1..=faces))
            .collect())
    }
}


/// A [`DiceSource`] that replays a fixed list of faces, for tests and replays.
///
/// Each batch takes the next `count` faces from the script. Once the script is
/// exhausted every further die shows the filler face (6 unless changed with
/// [`ScriptedSource::then()`]), so a cascade always ends.
///
/// # Examples
/// ```
/// use alsetto::{DiceSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new([4, 1, 6]);
///
/// assert_eq!(source.roll_dice(2, 6).unwrap(), vec![4, 1]);
/// assert_eq!(source.roll_dice(3, 6).unwrap(), vec![6, 6, 6]);
/// assert_eq!(source.requests(), &[2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    faces: VecDeque<u16>,
    filler: u16,
    requests: Vec<u16>
}

impl ScriptedSource {
    /// Creates a source that replays `faces` in order.
    pub fn new<I: IntoIterator<Item = u16>>(faces: I) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            filler: 6,
            requests: Vec::new()
        }
    }

    /// Sets the face returned once the script runs out.
    pub fn then(mut self, filler: u16) -> Self {
        self.filler = filler;
        self
    }

    /// Dice counts of every batch requested so far, in order.
    pub fn requests(&self) -> &[u16] {
        &self.requests
    }

    /// Number of scripted faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedSource {
    fn roll_dice(&mut self, count: u16, _faces: u16) -> Result<Vec<u16>, Error> {
        self.requests.push(count);

        Ok((0..count)
            .map(|_| self.faces.pop_front().unwrap_or(self.filler))
            .collect())
    }
}


/// Rolls one batch and checks it against the contract of [`DiceSource`].
///
/// # Errors
/// - Returns `Err(Error::DiceCount)` if the source returned the wrong number of dice.
/// - Returns `Err(Error::Entropy)` if any face lies outside `1..=faces`.
/// - Propagates any error raised by the source itself.
pub(crate) fn roll_checked<S: DiceSource + ?Sized>(source: &mut S, count: u16, faces: u16) -> Result<Vec<u16>, Error> {
    let values = source.roll_dice(count, faces)?;

    if values.len() != count as usize {
        return Err(Error::DiceCount { expected: count, got: values.len() });
    }

    match values.iter().find(|&&face| face == 0 || face > faces) {
        Some(&face) => Err(Error::Entropy { face, faces }),
        None => Ok(values)
    }
}


#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use super::*;


    struct ShortSource;

    impl DiceSource for ShortSource {
        fn roll_dice(&mut self, count: u16, _faces: u16) -> Result<Vec<u16>, Error> {
            Ok(vec![1; count.saturating_sub(1) as usize])
        }
    }


    proptest! {
        #[test]
        fn test_random_source_range(count in 0..200u16, faces in 1..=20u16, seed: u64) {
            let mut source = RandomSource::seeded(seed);
            let values = source.roll_dice(count, faces).unwrap();

            prop_assert_eq!(values.len(), count as usize);
            for &value in &values {
                prop_assert!(value >= 1 && value <= faces);
            }
        }

        #[test]
        fn test_seeded_source_is_reproducible(seed: u64, count in 1..50u16) {
            let first = RandomSource::seeded(seed).roll_dice(count, 6).unwrap();
            let second = RandomSource::seeded(seed).roll_dice(count, 6).unwrap();

            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_scripted_source_replays(faces in prop::collection::vec(1..=6u16, 0..20), count in 0..30u16) {
            let mut source = ScriptedSource::new(faces.clone()).then(5);
            let values = source.roll_dice(count, 6).unwrap();

            prop_assert_eq!(values.len(), count as usize);
            for (i, &value) in values.iter().enumerate() {
                prop_assert_eq!(value, faces.get(i).copied().unwrap_or(5));
            }
            prop_assert_eq!(source.requests(), &[count][..]);
        }

        #[test]
        fn test_roll_checked_rejects_out_of_range(bad in prop_oneof![Just(0u16), 7..100u16]) {
            let mut source = ScriptedSource::new([3, bad, 2]);
            let result = roll_checked(&mut source, 3, 6);

            prop_assert_eq!(result, Err(Error::Entropy { face: bad, faces: 6 }));
        }
    }

    #[test]
    fn test_random_source_zero_faces() {
        let mut source = RandomSource::new();
        assert_eq!(source.roll_dice(3, 0), Err(Error::ZeroValue));
    }

    #[test]
    fn test_roll_checked_wrong_count() {
        let result = roll_checked(&mut ShortSource, 4, 6);
        assert_eq!(result, Err(Error::DiceCount { expected: 4, got: 3 }));
    }

    #[test]
    fn test_roll_checked_passes_valid_batch() {
        let mut source = ScriptedSource::new([4, 1, 6, 3, 2]);
        assert_eq!(roll_checked(&mut source, 5, 6), Ok(vec![4, 1, 6, 3, 2]));
    }
}
