use std::fmt::Display;
use tracing::{debug, trace};
use crate::Error;
use crate::check::{CheckRequest, DIE_FACES};
use crate::roll::{DiceSource, roll_checked};


/// One batch of dice rolled within a check.
///
/// The first wave rolls the requested dice, each later wave rerolls the
/// triumphs of the wave before it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wave {
    faces: Vec<u16>,
    successes: u16,
    criticals: u16
}

impl Wave {
    /// Scores a batch of faces against `check`. The faces are sorted ascending.
    pub fn new(check: &CheckRequest, mut faces: Vec<u16>) -> Self {
        faces.sort_unstable();

        let mode = check.mode();
        let mut successes = 0;
        let mut criticals = 0;

        for &face in &faces {
            if check.is_success(face) {
                successes += 1;
            }

            if mode.is_critical(face) {
                criticals += 1;
            }
        }

        Self { faces, successes, criticals }
    }

    /// Rolled faces, ascending.
    pub fn faces(&self) -> &[u16] {
        &self.faces
    }

    /// Faces at or below the target in this wave.
    pub fn successes(&self) -> u16 {
        self.successes
    }

    /// Number of faces at or below the triumph threshold, the size of the next wave.
    pub fn criticals(&self) -> u16 {
        self.criticals
    }
}

impl Display for Wave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[", self.successes)?;

        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{face}")?;
        }

        write!(f, "]")
    }
}


/// The outcome of a resolved check.
///
/// Its [`Display`] implementation renders the result line shown to players, e.g.
/// `(5D6<=3) ＞ 3[1,2,3,4,6]+0[5] ＞ 成功数：3 / 1トライアンフ`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckResult {
    check: CheckRequest,
    waves: Vec<Wave>,
    successes: u64,
    triumphs: u32
}

impl CheckResult {
    fn new(check: CheckRequest) -> Self {
        Self { check, waves: Vec::new(), successes: 0, triumphs: 0 }
    }

    fn push(&mut self, wave: Wave) {
        self.successes += wave.successes as u64;

        if wave.criticals > 0 {
            self.triumphs += 1;
        }

        self.waves.push(wave);
    }

    /// The check this result was rolled for.
    pub fn check(&self) -> &CheckRequest {
        &self.check
    }

    /// Every wave in roll order, the first one holding the requested dice.
    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Successes summed over every wave.
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Number of waves that contained at least one triumph.
    /// Always `0` when the check does not count triumphs.
    pub fn triumphs(&self) -> u32 {
        self.triumphs
    }

    /// Total damage for damage checks, `None` for plain success checks.
    pub fn damage(&self) -> Option<u64> {
        self.check
            .is_damage_check()
            .then(|| self.successes * self.check.damage() as u64)
    }
}

impl Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}D6<={}) ＞ ", self.check.dice_count(), self.check.target())?;

        for (i, wave) in self.waves.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{wave}")?;
        }

        match self.damage() {
            Some(total) => write!(f, " ＞ Hits：{}*{} ＞ {}ダメージ", self.successes, self.check.damage(), total)?,
            None => write!(f, " ＞ 成功数：{}", self.successes)?
        }

        if self.check.mode().is_enabled() {
            write!(f, " / {}トライアンフ", self.triumphs)?;
        }

        Ok(())
    }
}


/// Resolves `check` by rolling waves from `source` until no triumphs remain.
///
/// Every triumph of a wave is rerolled in the next one. Checks without triumphs
/// roll exactly one wave. The number of waves has no fixed bound.
///
/// # Errors
/// Returns the [`Error`] raised by [`DiceSource::roll_dice()`], or
/// `Err(Error::DiceCount)`/`Err(Error::Entropy)` when the source returns a
/// malformed batch. No partial result is produced.
///
/// # Examples
/// ```
/// use alsetto::{CheckRequest, ScriptedSource, resolve};
///
/// let check = CheckRequest::builder(5).build().unwrap();
/// let mut source = ScriptedSource::new([4, 1, 6, 3, 2, 5]);
/// let result = resolve(&check, &mut source).unwrap();
///
/// assert_eq!(result.to_string(), "(5D6<=3) ＞ 3[1,2,3,4,6]+0[5] ＞ 成功数：3 / 1トライアンフ");
/// ```
pub fn resolve<S: DiceSource + ?Sized>(check: &CheckRequest, source: &mut S) -> Result<CheckResult, Error> {
    let mut result = CheckResult::new(*check);
    let mut remaining = check.dice_count();

    while remaining > 0 {
        let faces = roll_checked(source, remaining, DIE_FACES)?;
        let wave = Wave::new(check, faces);

        trace!(index = result.waves.len() + 1, dice = remaining, %wave, "rolled wave");

        remaining = if check.mode().is_enabled() { wave.criticals } else { 0 };
        result.push(wave);
    }

    debug!(%check, successes = result.successes, triumphs = result.triumphs, waves = result.waves.len(), "resolved check");

    Ok(result)
}

impl CheckRequest {
    /// Resolves this check against `source`. See [`resolve()`].
    ///
    /// # Errors
    /// Same as [`resolve()`].
    pub fn resolve<S: DiceSource + ?Sized>(&self, source: &mut S) -> Result<CheckResult, Error> {
        resolve(self, source)
    }
}
