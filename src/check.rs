use std::fmt::Display;
use crate::Error;


/// Number of faces on every die rolled by a check.
pub const DIE_FACES: u16 = 6;

/// Target value used when the command omits one.
pub const DEFAULT_TARGET: u16 = 3;


/// Selects whether successes trigger a reroll cascade and which faces count as triumphs.
///
/// Only three combinations of "cascade enabled" and "triumph threshold" exist,
/// so they are expressed as a closed set of variants rather than two independent flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CriticalMode {
    /// `nAL`: a face of 1 is a triumph and is rerolled.
    #[default]
    Standard,

    /// `nALG`: the gunslinger variant, faces of 1 or 2 are triumphs and are rerolled.
    Gunslinger,

    /// `nALC`: a single wave, no triumphs are counted.
    NoTriumph,
}

impl CriticalMode {
    /// Returns `true` when triumph dice are rerolled and counted.
    pub const fn is_enabled(self) -> bool {
        !matches!(self, CriticalMode::NoTriumph)
    }

    /// Highest face value that counts as a triumph, `0` when triumphs are disabled.
    pub const fn threshold(self) -> u16 {
        match self {
            CriticalMode::Standard => 1,
            CriticalMode::Gunslinger => 2,
            CriticalMode::NoTriumph => 0,
        }
    }

    /// Returns `true` if `face` counts as a triumph under this mode.
    pub const fn is_critical(self, face: u16) -> bool {
        face <= self.threshold()
    }
}

impl Display for CriticalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            CriticalMode::Standard => "",
            CriticalMode::Gunslinger => "G",
            CriticalMode::NoTriumph => "C",
        };

        write!(f, "{}", letter)
    }
}


/// A parsed success check: how many dice to roll, what they must roll under
/// and how the result is reported.
///
/// Built through [`CheckRequest::builder()`] or by parsing a command with
/// [`crate::parse_command()`]. Once built it is never mutated.
///
/// # Examples
/// ```
/// use alsetto::{CheckRequest, CriticalMode};
///
/// let check = CheckRequest::builder(7)
///     .target(2)
///     .damage(10)
///     .build()
///     .unwrap();
///
/// assert_eq!(check.mode(), CriticalMode::Standard);
/// assert_eq!(check.to_string(), "7AL2x10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckRequest {
    dice_count: u16,
    target: u16,
    mode: CriticalMode,
    damage: u16
}

impl CheckRequest {
    /// Creates a new [`CheckBuilder`] for a check rolling `dice_count` six-sided dice.
    pub fn builder(dice_count: u16) -> CheckBuilder {
        CheckBuilder::new(dice_count)
    }

    /// Number of dice rolled in the first wave.
    pub const fn dice_count(&self) -> u16 {
        self.dice_count
    }

    /// A face at or below this value is a success.
    pub const fn target(&self) -> u16 {
        self.target
    }

    /// Whether triumphs are rerolled, and on which faces.
    pub const fn mode(&self) -> CriticalMode {
        self.mode
    }

    /// Attack power per hit. `0` reports the success count instead of damage.
    pub const fn damage(&self) -> u16 {
        self.damage
    }

    /// Returns `true` when the result reports damage rather than a success count.
    pub const fn is_damage_check(&self) -> bool {
        self.damage != 0
    }

    /// Returns `true` if `face` counts as a success for this check.
    pub const fn is_success(&self, face: u16) -> bool {
        face <= self.target
    }
}

impl Display for CheckRequest {
    /// Formats the check in its canonical command form, omitting defaults.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}AL{}", self.dice_count, self.mode)?;

        if self.target != DEFAULT_TARGET {
            write!(f, "{}", self.target)?;
        }

        if self.damage != 0 {
            write!(f, "x{}", self.damage)?;
        }

        Ok(())
    }
}


/// A builder for [`CheckRequest`] with a fluent API.
///
/// Target defaults to [`DEFAULT_TARGET`], the mode to [`CriticalMode::Standard`]
/// and damage to `0`.
#[derive(Debug, Clone)]
pub struct CheckBuilder {
    dice_count: u16,
    target: u16,
    mode: CriticalMode,
    damage: u16
}

impl CheckBuilder {
    fn new(dice_count: u16) -> Self {
        Self {
            dice_count,
            target: DEFAULT_TARGET,
            mode: CriticalMode::Standard,
            damage: 0
        }
    }

    /// Sets the highest face that counts as a success.
    pub fn target(mut self, target: u16) -> Self {
        self.target = target;
        self
    }

    /// Sets the [`CriticalMode`].
    pub fn mode(mut self, mode: CriticalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the attack power per hit, turning the check into a damage check when non-zero.
    pub fn damage(mut self, damage: u16) -> Self {
        self.damage = damage;
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    /// Returns `Err(Error::ZeroValue)` if the dice count or the target is 0.
    pub fn build(self) -> Result<CheckRequest, Error> {
        if self.dice_count == 0 || self.target == 0 {
            return Err(Error::ZeroValue);
        }

        Ok(CheckRequest {
            dice_count: self.dice_count,
            target: self.target,
            mode: self.mode,
            damage: self.damage
        })
    }
}
