use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::chordseed::util::wrap_1_based;

/// Number of pitch classes in the chromatic cycle.
pub const PITCH_CLASS_COUNT: u8 = 12;

/// Canonical note names, indexed by pitch-class value minus one.
/// Black keys use flat spellings throughout.
const NAMES: [&str; PITCH_CLASS_COUNT as usize] = [
    "Ab", "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G",
];

/// A pitch class in the 1..=12 encoding (Ab = 1, A = 2, ..., G = 12).
///
/// The value and the canonical name form a total bijection; arithmetic
/// wraps modulo 12 back into the 1..=12 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Construct from a value already in 1..=12.
    pub fn from_value(value: u8) -> Option<PitchClass> {
        (1..=PITCH_CLASS_COUNT)
            .contains(&value)
            .then(|| PitchClass(value))
    }

    /// Construct from an arbitrary signed value, wrapping modulo 12
    /// into the 1..=12 range. Total for any input.
    pub fn from_wrapped(value: i16) -> PitchClass {
        PitchClass(wrap_1_based(value, PITCH_CLASS_COUNT))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NAMES[usize::from(self.0 - 1)]
    }

    /// Semitone interval from `root` up to `self`, in 0..=11.
    pub fn interval_from(self, root: PitchClass) -> u8 {
        (i16::from(self.0) - i16::from(root.0)).rem_euclid(i16::from(PITCH_CLASS_COUNT)) as u8
    }

    /// Transpose by a signed number of semitones.
    pub fn transposed(self, semitones: i16) -> PitchClass {
        PitchClass::from_wrapped(i16::from(self.0) + semitones)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pitch class name: {name:?}")]
pub struct ParsePitchClassError {
    pub name: String,
}

impl FromStr for PitchClass {
    type Err = ParsePitchClassError;

    /// Accepts canonical names only; case normalization happens upstream.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match NAMES.iter().position(|&name| name == s) {
            Some(index) => Ok(PitchClass(index as u8 + 1)),
            None => Err(ParsePitchClassError {
                name: String::from(s),
            }),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
