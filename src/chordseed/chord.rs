use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::chordseed::noteparser::pest::Parser;
use crate::chordseed::noteparser::{NoteParser, Rule};
use crate::chordseed::pitch::PitchClass;
use crate::chordseed::template::{ChordTemplate, CATALOG};

/// Raised when any token of the seed list fails to resolve to a pitch
/// class, or the list itself is empty or malformed. The run aborts before
/// producing any output.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Some input not recognized. Valid examples: `c, g, Ab`, `G, F, bb`")]
pub struct InvalidNoteError {
    pub input: String,
}

/// The seed notes, in input order. The first note is the designated root;
/// duplicates are preserved.
#[derive(Debug, PartialEq, Eq)]
pub struct NoteSet {
    notes: Vec<PitchClass>,
}

impl NoteSet {
    pub fn root(&self) -> PitchClass {
        self.notes[0]
    }

    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    /// Semitone intervals of every note relative to the root, deduplicated.
    pub fn interval_set(&self) -> BTreeSet<u8> {
        let root = self.root();
        self.notes
            .iter()
            .map(|note| note.interval_from(root))
            .collect()
    }
}

/// Canonical "Letter+accidental" casing: uppercase throughout, except the
/// second character of a two-character token ("bb" -> "Bb", "AB" -> "Ab").
/// Single letters stay uppercase; longer tokens fail validation later.
fn canonicalize(token: &str) -> String {
    let upper = token.to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(accidental), None) => {
            format!("{}{}", letter, accidental.to_ascii_lowercase())
        }
        _ => upper,
    }
}

impl FromStr for NoteSet {
    type Err = InvalidNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || InvalidNoteError {
            input: String::from(s),
        };
        let mut pairs = NoteParser::parse(Rule::FULL_NOTES, s).map_err(|e| {
            log::debug!("note list failed to parse: {}", e);
            reject()
        })?;
        let pair = pairs.next().ok_or_else(|| reject())?;
        if pair.as_rule() != Rule::NOTES {
            return Err(reject());
        }
        let notes: Vec<PitchClass> = pair
            .into_inner()
            .map(|token| {
                PitchClass::from_str(&canonicalize(token.as_str())).map_err(|e| {
                    log::debug!("{}", e);
                    reject()
                })
            })
            .collect::<Result<_, _>>()?;
        if notes.is_empty() {
            return Err(reject());
        }
        Ok(NoteSet { notes })
    }
}

impl fmt::Display for NoteSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.notes.iter().join(", "))
    }
}

/// A recognized seed set: the designated root plus the matching chord type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub root: PitchClass,
    pub chord_name: &'static str,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.root, self.chord_name)
    }
}

/// Compare the seed's interval set against every catalog template; exact
/// set equality is a detection. All matches are reported, in catalog
/// order. An empty result means the seed is not a recognized chord.
pub fn detect_chords(notes: &NoteSet, intervals: &BTreeSet<u8>) -> Vec<Detection> {
    CATALOG
        .iter()
        .filter(|template| template.offset_set() == *intervals)
        .map(|template| {
            log::debug!("interval set {:?} matched {}", intervals, template.name);
            Detection {
                root: notes.root(),
                chord_name: template.name,
            }
        })
        .collect()
}

/// A catalog template transposed onto concrete pitch classes. The first
/// note is the chord's root.
#[derive(Debug, PartialEq, Eq)]
pub struct TransposedChord {
    pub name: &'static str,
    pub notes: Vec<PitchClass>,
}

impl TransposedChord {
    pub fn root(&self) -> PitchClass {
        self.notes[0]
    }
}

impl fmt::Display for TransposedChord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.root(),
            self.name,
            self.notes.iter().join(", ")
        )
    }
}

/// Place `anchor` at slot `slot` of `template`: shift every present offset
/// so the slot's offset lands on the anchor, wrapping each result into the
/// 1..=12 pitch-class range. `None` when the template has no note at that
/// slot, or (unreachable while slot 0 holds the root) no notes at all.
fn transpose(template: &ChordTemplate, anchor: PitchClass, slot: usize) -> Option<TransposedChord> {
    let target = template.slots[slot]?;
    let shift = i16::from(anchor.value()) - i16::from(target);
    let notes: Vec<PitchClass> = template
        .offsets()
        .map(|offset| PitchClass::from_wrapped(i16::from(offset) + shift))
        .collect();
    if notes.is_empty() {
        return None;
    }
    Some(TransposedChord {
        name: template.name,
        notes,
    })
}

/// Every catalog chord that has `anchor` at slot `slot`, in catalog order.
pub fn chords_at_slot(anchor: PitchClass, slot: usize) -> Vec<TransposedChord> {
    CATALOG
        .iter()
        .filter_map(|template| transpose(template, anchor, slot))
        .collect()
}
