use std::collections::BTreeSet;

/// Fixed number of offset slots per template. Chords beyond five distinct
/// pitch classes are out of scope.
pub const SLOT_COUNT: usize = 5;

/// A chord type as an ordered list of semitone offsets from an implicit
/// root at offset 0. Unused slots are `None`.
///
/// Invariant: slot 0 is always `Some(0)`.
pub struct ChordTemplate {
    pub name: &'static str,
    pub slots: [Option<u8>; SLOT_COUNT],
}

impl ChordTemplate {
    /// Present offsets in slot order.
    pub fn offsets(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Present offsets as an unordered set, for exact matching.
    pub fn offset_set(&self) -> BTreeSet<u8> {
        self.offsets().collect()
    }
}

/// Every chord type the tool knows, in the order results are reported.
pub const CATALOG: [ChordTemplate; 15] = [
    ChordTemplate {
        name: "Power",
        slots: [Some(0), Some(7), None, None, None],
    },
    ChordTemplate {
        name: "Major",
        slots: [Some(0), Some(4), Some(7), None, None],
    },
    ChordTemplate {
        name: "Major6",
        slots: [Some(0), Some(4), Some(7), Some(9), None],
    },
    ChordTemplate {
        name: "Major7",
        slots: [Some(0), Some(4), Some(7), Some(11), None],
    },
    ChordTemplate {
        name: "Major69",
        slots: [Some(0), Some(4), Some(7), Some(9), Some(2)],
    },
    ChordTemplate {
        name: "Major9",
        slots: [Some(0), Some(4), Some(7), Some(11), Some(2)],
    },
    ChordTemplate {
        name: "Minor",
        slots: [Some(0), Some(3), Some(7), None, None],
    },
    ChordTemplate {
        name: "Minor6",
        slots: [Some(0), Some(3), Some(7), Some(9), None],
    },
    ChordTemplate {
        name: "Minor7",
        slots: [Some(0), Some(3), Some(7), Some(10), None],
    },
    ChordTemplate {
        name: "Minor9",
        slots: [Some(0), Some(3), Some(7), Some(10), Some(2)],
    },
    ChordTemplate {
        name: "Diminished",
        slots: [Some(0), Some(3), Some(6), None, None],
    },
    ChordTemplate {
        name: "HalfDiminished",
        slots: [Some(0), Some(3), Some(6), Some(10), None],
    },
    ChordTemplate {
        name: "Diminished7",
        slots: [Some(0), Some(3), Some(6), Some(9), None],
    },
    ChordTemplate {
        name: "DiminishedMaj7",
        slots: [Some(0), Some(3), Some(6), Some(11), None],
    },
    ChordTemplate {
        name: "Aug",
        slots: [Some(0), Some(4), Some(8), None, None],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn slot_zero_is_always_the_root() {
        for template in &CATALOG {
            assert_eq!(template.slots[0], Some(0), "{}", template.name);
        }
    }

    #[test]
    fn offsets_stay_within_one_octave() {
        for template in &CATALOG {
            for offset in template.offsets() {
                assert!(offset < 12, "{}: {}", template.name, offset);
            }
        }
    }

    #[test]
    fn names_are_unique() {
        let unique = CATALOG.iter().map(|t| t.name).unique().count();
        assert_eq!(unique, CATALOG.len());
    }

    #[test]
    fn offset_sets_are_distinct() {
        let unique = CATALOG.iter().map(|t| t.offset_set()).unique().count();
        assert_eq!(unique, CATALOG.len());
    }

    #[test]
    fn absent_slots_trail_present_ones() {
        for template in &CATALOG {
            let mut seen_absent = false;
            for slot in &template.slots {
                match slot {
                    None => seen_absent = true,
                    Some(_) => assert!(!seen_absent, "{}", template.name),
                }
            }
        }
    }
}
