//! Note sequencing.
//!
//! A note is the unit the renderer consumes: one sound kind and one
//! duration. Sequencing turns a Morse fragment string into an ordered
//! list of notes in a single left-to-right pass.

use crate::timing::Timing;

/// The kind of sound a note plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    /// Carrier tone.
    Tone,
    /// Silence.
    Pause,
    /// Noise burst marking an untranslatable character.
    Noise,
}

/// What to play and for how long, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Sound kind.
    pub kind: SoundKind,
    /// Duration in seconds.
    pub duration: f64,
}

impl Note {
    /// Creates a new note.
    pub fn new(kind: SoundKind, duration: f64) -> Self {
        Self { kind, duration }
    }
}

/// Expands a Morse fragment string into a note sequence.
///
/// Every fragment becomes exactly two notes: its own sound, then one
/// fragment pause. `.` and `-` play the carrier for one and three dits,
/// `#` plays the five-dit noise burst. The letter and word separators are
/// emitted one fragment pause short, so with the trailing pause the total
/// silence lands exactly on three and seven dits. A fragment outside the
/// alphabet is treated like `#` rather than aborting.
pub fn sequence(morse: &str, timing: &Timing) -> Vec<Note> {
    let mut notes = Vec::with_capacity(morse.len() * 2);
    for fragment in morse.chars() {
        let note = match fragment {
            '.' => Note::new(SoundKind::Tone, timing.dit),
            '-' => Note::new(SoundKind::Tone, timing.dah),
            ' ' => Note::new(
                SoundKind::Pause,
                timing.letter_pause - timing.fragment_pause,
            ),
            '/' => Note::new(SoundKind::Pause, timing.word_pause - timing.fragment_pause),
            _ => Note::new(SoundKind::Noise, timing.error),
        };
        notes.push(note);
        notes.push(Note::new(SoundKind::Pause, timing.fragment_pause));
    }
    notes
}
