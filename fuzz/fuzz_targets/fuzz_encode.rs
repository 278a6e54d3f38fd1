#![no_main]

use libfuzzer_sys::fuzz_target;
use morsewave_core::{encode, sequence, Timing};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let morse = encode(text);

        // Whatever the input, the fragment string stays in the alphabet.
        assert!(morse
            .chars()
            .all(|c| matches!(c, '.' | '-' | ' ' | '/' | '#')));

        // Sequencing is total over that alphabet: two notes per fragment,
        // no panics.
        let timing = Timing::from_dit(0.05).unwrap();
        let notes = sequence(&morse, &timing);
        assert_eq!(notes.len(), morse.chars().count() * 2);
    }
});
