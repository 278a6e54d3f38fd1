//! Morsewave CLI library.
//!
//! This crate provides the command implementations behind the `morsewave`
//! binary: Morse translation, audio rendering, and WAV output.

pub mod commands;
pub mod wav;
