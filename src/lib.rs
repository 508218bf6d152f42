pub mod api;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod theory;
pub mod voicing;
// cmd and reports are binary modules (in main.rs),
// so table rendering stays out of the library surface.
