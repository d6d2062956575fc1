// crates/enigma-cli/src/cmd/mod.rs

pub mod encode;
pub mod keygen;
pub mod setting;
