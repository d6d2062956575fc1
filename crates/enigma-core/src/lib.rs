pub mod error;
pub mod validate;

pub mod alphabet;
pub mod defaults;
pub mod engine;
pub mod machine;
pub mod plugboard;
pub mod trace;
pub mod wiring;

pub use crate::alphabet::Alphabet;
pub use crate::engine::Engine;
pub use crate::machine::{Machine, MachineBuilder};
