pub mod cli;
pub mod rng;
pub mod stream;

pub use rng::{Xorshift64Star, DEFAULT_SEED, OUTPUT_MULTIPLIER};
pub use stream::{collect_outputs, OutputStream};
