mod dice;
mod matrix;
mod sampler;

pub use dice::*;
pub use matrix::*;
pub use sampler::*;
