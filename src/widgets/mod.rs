// Widget implementations

mod dial;

pub use dial::{dial, Dial};
