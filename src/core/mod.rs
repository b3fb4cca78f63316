pub mod engine;
pub mod goldbach;
pub mod primes;
pub mod range;

pub use crate::domain::model::{PrimePair, ScanOutcome};
pub use crate::domain::ports::ScanConfig;
pub use crate::utils::error::Result;
