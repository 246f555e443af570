pub mod cache;
pub mod coprime;
pub mod error;
pub mod logging;
pub mod random_perm;

pub use cache::PermuterCache;
pub use coprime::{MAX_ROUND_FACTORS, RoundConstants};
pub use error::PermutationError;
pub use random_perm::{Permuter, get_position};
