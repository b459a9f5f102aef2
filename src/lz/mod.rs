pub mod factorizer;
pub mod reconstructor;
pub mod tokens;

pub use factorizer::{factorize, Factorizer};
pub use reconstructor::{reconstruct, Reconstructor};
pub use tokens::{FactorizationSummary, Token, TokenSequence};
