//! Domain layer: scale-tree entities and the balancing engine
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod error;
pub mod pan;
pub mod scale;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use pan::{Pan, PanKind};
pub use scale::Scale;
pub use tree::{Adjustment, ScaleTree};
