//! Zone containers: tableau columns, foundation piles, stock/waste.
//!
//! Pure containers with zone-specific invariants. The move engine owns all
//! cross-zone logic; containers only validate and perform their own
//! push/pop/split operations.

pub mod foundation;
pub mod stock;
pub mod tableau;

pub use foundation::{FoundationPile, Foundations};
pub use stock::{Difficulty, DrawResult, StockPile};
pub use tableau::{Tableau, TableauColumn};
