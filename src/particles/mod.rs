pub mod falling_leaves;

pub use falling_leaves::{AdvanceReport, FallingLeaf, FallingLeafSystem, Removal};
