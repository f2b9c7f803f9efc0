pub mod branch;
pub mod leaf;

pub use branch::{BranchGenerator, SegmentShape, TreeStats, active_max_depth, appear_fraction};
pub use leaf::{LeafEmitter, LeafSpawner, LeafVisitor, leaf_size};
