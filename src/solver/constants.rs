// Configuration constants for the solver module
pub const EPSILON: f64 = 1e-4;
pub const DEFAULT_TARGET: f64 = 18.0;
pub const DEFAULT_LEAF_COUNT: usize = 4;
pub const MAX_LEAVES: usize = 5;
