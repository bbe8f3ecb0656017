use log::trace;

/// Bit-encoded subset of leaf indices
pub type Mask = u32;

/// Mask with the low `leaf_count` bits set.
pub fn full_mask(leaf_count: usize) -> Mask {
    if leaf_count >= Mask::BITS as usize {
        Mask::MAX
    } else {
        (1 << leaf_count) - 1
    }
}

/// Index of the only leaf in `mask`, if it holds exactly one.
pub fn single_leaf(mask: Mask) -> Option<usize> {
    (mask.count_ones() == 1).then(|| mask.trailing_zeros() as usize)
}

/// Every split of `mask` into two non-empty disjoint halves, each unordered
/// pair listed once with the numerically smaller half first.
pub fn generate_splits(mask: Mask) -> Vec<(Mask, Mask)> {
    let mut splits = Vec::new();

    let mut sub = mask.wrapping_sub(1) & mask;
    while sub != 0 {
        let rest = mask & !sub;
        if sub < rest {
            splits.push((sub, rest));
        }
        sub = (sub - 1) & mask;
    }

    trace!("Mask {:#b} has {} splits", mask, splits.len());
    splits
}
