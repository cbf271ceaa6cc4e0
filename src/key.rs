use crate::*;

/// Memo key: the ordered stacks of a (sub-)tournament and its remaining prizes.
///
/// Stacks are deliberately NOT sorted. Every sub-tournament the recursion
/// builds drops exactly one position and keeps the rest in order, so the same
/// ordered stacks always describe the same positional sub-problem, and the
/// cached vector can be read back index-for-index. Sorting would merge
/// permutations of equal chip multisets, which is only sound if a permutation
/// back to the original positions is carried alongside the cached vector.
///
/// Floats are keyed by bit pattern, with `-0.0` folded onto `0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    stacks: Box<[u64]>,
    prizes: Box<[u64]>,
}

impl Key {
    fn bits(x: f64) -> u64 {
        (x + 0.).to_bits()
    }
}

impl From<(&[Chips], &[Prize])> for Key {
    fn from((stacks, prizes): (&[Chips], &[Prize])) -> Self {
        Self {
            stacks: stacks.iter().copied().map(Self::bits).collect(),
            prizes: prizes.iter().copied().map(Self::bits).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matters() {
        let a = Key::from((&[2000., 1000.][..], &[600., 400.][..]));
        let b = Key::from((&[1000., 2000.][..], &[600., 400.][..]));
        assert!(a != b);
    }

    #[test]
    fn prizes_are_part_of_the_key() {
        let a = Key::from((&[1000., 1000.][..], &[600., 400.][..]));
        let b = Key::from((&[1000., 1000.][..], &[400.][..]));
        assert!(a != b);
    }

    #[test]
    fn negative_zero_folds_onto_zero() {
        let a = Key::from((&[-0., 10.][..], &[1.][..]));
        let b = Key::from((&[0., 10.][..], &[1.][..]));
        assert!(a == b);
    }
}
