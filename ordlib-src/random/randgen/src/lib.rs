use std::ops::Range;

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `0..len` in uniformly random order.
pub struct Permutation {
    pub len: usize,
}

/// `len` independent draws from `bound`; duplicates are expected.
pub struct Multiset {
    pub bound: Range<i32>,
    pub len: usize,
}

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for Permutation {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let mut res: Vec<_> = (0..self.len as i32).collect();
        res.shuffle(rng);
        res
    }
}

impl Gen for Multiset {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.bound.clone());
        (0..self.len).map(|_| between.sample(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::*;

    #[test]
    fn permutation_uniformity() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        let n = 6 * 10_usize.pow(5);

        let mut map = BTreeMap::new();
        for _ in 0..n {
            let tmp = Permutation { len: 3 }.generate(&mut rng);
            *map.entry(tmp).or_insert(0) += 1;
        }
        let k = 6;
        assert_eq!(map.len(), k);
        for &v in map.values() {
            assert!(v >= (n / k) * 97 / 100);
            assert!(v <= (n / k) * 103 / 100);
        }
    }

    #[test]
    fn multiset_bounds() {
        let mut rng = ChaCha20Rng::from_seed([1; 32]);
        let a = Multiset { bound: -3..3, len: 1000 }.generate(&mut rng);
        assert_eq!(a.len(), 1000);
        assert!(a.iter().all(|x| (-3..3).contains(x)));
        // with 1000 draws over 6 values every value shows up
        for x in -3..3 {
            assert!(a.contains(&x));
        }
        let x = (5..6).generate(&mut rng);
        assert_eq!(x, 5);
    }
}
