pub struct SortedVecSet<T>(Vec<T>);

impl<T: Ord> SortedVecSet<T> {
    pub fn new() -> Self { Self(vec![]) }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }

    pub fn insert(&mut self, elt: T) -> bool {
        match self.0.binary_search(&elt) {
            Ok(_) => false,
            Err(i) => {
                self.0.insert(i, elt);
                true
            }
        }
    }
    pub fn contains(&self, elt: &T) -> bool { self.0.binary_search(elt).is_ok() }
    pub fn first(&self) -> Option<&T> { self.0.first() }
    pub fn first_n(&self, count: usize) -> Vec<&T> {
        self.0.iter().take(count).collect()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }
}

impl<T: Ord> Default for SortedVecSet<T> {
    fn default() -> Self { Self::new() }
}

#[test]
fn sanity_check() {
    let mut set = SortedVecSet::new();
    assert!(set.is_empty());
    assert_eq!(set.first(), None);
    for x in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3] {
        set.insert(x);
    }
    assert_eq!(set.len(), 7);
    assert!(set.iter().copied().eq([1, 2, 3, 4, 5, 6, 9]));
    assert_eq!(set.first_n(3), [&1, &2, &3]);
    assert_eq!(set.first_n(10).len(), 7);
    assert!(set.contains(&9));
    assert!(!set.contains(&7));
}
