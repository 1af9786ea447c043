use std::hash::Hash;

use ahash::AHashMap;
use ahash::AHashSet;

/// A **union-find** (disjoint set union) over an arbitrary element type.
///
/// Maintains a partition of a lazily growing universe of elements into
/// disjoint groups. Elements are registered implicitly: the first time an
/// element is passed to [`find`](Self::find) or [`union`](Self::union) it
/// becomes a singleton group of its own. There is no error path; every
/// operation succeeds.
///
/// Uses union by rank and path compression, so a sequence of N operations
/// costs amortized near-O(1) (inverse Ackermann) per operation. The rank
/// values are only a merge-direction heuristic; they are not corrected
/// after compression.
///
/// # Notes
/// - Not thread-safe. Wrap it in a lock if it must be shared across
///   threads (no solution in this repository does).
/// - Queries hand out owned values; internal maps are never exposed.
///
/// # Example
/// ```rust
/// use aoc_dsu::UnionFind;
///
/// let mut uf = UnionFind::new();
/// assert!(uf.union(1, 2));
/// assert!(uf.union(2, 3));
/// assert!(!uf.union(1, 3)); // already connected
/// assert_eq!(uf.find(1), uf.find(3));
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind<E: Eq + Hash + Clone> {
    parent: AHashMap<E, E>,
    rank: AHashMap<E, u32>,
}

impl<E: Eq + Hash + Clone> UnionFind<E> {
    /// Create an empty union-find.
    pub fn new() -> Self {
        Self {
            parent: AHashMap::new(),
            rank: AHashMap::new(),
        }
    }

    /// Number of distinct elements seen so far.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the root representative of the group containing `x`.
    ///
    /// An unseen `x` is registered as its own root first. The walk to the
    /// root is iterative, and every visited element is repointed directly
    /// at the root (path compression), so `x` resolves in one step next
    /// time.
    pub fn find(&mut self, x: E) -> E {
        if !self.parent.contains_key(&x) {
            self.parent.insert(x.clone(), x.clone());
            return x;
        }

        let mut root = x.clone();
        while let Some(next) = self.parent.get(&root) {
            if *next == root {
                break;
            }
            root = next.clone();
        }

        // Rewrite the walked path to point at the root. `insert` returns
        // the previous parent, which is exactly the next node on the walk.
        let mut current = x;
        while current != root {
            let next = self
                .parent
                .insert(current, root.clone())
                .expect("walked elements are always registered");
            current = next;
        }

        root
    }

    /// Merge the group containing `x` with the group containing `y`.
    ///
    /// Attaches the root of smaller rank under the root of larger rank; on
    /// a tie, `y`'s root goes under `x`'s root and the surviving rank is
    /// bumped. Returns `true` if the groups were distinct and are now
    /// joined, `false` if `x` and `y` were already connected.
    pub fn union(&mut self, x: E, y: E) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank.get(&root_x).copied().unwrap_or(0);
        let rank_y = self.rank.get(&root_y).copied().unwrap_or(0);

        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else {
            self.parent.insert(root_y, root_x.clone());
            if rank_x == rank_y {
                self.rank.insert(root_x, rank_x + 1);
            }
        }

        true
    }

    /// Group every seen element under its current root.
    ///
    /// Each element appears in exactly one of the returned membership
    /// sets. Resolving the roots compresses paths as a side effect.
    pub fn get_components(&mut self) -> AHashMap<E, AHashSet<E>> {
        let elements: Vec<E> = self.parent.keys().cloned().collect();

        let mut components: AHashMap<E, AHashSet<E>> = AHashMap::new();
        for element in elements {
            let root = self.find(element.clone());
            components.entry(root).or_default().insert(element);
        }

        components
    }

    /// Like [`get_components`](Self::get_components), but maps each root
    /// to the size of its group.
    pub fn get_component_sizes(&mut self) -> AHashMap<E, usize> {
        self.get_components()
            .into_iter()
            .map(|(root, members)| (root, members.len()))
            .collect()
    }
}

impl<E: Eq + Hash + Clone> Default for UnionFind<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed a union-find from `(x, y)` pairs that are unioned immediately.
impl<E: Eq + Hash + Clone> FromIterator<(E, E)> for UnionFind<E> {
    fn from_iter<I: IntoIterator<Item = (E, E)>>(pairs: I) -> Self {
        let mut uf = Self::new();
        for (x, y) in pairs {
            uf.union(x, y);
        }
        uf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_registers_singleton() {
        let mut uf = UnionFind::new();
        assert_eq!(uf.find(7), 7);
        assert_eq!(uf.len(), 1);
        assert_eq!(uf.get_component_sizes()[&7], 1);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut uf = UnionFind::new();
        uf.union(1, 2);
        uf.union(2, 3);
        let root = uf.find(1);
        assert_eq!(uf.find(root.clone()), root);
        assert_eq!(uf.find(3), root);
    }

    #[test]
    fn test_union_connects_elements() {
        let mut uf = UnionFind::new();
        assert!(uf.union(1, 2));
        assert_eq!(uf.find(1), uf.find(2));
    }

    #[test]
    fn test_union_twice_is_noop() {
        let mut uf = UnionFind::new();
        assert!(uf.union(1, 2));
        assert!(!uf.union(1, 2));
        assert_eq!(uf.get_components().len(), 1);
    }

    #[test]
    fn test_union_with_self() {
        let mut uf = UnionFind::new();
        uf.union(1, 2);
        assert!(!uf.union(1, 1));
        assert_eq!(uf.get_components().len(), 1);
    }

    #[test]
    fn test_two_pairs_and_a_singleton() {
        let mut uf = UnionFind::new();
        assert!(uf.union(1, 2));
        assert!(uf.union(3, 4));
        uf.find(5);

        let mut sizes: Vec<usize> = uf
            .get_component_sizes()
            .into_iter()
            .map(|(_, size)| size)
            .collect();
        sizes.sort();
        assert_eq!(sizes, vec![1, 2, 2]);

        assert_eq!(uf.find(1), uf.find(2));
        assert_ne!(uf.find(1), uf.find(3));
        assert_ne!(uf.find(5), uf.find(1));
    }

    #[test]
    fn test_chained_unions() {
        let mut uf = UnionFind::new();
        uf.union(1, 2);
        uf.union(2, 3);
        uf.union(3, 4);

        assert_eq!(uf.find(1), uf.find(4));

        let components = uf.get_components();
        assert_eq!(components.len(), 1);
        let members = components.values().next().unwrap();
        assert_eq!(members.len(), 4);
    }

    #[test]
    fn test_sizes_sum_to_universe() {
        let mut uf = UnionFind::new();
        uf.union(1, 2);
        uf.union(3, 4);
        uf.union(4, 5);
        uf.find(9);

        let total: usize = uf
            .get_component_sizes()
            .into_iter()
            .map(|(_, size)| size)
            .sum();
        assert_eq!(total, uf.len());
        assert_eq!(total, 6);
    }

    #[test]
    fn test_component_keys_are_roots() {
        let mut uf = UnionFind::new();
        uf.union(1, 2);
        uf.union(3, 4);

        for (root, members) in uf.clone().get_components() {
            assert_eq!(uf.find(root.clone()), root);
            assert!(members.contains(&root));
        }
    }

    #[test]
    fn test_generic_over_string_keys() {
        let mut uf = UnionFind::new();
        uf.union("start", "a");
        uf.union("a", "b");
        uf.union("end", "z");

        assert_eq!(uf.find("start"), uf.find("b"));
        assert_ne!(uf.find("start"), uf.find("end"));
        assert_eq!(uf.get_components().len(), 2);
    }

    #[test]
    fn test_seeded_from_pairs() {
        let mut seeded: UnionFind<u32> = [(1, 2), (3, 4), (2, 3)].into_iter().collect();
        assert_eq!(seeded.find(1), seeded.find(4));
        assert_eq!(seeded.get_component_sizes().len(), 1);
    }
}
