/// Disjoint-set forest over dense slot indices, with union by size and
/// full path compression.
///
/// A slot is a root iff it is its own parent. `sizes` is only meaningful
/// at roots.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    sizes : Vec<usize>,
    parents : Vec<usize>
}

impl Forest {
    pub fn new() -> Forest {
        Forest { sizes: Vec::new(), parents: Vec::new() }
    }

    /// Adds a new singleton group and returns its slot.
    pub fn push(&mut self) -> usize {
        let slot = self.parents.len();
        self.parents.push(slot);
        self.sizes.push(1);
        slot
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Merges the groups of `x` and `y` and returns the surviving root.
    ///
    /// The smaller group is attached under the larger; on a tie `y`'s root
    /// goes under `x`'s.
    pub fn union(&mut self, x: usize, y: usize) -> usize {
        let xroot = self.find(x);
        let yroot = self.find(y);
        if xroot == yroot {
            return xroot
        }
        let (root, child) = if self.sizes[xroot] < self.sizes[yroot] {
            (yroot, xroot)
        } else {
            (xroot, yroot)
        };
        self.parents[child] = root;
        self.sizes[root] += self.sizes[child];
        log::debug!("union: root {} absorbed root {} (size {})",
                    root, child, self.sizes[root]);
        root
    }

    /// Root of `x`. Every slot on the way is repointed straight at the
    /// root.
    pub fn find(&mut self, x: usize) -> usize {
        let root = self.find_pure(x);
        let mut cur = x;
        let mut moved = 0;
        while self.parents[cur] != root {
            let next = self.parents[cur];
            self.parents[cur] = root;
            cur = next;
            moved += 1;
        }
        if moved > 0 {
            log::trace!("find: compressed {} slots onto root {}", moved, root);
        }
        root
    }

    /// Root of `x` without compressing the path.
    pub fn find_pure(&self, x: usize) -> usize {
        let mut root = x;
        while self.parents[root] != root {
            root = self.parents[root];
        }
        root
    }

    pub fn parent(&self, x: usize) -> usize {
        self.parents[x]
    }

    pub fn is_root(&self, x: usize) -> bool {
        self.parents[x] == x
    }

    /// Number of slots in the group containing `x`.
    pub fn group_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.sizes[root]
    }

    pub fn group_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_root(i)).count()
    }

    /// Sum of the sizes recorded at every root.
    pub fn root_size_total(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_root(i)).map(|i| self.sizes[i]).sum()
    }
}
