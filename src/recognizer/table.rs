use std::collections::HashSet;

/// Square table of variable sets, where cell `(i, j)` holds the variables that
/// derive the input from offset `i` to offset `j` inclusive. Only cells with
/// `i <= j` are ever filled.
pub struct MembershipTable<'g> {
    size: usize,
    cells: Vec<HashSet<&'g str>>,
}

impl<'g> MembershipTable<'g> {
    pub fn new(size: usize) -> Self {
        MembershipTable {
            size,
            cells: vec![HashSet::new(); size * size],
        }
    }

    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.size && j < self.size);
        i * self.size + j
    }

    pub fn contains(&self, i: usize, j: usize, variable: &str) -> bool {
        self.cells[self.index(i, j)].contains(variable)
    }

    // Returns whether the variable was new to the cell
    pub fn insert(&mut self, i: usize, j: usize, variable: &'g str) -> bool {
        let index = self.index(i, j);
        self.cells[index].insert(variable)
    }
}
