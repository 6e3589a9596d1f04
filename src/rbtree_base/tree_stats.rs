#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub rotations: usize,
    pub recolors: usize,
    pub root_changes: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self {
            size: 0,
            rotations: 0,
            recolors: 0,
            root_changes: 0,
        }
    }

    /// Rotations per stored payload, zero for an empty tree.
    pub fn rotations_per_insert(&self) -> f64 {
        if self.size == 0 {
            0.0
        } else {
            self.rotations as f64 / self.size as f64
        }
    }
}

#[cfg(test)]
#[test]
fn test_rotations_per_insert() {
    let mut stats = TreeStats::new();
    assert_eq!(stats.rotations_per_insert(), 0.0);
    stats.size = 4;
    stats.rotations = 2;
    assert_eq!(stats.rotations_per_insert(), 0.5);
}
