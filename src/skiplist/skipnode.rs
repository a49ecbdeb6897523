use crate::skiplist::skipvalue::SkipData;

/// Slot index into the list's node arena.
pub type NodeId = usize;

pub struct SkipNode<T> {
    pub key: i32,
    pub data: SkipData<T>,
    // pillar[level] is the successor at that level. None only past the tail.
    pub pillar: Vec<Option<NodeId>>,
}

impl<T> SkipNode<T> {
    pub fn new(key: i32, data: SkipData<T>, height: usize) -> Self {
        SkipNode {
            key,
            data,
            pillar: vec![None; height],
        }
    }

    pub fn height(&self) -> usize {
        self.pillar.len()
    }

    pub fn next(&self, level: usize) -> Option<NodeId> {
        self.pillar.get(level).copied().flatten()
    }

    pub fn nullify_pointers(&mut self) {
        self.pillar.clear();
    }
}
