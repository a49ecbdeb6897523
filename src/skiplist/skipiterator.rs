use crate::skiplist::skipnode::{NodeId, SkipNode};
use crate::skiplist::TAIL;

/// Ascending `(year, payload)` pairs, borrowed from an
/// [`EventList`](crate::skiplist::EventList).
pub struct SkipIterator<'a, V> {
    nodes: &'a [SkipNode<V>],
    current: Option<NodeId>,
}

impl<'a, V> SkipIterator<'a, V> {
    pub(crate) fn new(nodes: &'a [SkipNode<V>], current: Option<NodeId>) -> SkipIterator<'a, V> {
        SkipIterator { nodes, current }
    }
}

impl<'a, V> Iterator for SkipIterator<'a, V> {
    type Item = (i32, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current.filter(|id| *id != TAIL)?;
        let node = &self.nodes[id];
        self.current = node.next(0);
        node.data.get_ref().map(|payload| (node.key, payload))
    }
}

// slot ids along a single level, tail excluded
pub struct SkipNodeIterator<'a, V> {
    nodes: &'a [SkipNode<V>],
    current: Option<NodeId>,
    level: usize,
}

impl<'a, V> SkipNodeIterator<'a, V> {
    pub(crate) fn new(nodes: &'a [SkipNode<V>], current: Option<NodeId>, level: usize) -> SkipNodeIterator<'a, V> {
        SkipNodeIterator { nodes, current, level }
    }
}

impl<'a, V> Iterator for SkipNodeIterator<'a, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current.filter(|id| *id != TAIL)?;
        self.current = self.nodes[id].next(self.level);
        Some(id)
    }
}
