use std::cmp::max;
use std::fmt;

use crate::entry::Dated;
use crate::errors::{Error, Result};
use crate::options::EventListOptions;
use crate::skiplist::coinflipper::{random_height, CoinFlipper, CoinFlipperRand, CoinFlipperSeeded};
use crate::skiplist::skipiterator::{SkipIterator, SkipNodeIterator};
use crate::skiplist::skipnode::{NodeId, SkipNode};
use crate::skiplist::skipvalue::SkipData;
use crate::util::no_fail;

pub mod coinflipper;
mod skipnode;
mod skipvalue;
pub mod skipiterator;

// the two sentinels always occupy the first two arena slots
const HEAD: NodeId = 0;
const TAIL: NodeId = 1;
const HEAD_KEY: i32 = i32::MIN;
const TAIL_KEY: i32 = i32::MAX;

/// Ordered index from a year to any number of payloads, kept as a skip list.
///
/// Nodes live in one arena and link to each other by slot index. Slots of
/// removed nodes are put on a free list and reused by later inserts.
///
/// Payloads sharing a year are kept in insertion order.
pub struct EventList<V> {
    nodes: Vec<SkipNode<V>>,
    free: Vec<NodeId>,
    size: usize,
    // capacity of the sentinel pillars, never shrinks
    max_level: usize,
    // highest level a stored node currently reaches
    highest_used: usize,
    coin_flipper: Box<dyn CoinFlipper>,
}

impl<V> Default for EventList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> EventList<V> {
    pub fn new() -> Self {
        return Self::build(1, Box::new(CoinFlipperRand {}));
    }

    pub fn with_options(opts: EventListOptions) -> Result<Self> {
        opts.validate()?;
        let coin_flipper: Box<dyn CoinFlipper> = match opts.seed {
            Some(seed) => Box::new(CoinFlipperSeeded::new(seed)),
            None => Box::new(CoinFlipperRand {}),
        };
        return Ok(Self::build(opts.initial_max_level, coin_flipper));
    }

    /// `opts.seed` is ignored, the flipper is the only source of heights.
    pub fn with_coin_flipper(opts: EventListOptions, coin_flipper: Box<dyn CoinFlipper>) -> Result<Self> {
        opts.validate()?;
        return Ok(Self::build(opts.initial_max_level, coin_flipper));
    }

    fn build(max_level: usize, coin_flipper: Box<dyn CoinFlipper>) -> Self {
        let head = SkipNode {
            key: HEAD_KEY,
            data: SkipData::Dummy(),
            pillar: vec![Some(TAIL); max_level],
        };
        let tail = SkipNode::new(TAIL_KEY, SkipData::Dummy(), max_level);

        return EventList {
            nodes: vec![head, tail],
            free: Vec::new(),
            size: 0,
            max_level,
            highest_used: 0,
            coin_flipper,
        };
    }

    pub fn len(&self) -> usize {
        return self.size;
    }

    pub fn is_empty(&self) -> bool {
        return self.size == 0;
    }

    pub fn max_level(&self) -> usize {
        return self.max_level;
    }

    pub fn highest_used_level(&self) -> usize {
        return self.highest_used;
    }

    pub fn iter(&self) -> SkipIterator<'_, V> {
        return SkipIterator::new(&self.nodes, self.nodes[HEAD].next(0));
    }

    fn level_iter(&self, from: Option<NodeId>, level: usize) -> SkipNodeIterator<'_, V> {
        return SkipNodeIterator::new(&self.nodes, from, level);
    }

    /// Keys present at `level`, in chain order. Empty above the capacity.
    pub fn level_keys(&self, level: usize) -> Vec<i32> {
        return self.level_iter(self.nodes[HEAD].next(level), level)
            .map(|id| self.nodes[id].key)
            .collect();
    }

    fn check_year(year: i32) -> Result<()> {
        if year == HEAD_KEY || year == TAIL_KEY {
            warn!("rejected year {}, it is reserved for a sentinel", year);
            return Err(Error::DomainBounds(year));
        }
        return Ok(());
    }

    // walks `level` from `from` while the successor satisfies `pred`.
    // never steps onto the tail.
    fn advance_while<F>(&self, from: NodeId, level: usize, pred: F) -> NodeId
    where
        F: Fn(i32) -> bool,
    {
        let mut cur = from;
        while let Some(next) = self.nodes[cur].next(level) {
            if next == TAIL || !pred(self.nodes[next].key) {
                break;
            }
            cur = next;
        }
        return cur;
    }

    fn descend<F>(&self, pred: F) -> NodeId
    where
        F: Fn(i32) -> bool,
    {
        let mut cur = HEAD;
        for level in (0..=self.highest_used).rev() {
            cur = self.advance_while(cur, level, &pred);
        }
        return cur;
    }

    //  1 -> 2 -> 3 -> 3 -> 4, target = 3 gives the node holding 2
    fn search_prev(&self, target: i32) -> NodeId {
        return self.descend(|key| key < target);
    }

    //  1 -> 2 -> 3 -> 3 -> 4, target = 3 gives the second 3
    fn search_floor(&self, target: i32) -> NodeId {
        return self.descend(|key| key <= target);
    }

    fn grow(&mut self, height: usize) {
        let old = self.max_level;
        while height > self.max_level {
            self.max_level *= 2;
        }
        self.nodes[HEAD].pillar.resize(self.max_level, Some(TAIL));
        self.nodes[TAIL].pillar.resize(self.max_level, None);
        debug!("sentinel pillars grown from {} to {} levels", old, self.max_level);
    }

    fn allocate(&mut self, key: i32, payload: V, height: usize) -> NodeId {
        let node = SkipNode::new(key, SkipData::Owned(payload), height);
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                return id;
            }
            None => {
                self.nodes.push(node);
                return self.nodes.len() - 1;
            }
        }
    }

    // caller must have unlinked the node at every level already
    fn release(&mut self, id: NodeId) -> Option<V> {
        let node = &mut self.nodes[id];
        node.nullify_pointers();
        let payload = node.data.take();
        self.free.push(id);
        return payload;
    }

    pub fn insert(&mut self, year: i32, payload: V) -> Result<()> {
        Self::check_year(year)?;

        let height = random_height(self.coin_flipper.as_mut());
        if height > self.max_level {
            self.grow(height);
        }
        self.highest_used = max(self.highest_used, height - 1);

        let id = self.allocate(year, payload, height);

        // `<=` puts the new node after every equal key already there
        let mut prev = HEAD;
        for level in (0..=self.highest_used).rev() {
            prev = self.advance_while(prev, level, |key| key <= year);
            if level < height {
                let next = self.nodes[prev].pillar[level];
                self.nodes[id].pillar[level] = next;
                self.nodes[prev].pillar[level] = Some(id);
            }
        }

        self.size += 1;
        trace!("inserted year {} with height {} at slot {}", year, height, id);
        return Ok(());
    }

    pub fn add(&mut self, record: V) -> Result<()>
    where
        V: Dated,
    {
        return self.insert(record.year(), record);
    }

    /// Removes every payload filed under `year`, returning how many there were.
    pub fn remove(&mut self, year: i32) -> usize {
        return self.remove_return(year).len();
    }

    /// Removes every payload filed under `year` and hands them back in
    /// insertion order. Absent years leave the list untouched.
    pub fn remove_return(&mut self, year: i32) -> Vec<V> {
        if year == HEAD_KEY || year == TAIL_KEY {
            return Vec::new();
        }

        let mut matched = Vec::new();
        let mut prev = HEAD;
        for level in (0..=self.highest_used).rev() {
            prev = self.advance_while(prev, level, |key| key < year);

            // equal keys are contiguous, cut the whole run out at once
            let mut end = self.nodes[prev].pillar[level];
            while let Some(id) = end {
                if id == TAIL || self.nodes[id].key > year {
                    break;
                }
                if level == 0 {
                    matched.push(id);
                }
                end = self.nodes[id].pillar[level];
            }
            self.nodes[prev].pillar[level] = end;
        }

        // level 0 went last, nothing points at the matched nodes anymore
        let removed: Vec<V> = matched
            .into_iter()
            .filter_map(|id| self.release(id))
            .collect();
        self.size -= removed.len();

        if !removed.is_empty() {
            trace!("removed {} entries for year {}", removed.len(), year);
            self.shrink_highest_used();
        }
        return removed;
    }

    fn shrink_highest_used(&mut self) {
        let before = self.highest_used;
        while self.highest_used > 0 && self.nodes[HEAD].pillar[self.highest_used] == Some(TAIL) {
            self.highest_used -= 1;
        }
        if before != self.highest_used {
            debug!("highest used level lowered from {} to {}", before, self.highest_used);
        }
    }

    /// Every payload filed under the greatest year `<= year`, in insertion order.
    /// Empty when all stored years are greater.
    pub fn find_floor(&self, year: i32) -> Vec<&V> {
        let floor = self.search_floor(year);
        if self.nodes[floor].data.is_dummy() {
            return Vec::new();
        }

        // search_floor ends on the last duplicate, rewind to the first one
        let key = self.nodes[floor].key;
        let first = self.nodes[self.search_prev(key)].next(0);
        return self.collect_from(first, |k| k == key);
    }

    /// Payloads with a year in `first..=last`, ascending.
    pub fn find_range(&self, first: i32, last: i32) -> Result<Vec<&V>> {
        if first > last {
            warn!("rejected range {}..={}", first, last);
            return Err(Error::InvalidRange { first, last });
        }

        let start = self.nodes[self.search_prev(first)].next(0);
        return Ok(self.collect_from(start, |key| key <= last));
    }

    fn collect_from<F>(&self, start: Option<NodeId>, pred: F) -> Vec<&V>
    where
        F: Fn(i32) -> bool,
    {
        return self.level_iter(start, 0)
            .take_while(|id| pred(self.nodes[*id].key))
            .filter_map(|id| self.nodes[id].data.get_ref())
            .collect();
    }

    /// Releases every stored node. Capacity of the sentinels is kept.
    pub fn clear(&mut self) {
        self.nodes.truncate(2);
        self.free.clear();
        self.nodes[HEAD].pillar.fill(Some(TAIL));
        self.nodes[TAIL].pillar.fill(None);
        self.size = 0;
        self.highest_used = 0;
    }

    /// Walks every level and verifies the structural invariants.
    pub fn check_state(&self) -> Result<()> {
        let illegal = |msg: String| Err(Error::IllegalState(msg));

        if self.nodes[HEAD].height() != self.max_level || self.nodes[TAIL].height() != self.max_level {
            return illegal(format!("sentinel pillars differ from capacity {}", self.max_level));
        }
        if self.highest_used >= self.max_level {
            return illegal(format!("highest used level {} exceeds capacity {}", self.highest_used, self.max_level));
        }
        if self.nodes[TAIL].pillar.iter().any(|link| link.is_some()) {
            return illegal("tail has a successor".to_string());
        }

        let stored: Vec<NodeId> = (2..self.nodes.len())
            .filter(|id| !self.nodes[*id].data.is_vacant())
            .collect();
        if stored.len() != self.size {
            return illegal(format!("{} live slots, size is {}", stored.len(), self.size));
        }
        if self.free.len() + self.size + 2 != self.nodes.len() {
            return illegal(format!("{} free and {} live slots in an arena of {}", self.free.len(), self.size, self.nodes.len()));
        }
        if let Some(id) = self.free.iter().find(|id| **id < 2 || !self.nodes[**id].data.is_vacant()) {
            return illegal(format!("free slot {} is still in use", id));
        }

        for level in 0..self.max_level {
            let mut last_key = HEAD_KEY;
            let mut cur = HEAD;
            let mut steps = 0;
            while cur != TAIL {
                let next = match self.nodes[cur].next(level) {
                    Some(next) => next,
                    None => return illegal(format!("chain at level {} is cut after slot {}", level, cur)),
                };
                if next == TAIL {
                    break;
                }
                let node = &self.nodes[next];
                if node.data.get_ref().is_none() {
                    return illegal(format!("slot {} linked at level {} holds no payload", next, level));
                }
                if node.height() <= level {
                    return illegal(format!("slot {} of height {} linked at level {}", next, node.height(), level));
                }
                if node.key < last_key {
                    return illegal(format!("level {} is out of order at year {}", level, node.key));
                }
                steps += 1;
                if steps > self.size {
                    return illegal(format!("level {} does not reach the tail", level));
                }
                last_key = node.key;
                cur = next;
            }

            let expected = stored.iter().filter(|id| self.nodes[**id].height() > level).count();
            if steps != expected {
                return illegal(format!("level {} links {} nodes, {} towers reach it", level, steps, expected));
            }
            if level > self.highest_used && steps > 0 {
                return illegal(format!("level {} is populated above highest used {}", level, self.highest_used));
            }
        }

        for id in stored {
            let node = &self.nodes[id];
            if node.height() == 0 || node.pillar.iter().any(|link| link.is_none()) {
                return illegal(format!("tower of slot {} has holes", id));
            }
        }

        return Ok(());
    }
}

impl<V: Dated> Extend<V> for EventList<V> {
    // records in the sentinel domain are logged and skipped
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for record in iter {
            no_fail(self.add(record), "extend event list");
        }
    }
}

impl<'a, V> IntoIterator for &'a EventList<V> {
    type Item = (i32, &'a V);
    type IntoIter = SkipIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<V: fmt::Debug> fmt::Debug for EventList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_map().entries(self.iter()).finish();
    }
}
