//! Min-ordered event queue for the signal simulator.
//!
//! A 16-ary heap stored as three parallel arrays. Storage grows by doubling
//! and survives `clear`, so one heap serves every simulation run without
//! reallocating.

/// Children per heap node.
pub const ARITY: usize = 16;
const INITIAL_CAPACITY: usize = 32;

/// One scheduled signal arrival.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub time: f32,
    pub node: u32,
    pub value: f32,
}

#[derive(Debug, Clone)]
pub struct EventHeap {
    times: Vec<f32>,
    nodes: Vec<u32>,
    values: Vec<f32>,
}

impl Default for EventHeap {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / ARITY
}

#[inline]
fn first_child(i: usize) -> usize {
    i * ARITY + 1
}

impl EventHeap {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.times.capacity()
    }

    /// Drops every pending event but keeps the allocation.
    pub fn clear(&mut self) {
        self.times.clear();
        self.nodes.clear();
        self.values.clear();
    }

    #[must_use]
    pub fn peek_min(&self) -> Option<Event> {
        self.event_at(0)
    }

    pub fn insert(&mut self, time: f32, node: u32, value: f32) {
        if self.times.len() == self.times.capacity() {
            let extra = self.times.capacity().max(INITIAL_CAPACITY);
            self.times.reserve_exact(extra);
            self.nodes.reserve_exact(extra);
            self.values.reserve_exact(extra);
        }

        // Open a hole at the end and pull parents down until `time` fits.
        let mut i = self.times.len();
        self.times.push(time);
        self.nodes.push(node);
        self.values.push(value);

        while i > 0 {
            let p = parent(i);
            if self.times[p] <= time {
                break;
            }
            self.move_slot(p, i);
            i = p;
        }

        self.times[i] = time;
        self.nodes[i] = node;
        self.values[i] = value;
    }

    pub fn extract_min(&mut self) -> Option<Event> {
        let min = self.event_at(0)?;

        let last = self.times.len() - 1;
        self.times.swap(0, last);
        self.nodes.swap(0, last);
        self.values.swap(0, last);
        self.times.pop();
        self.nodes.pop();
        self.values.pop();

        self.sift_down(0);
        Some(min)
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.times.len();
        loop {
            let start = first_child(i);
            if start >= n {
                return;
            }
            let end = (start + ARITY).min(n);

            let mut smallest = i;
            for c in start..end {
                if self.times[c] < self.times[smallest] {
                    smallest = c;
                }
            }
            if smallest == i {
                return;
            }
            self.swap_slots(i, smallest);
            i = smallest;
        }
    }

    fn event_at(&self, i: usize) -> Option<Event> {
        Some(Event {
            time: *self.times.get(i)?,
            node: self.nodes[i],
            value: self.values[i],
        })
    }

    fn move_slot(&mut self, from: usize, to: usize) {
        self.times[to] = self.times[from];
        self.nodes[to] = self.nodes[from];
        self.values[to] = self.values[from];
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.times.swap(a, b);
        self.nodes.swap(a, b);
        self.values.swap(a, b);
    }
}
