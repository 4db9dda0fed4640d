/// Fixed-capacity FIFO ring of `(index, item)` pairs.
///
/// Storage grows on demand up to `capacity` and is then reused in place, so a
/// large capacity over a short stream only costs what the stream holds.
#[derive(Debug)]
pub struct LookbackBuffer<T> {
    slots: Vec<(usize, T)>,
    capacity: usize,
    /// Slot holding the oldest entry once the ring is full.
    head: usize,
}

impl<T> LookbackBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
            head: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append an entry. When the ring is already full the oldest entry is
    /// evicted and handed back.
    pub fn push(&mut self, index: usize, item: T) -> Option<(usize, T)> {
        if self.capacity == 0 {
            return Some((index, item));
        }
        if self.slots.len() < self.capacity {
            self.slots.push((index, item));
            return None;
        }
        let evicted = std::mem::replace(&mut self.slots[self.head], (index, item));
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Consume the ring, yielding entries oldest first.
    pub fn into_ordered(mut self) -> std::vec::IntoIter<(usize, T)> {
        self.slots.rotate_left(self.head);
        self.slots.into_iter()
    }
}
