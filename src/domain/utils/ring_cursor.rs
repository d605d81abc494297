/// Position on a ring of `len` slots.
///
/// Used both to cycle through the temporary layout pool and as the paging
/// cursor. Iterating yields the current position and then moves one slot ahead,
/// wrapping to 0 after the last slot; an empty ring yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingCursor {
    position: usize,
    len: usize,
}

impl RingCursor {
    pub fn new(len: usize) -> Self {
        RingCursor { position: 0, len }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Changes the ring size. A position that no longer fits goes back to 0.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.position >= len {
            self.reset();
        }
    }

    /// Moves one slot ahead and returns the new position.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_empty() {
            self.reset();
            return None;
        }
        self.position = (self.position + 1) % self.len;
        Some(self.position)
    }

    /// Jumps to `position` if it is on the ring.
    pub fn select(&mut self, position: usize) -> bool {
        if position < self.len {
            self.position = position;
            true
        } else {
            false
        }
    }
}

impl Iterator for RingCursor {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let current = self.position;
        self.position = (self.position + 1) % self.len;
        Some(current)
    }
}
