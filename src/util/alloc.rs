use std::cell::Cell;
use std::rc::Rc;

/// Hands out [`Tracked`] values and counts how many of them have been dropped.
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
    issued: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track(&self) -> Tracked {
        let id = self.issued.get();
        self.issued.set(id + 1);
        Tracked {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// A value that reports its drop to the [`DropCounter`] which created it. Clones share the id of
/// the original but are counted separately.
#[derive(Debug)]
pub struct Tracked {
    pub id: usize,
    drops: Rc<Cell<usize>>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked {
            id: self.id,
            drops: Rc::clone(&self.drops),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
