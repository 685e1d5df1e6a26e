//! Generational slot arena backing environments and cells.
//!
//! Ids carry the generation of the slot they were issued for. Sweeping a
//! slot bumps its generation, so ids that outlive a collection are detected
//! instead of silently aliasing whatever reuses the slot.

/// Index plus generation of an arena slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct SlotId {
    index: u32,
    generation: u32,
}

impl SlotId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.index as usize
    }
}

struct Slot<T> {
    value: Option<T>,
    generation: u32,
}

pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    live: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> SlotId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return SlotId {
                index,
                generation: slot.generation,
            };
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "slot count is bounded far below u32::MAX by memory"
        )]
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            value: Some(value),
            generation: 0,
        });
        SlotId {
            index,
            generation: 0,
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: SlotId) -> Option<&T> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Number of slots ever allocated, occupied or not. Sizes mark bitmaps.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Free every occupied slot whose mark is unset. Returns the number freed.
    pub(crate) fn sweep(&mut self, marks: &[bool]) -> usize {
        let mut freed = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.is_none() || marks.get(index).copied().unwrap_or(false) {
                continue;
            }
            slot.value = None;
            slot.generation = slot.generation.wrapping_add(1);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "index came from a u32 slot id"
            )]
            let index = index as u32;
            self.free.push(index);
            freed += 1;
        }
        self.live -= freed;
        freed
    }
}
