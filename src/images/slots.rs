use crate::error::GlimpseError;

/// Load status of one image slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    /// Requested, not finished.
    Pending,
    /// Loaded and ready to bind.
    Ready(T),
    /// The load failed; the slot stays empty for the rest of the session.
    Failed,
}

/// Fixed-size arena with one slot per configured image.
///
/// Indices are assigned when loads are requested, never by completion
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSlots<T> {
    slots: Vec<Slot<T>>,
}

impl<T> TextureSlots<T> {
    /// `len` pending slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| Slot::Pending).collect(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store a loaded value in `index`. Returns `false` (and drops the
    /// value) when the index is out of range.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            log::warn!(
                "image slot {index} out of range ({} slots)",
                self.slots.len()
            );
            return false;
        };
        *slot = Slot::Ready(value);
        true
    }

    /// Record a load result. Failures are logged and leave the slot empty;
    /// they never propagate.
    pub fn fill(&mut self, index: usize, result: Result<T, GlimpseError>) -> bool {
        match result {
            Ok(value) => self.insert(index, value),
            Err(e) => {
                log::warn!("image slot {index} left empty: {e}");
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = Slot::Failed;
                }
                false
            }
        }
    }

    /// The loaded value in `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index) {
            Some(Slot::Ready(value)) => Some(value),
            _ => None,
        }
    }

    /// The value to draw for the scene's active texture. Pending, failed
    /// and out-of-range slots all draw nothing.
    pub fn active(&self, texture: Option<usize>) -> Option<&T> {
        texture.and_then(|index| self.get(index))
    }

    /// Number of ready slots.
    pub fn ready_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Ready(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_order_completion_keeps_identity() {
        let mut slots = TextureSlots::new(3);
        assert!(slots.insert(2, "third"));
        assert!(slots.insert(0, "first"));
        assert_eq!(slots.get(0), Some(&"first"));
        assert_eq!(slots.get(1), None);
        assert_eq!(slots.get(2), Some(&"third"));
        assert_eq!(slots.ready_count(), 2);
    }

    #[test]
    fn failures_leave_a_gap() {
        let mut slots = TextureSlots::new(2);
        let err = GlimpseError::ImageDecode {
            index: 0,
            message: "truncated".to_owned(),
        };
        assert!(!slots.fill(0, Err(err)));
        assert!(slots.fill(1, Ok(7)));
        assert_eq!(slots.slots[0], Slot::Failed);
        assert_eq!(slots.get(0), None);
        assert_eq!(slots.get(1), Some(&7));
    }

    #[test]
    fn out_of_range_insert_is_rejected() {
        let mut slots = TextureSlots::new(1);
        assert!(!slots.insert(1, 10));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots.get(1), None);
    }

    #[test]
    fn empty_arena() {
        let slots: TextureSlots<u8> = TextureSlots::new(0);
        assert!(slots.is_empty());
        assert_eq!(slots.active(Some(0)), None);
    }

    #[test]
    fn only_ready_slots_are_drawn() {
        let mut slots = TextureSlots::new(3);
        assert!(slots.insert(0, 'a'));
        let err = GlimpseError::ImageDecode {
            index: 1,
            message: "bad header".to_owned(),
        };
        assert!(!slots.fill(1, Err(err)));

        assert_eq!(slots.active(Some(0)), Some(&'a'));
        assert_eq!(slots.active(Some(1)), None, "failed");
        assert_eq!(slots.active(Some(2)), None, "pending");
        assert_eq!(slots.active(Some(3)), None, "out of range");
        assert_eq!(slots.active(None), None);
    }
}
