//! Working track: the real items flanked by boundary clones so the carousel
//! can slide past either end and be re-seated without a visible jump.

/// One rendered position on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Display index of the item this slot shows; clones copy it from their source.
    pub display_index: usize,
    pub clone: bool,
}

impl Slot {
    const fn real(display_index: usize) -> Self {
        Self {
            display_index,
            clone: false,
        }
    }

    const fn cloned(display_index: usize) -> Self {
        Self {
            display_index,
            clone: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingTrack {
    slots: Vec<Slot>,
    visible: usize,
}

impl WorkingTrack {
    pub fn new(item_count: usize, visible: usize) -> Self {
        let mut track = Self::default();
        track.rebuild(item_count, visible);
        track
    }

    /// Discard all clones and lay out `visible` tail clones, the real items,
    /// then `visible` head clones. Rebuilding with unchanged inputs yields
    /// an identical track.
    ///
    /// When `visible` exceeds `item_count` the clone ranges wrap around the
    /// sequence, so the track is always `item_count + 2 * visible` long.
    pub fn rebuild(&mut self, item_count: usize, visible: usize) {
        self.slots.retain(|slot| !slot.clone);
        self.visible = visible;
        if item_count == 0 {
            self.slots.clear();
            return;
        }
        if self.slots.len() != item_count {
            self.slots = (0..item_count).map(Slot::real).collect();
        }

        let n = item_count as i64;
        let v = visible as i64;
        let prefix = (0..v).map(|k| Slot::cloned((k - v).rem_euclid(n) as usize));
        let suffix = (0..visible).map(|k| Slot::cloned(k % item_count));

        let mut slots = Vec::with_capacity(item_count + 2 * visible);
        slots.extend(prefix);
        slots.append(&mut self.slots);
        slots.extend(suffix);
        self.slots = slots;
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Width of every slot as a percentage of the viewport.
    #[must_use]
    pub fn slot_width_pct(&self) -> f64 {
        slot_width_pct(self.visible)
    }
}

#[must_use]
pub fn slot_width_pct(visible: usize) -> f64 {
    100.0 / visible.max(1) as f64
}
