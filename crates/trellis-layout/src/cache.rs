//! Per-widget size request cache.
//!
//! During one measurement and allocation cycle a widget is usually asked for
//! its size at most twice per orientation: once unconstrained, and once for
//! the size it is about to be allocated in the other orientation. A third
//! request occasionally happens when a container probes natural sizes. The
//! cache keeps exactly [`N_CACHED_SIZES`] results per orientation so those
//! repeated queries don't re-run the (recursive) measurement hooks.
//!
//! Slots are replaced in the order they were assigned: the slot carrying the
//! lowest generation goes first. Reading a slot does not refresh it.

use trellis_core::Orientation;

/// Number of results retained per orientation.
pub const N_CACHED_SIZES: usize = 3;

/// One cached measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesiredSize {
    /// The contextual size this was measured for; `None` for unconstrained.
    pub for_size: Option<i32>,
    /// Minimum size.
    pub minimum_size: i32,
    /// Natural size.
    pub natural_size: i32,
    /// Generation stamp. `0` marks an empty slot.
    pub age: u32,
}

impl DesiredSize {
    /// Check if the slot has never been filled since the last clear.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.age == 0
    }
}

/// Outcome of a cache scan: a hit, or the slot to overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup {
    /// Slot index holding a result for the requested size.
    Hit(usize),
    /// Slot index to evict for a fresh result.
    Miss(usize),
}

/// Cached desired sizes for both orientations of a single widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeCache {
    desired_widths: [DesiredSize; N_CACHED_SIZES],
    desired_heights: [DesiredSize; N_CACHED_SIZES],
    cached_width_age: u32,
    cached_height_age: u32,
}

impl SizeCache {
    /// Create an empty cache. Both generation counters start at 1.
    pub fn new() -> Self {
        Self {
            desired_widths: [DesiredSize::default(); N_CACHED_SIZES],
            desired_heights: [DesiredSize::default(); N_CACHED_SIZES],
            cached_width_age: 1,
            cached_height_age: 1,
        }
    }

    /// The slots for `orientation`.
    #[inline]
    pub fn sizes(&self, orientation: Orientation) -> &[DesiredSize; N_CACHED_SIZES] {
        match orientation {
            Orientation::Horizontal => &self.desired_widths,
            Orientation::Vertical => &self.desired_heights,
        }
    }

    /// The generation the next stored result in `orientation` will receive.
    #[inline]
    pub fn generation(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.cached_width_age,
            Orientation::Vertical => self.cached_height_age,
        }
    }

    /// Drop every result for `orientation` and restart its generation at 1.
    ///
    /// The other orientation is untouched.
    pub fn clear(&mut self, orientation: Orientation) {
        let (slots, age) = self.parts_mut(orientation);
        *slots = [DesiredSize::default(); N_CACHED_SIZES];
        *age = 1;
    }

    /// Scan `orientation` for a result measured for `for_size`.
    ///
    /// On a miss, the returned slot is the one with the lowest age; empty
    /// slots (age 0) therefore fill up first, and ties go to the lowest index.
    pub fn lookup(&self, orientation: Orientation, for_size: Option<i32>) -> CacheLookup {
        let slots = self.sizes(orientation);
        let mut candidate = 0;

        for (index, slot) in slots.iter().enumerate() {
            if !slot.is_empty() && slot.for_size == for_size {
                return CacheLookup::Hit(index);
            }
            if slot.age < slots[candidate].age {
                candidate = index;
            }
        }

        CacheLookup::Miss(candidate)
    }

    /// Overwrite slot `index` and stamp it with the next generation.
    ///
    /// The generation saturates instead of wrapping back to the empty marker.
    pub fn store(
        &mut self,
        orientation: Orientation,
        index: usize,
        for_size: Option<i32>,
        minimum_size: i32,
        natural_size: i32,
    ) -> &mut DesiredSize {
        let (slots, age) = self.parts_mut(orientation);
        let stamp = *age;
        *age = age.saturating_add(1);

        let slot = &mut slots[index];
        *slot = DesiredSize {
            for_size,
            minimum_size,
            natural_size,
            age: stamp,
        };
        slot
    }

    /// A populated slot by index.
    #[inline]
    pub fn slot(&self, orientation: Orientation, index: usize) -> &DesiredSize {
        &self.sizes(orientation)[index]
    }

    fn parts_mut(
        &mut self,
        orientation: Orientation,
    ) -> (&mut [DesiredSize; N_CACHED_SIZES], &mut u32) {
        match orientation {
            Orientation::Horizontal => (&mut self.desired_widths, &mut self.cached_width_age),
            Orientation::Vertical => (&mut self.desired_heights, &mut self.cached_height_age),
        }
    }
}

impl Default for SizeCache {
    fn default() -> Self {
        Self::new()
    }
}
