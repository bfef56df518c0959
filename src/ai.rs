// Hunt/search targeting for the automated opponent.
// Learns only from its own attack results; never looks at the enemy board.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::DEFAULT_BOARD_SIZE;

/// Stateful target picker.
///
/// In search mode it fires at a shuffled sequence of untried cells. A hit
/// switches it to hunt mode: the cardinal neighbours of every hit are stacked
/// and fired at first, so follow-up hits extend the stack along the ship's
/// axis. A destroyed ship clears the stack and returns to search mode.
#[derive(Clone, Debug)]
pub struct HuntTargeting {
    size: usize,
    /// Untried cells in random order, consumed from the back.
    sequence: Vec<(usize, usize)>,
    /// `fired[y * size + x]` is set once the cell has been returned.
    fired: Vec<bool>,
    /// LIFO stack of neighbours of confirmed hits.
    priority: Vec<(usize, usize)>,
    hunting: bool,
    last_hit: Option<(usize, usize)>,
}

impl HuntTargeting {
    /// Targeting for the default 10×10 board.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE, rng)
    }

    pub fn with_size<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut targeting = HuntTargeting {
            size,
            sequence: Vec::with_capacity(size * size),
            fired: Vec::new(),
            priority: Vec::new(),
            hunting: false,
            last_hit: None,
        };
        targeting.reset(rng);
        targeting
    }

    /// Forget everything: all cells untried and reshuffled, search mode.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let size = self.size;
        self.sequence.clear();
        self.sequence
            .extend((0..size).flat_map(|y| (0..size).map(move |x| (x, y))));
        self.sequence.shuffle(rng);
        self.fired.clear();
        self.fired.resize(size * size, false);
        self.priority.clear();
        self.hunting = false;
        self.last_hit = None;
    }

    fn is_untried(&self, (x, y): (usize, usize)) -> bool {
        x < self.size && y < self.size && !self.fired[y * self.size + x]
    }

    /// Next coordinate to fire at. Each cell is returned at most once;
    /// `None` means the whole board has been tried.
    pub fn next_target(&mut self) -> Option<(usize, usize)> {
        while let Some(target) = self.priority.pop() {
            if self.is_untried(target) {
                return Some(self.take(target));
            }
        }
        while let Some(target) = self.sequence.pop() {
            if self.is_untried(target) {
                return Some(self.take(target));
            }
        }
        log::warn!("targeting exhausted all {} cells", self.size * self.size);
        None
    }

    fn take(&mut self, (x, y): (usize, usize)) -> (usize, usize) {
        self.fired[y * self.size + x] = true;
        (x, y)
    }

    /// Record a hit that did not destroy the ship: push its untried
    /// cardinal neighbours onto the stack. Neighbours already queued keep
    /// their place. Coordinates off the board are ignored.
    pub fn on_hit(&mut self, x: usize, y: usize) {
        if x >= self.size || y >= self.size {
            log::warn!("hit reported off the board at ({}, {})", x, y);
            return;
        }
        if !self.hunting {
            log::debug!("hit at ({}, {}), entering hunt mode", x, y);
        }
        self.hunting = true;
        self.last_hit = Some((x, y));

        let neighbours = [
            x.checked_sub(1).map(|nx| (nx, y)),
            Some((x + 1, y)),
            y.checked_sub(1).map(|ny| (x, ny)),
            Some((x, y + 1)),
        ];
        for n in neighbours.into_iter().flatten() {
            if self.is_untried(n) && !self.priority.contains(&n) {
                self.priority.push(n);
            }
        }
    }

    /// Record a destroyed ship: drop every queued neighbour and go back to
    /// searching.
    pub fn on_destroyed(&mut self) {
        log::debug!(
            "ship destroyed, discarding {} queued target(s)",
            self.priority.len()
        );
        self.priority.clear();
        self.hunting = false;
        self.last_hit = None;
    }

    pub fn is_hunting(&self) -> bool {
        self.hunting
    }

    pub fn last_hit(&self) -> Option<(usize, usize)> {
        self.last_hit
    }

    /// Queued hunt targets; the last element is fired next.
    pub fn queued(&self) -> &[(usize, usize)] {
        &self.priority
    }

    /// Number of cells not yet returned by `next_target`.
    pub fn remaining(&self) -> usize {
        self.fired.iter().filter(|&&f| !f).count()
    }

    pub fn size(&self) -> usize {
        self.size
    }
}
