/// Last-write-wins debounce expressed as generations.
///
/// Every `restart` invalidates the previously issued generation; only the
/// newest one settles, and only once.
#[derive(Debug, Clone, Default)]
pub struct Debounce {
    generation: u64,
    pending: Option<u64>,
}

impl Debounce {
    pub fn restart(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        self.generation
    }

    /// True exactly once, for the latest generation.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
