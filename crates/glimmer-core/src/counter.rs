/// The shared counter the scope lessons mutate. Owned by a context object and
/// passed around explicitly; it only ever goes up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    /// Stores and returns `value + amount`.
    pub fn bump(&mut self, amount: u64) -> u64 {
        self.value = self.value.saturating_add(amount);
        self.value
    }
}
