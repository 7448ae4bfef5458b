use std::collections::HashMap;

/// Occurrence counts of distinct values, remembering first-seen order.
///
/// `index` maps a value to its slot in `slots`; slots are appended the first
/// time a value shows up, so slot order is first-appearance order.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    slots: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for value in values {
            table.add(value.as_ref());
        }
        table
    }

    pub fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&slot) => self.slots[slot].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.slots.len());
                self.slots.push((value.to_string(), 1));
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn count(&self, value: &str) -> u64 {
        self.index
            .get(value)
            .map(|&slot| self.slots[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct values seen.
    pub fn distinct(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The `n` most frequent values, highest count first.
    ///
    /// Equal counts keep first-appearance order (the sort is stable).
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .slots
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
            .collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
