/// Размер порции по умолчанию
pub const DEFAULT_BATCH: usize = 12;

/// Билет догрузки. Становится недействительным после `reset()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowTicket {
    generation: u64,
    available: usize,
}

/// Окно видимых элементов отфильтрованного списка.
///
/// `reveal_count` не убывает, пока не вызван `reset()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealWindow {
    batch: usize,
    reveal_count: usize,
    loading_more: bool,
    generation: u64,
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH)
    }
}

impl RevealWindow {
    pub fn new(batch: usize) -> Self {
        let batch = batch.max(1);
        Self {
            batch,
            reveal_count: batch,
            loading_more: false,
            generation: 0,
        }
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn has_more(&self, len: usize) -> bool {
        self.reveal_count < len
    }

    pub fn visible_slice<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        &list[..self.reveal_count.min(list.len())]
    }

    /// Начало догрузки. `None`, если показывать больше нечего
    /// или догрузка уже идёт.
    pub fn begin_grow(&mut self, available: usize) -> Option<GrowTicket> {
        if self.loading_more || !self.has_more(available) {
            return None;
        }
        self.loading_more = true;
        Some(GrowTicket {
            generation: self.generation,
            available,
        })
    }

    /// Завершение догрузки после имитированной задержки.
    /// Рост ограничен длиной списка на момент начала, но не меньше порции.
    pub fn complete_grow(&mut self, ticket: GrowTicket) -> bool {
        if ticket.generation != self.generation || !self.loading_more {
            return false;
        }
        let cap = ticket.available.max(self.batch);
        self.reveal_count = (self.reveal_count + self.batch).min(cap).max(self.reveal_count);
        self.loading_more = false;
        true
    }

    /// Сброс к первой порции; незавершённая догрузка отбрасывается
    pub fn reset(&mut self) {
        self.reveal_count = self.batch;
        self.loading_more = false;
        self.generation += 1;
    }
}
