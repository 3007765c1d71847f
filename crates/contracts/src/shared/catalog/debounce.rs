/// Билет отложенного обновления. Устаревает при следующем `push`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    pub seq: u64,
    pub deadline: u64,
}

#[derive(Debug, Clone, PartialEq)]
enum DebounceState<T> {
    Settled,
    Pending { raw: T, seq: u64, deadline: u64 },
}

/// Debounce as an explicit state machine.
///
/// The settled value only follows the latest input after it has been stable
/// for `delay_ms`. Time is passed in by the caller (milliseconds), so the
/// machine can be driven by a browser timer (`fire`) or by polling (`poll`).
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    settled: T,
    latest: T,
    state: DebounceState<T>,
    next_seq: u64,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            settled: initial.clone(),
            latest: initial,
            state: DebounceState::Settled,
            next_seq: 0,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Новое входное значение: перезапускает таймер, предыдущий билет устаревает
    pub fn push(&mut self, value: T, now_ms: u64) -> DebounceTicket {
        self.next_seq += 1;
        let ticket = DebounceTicket {
            seq: self.next_seq,
            deadline: now_ms + self.delay_ms,
        };
        self.latest = value.clone();
        self.state = DebounceState::Pending {
            raw: value,
            seq: ticket.seq,
            deadline: ticket.deadline,
        };
        ticket
    }

    /// Фиксирует ожидающее значение, если срок наступил
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match &self.state {
            DebounceState::Pending { deadline, .. } if now_ms >= *deadline => self.commit(),
            _ => false,
        }
    }

    /// Срабатывание таймера. Устаревший билет игнорируется.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        match &self.state {
            DebounceState::Pending { seq, .. } if *seq == ticket.seq => self.commit(),
            _ => false,
        }
    }

    /// Отмена при размонтировании: ничего не фиксируется
    pub fn cancel(&mut self) {
        self.state = DebounceState::Settled;
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn latest(&self) -> &T {
        &self.latest
    }

    /// Последний ввод ещё не стал устоявшимся значением
    pub fn is_pending(&self) -> bool {
        self.settled != self.latest
    }

    pub fn deadline(&self) -> Option<u64> {
        match &self.state {
            DebounceState::Pending { deadline, .. } => Some(*deadline),
            DebounceState::Settled => None,
        }
    }

    fn commit(&mut self) -> bool {
        match std::mem::replace(&mut self.state, DebounceState::Settled) {
            DebounceState::Pending { raw, .. } => {
                self.settled = raw;
                true
            }
            DebounceState::Settled => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_value_settles() {
        let mut d = Debouncer::new(String::new(), 800);
        d.push("a".to_string(), 0);
        d.push("ab".to_string(), 100);
        d.push("abc".to_string(), 900);

        for t in [100, 800, 899, 900, 1000, 1699] {
            assert!(!d.poll(t), "committed too early at {}", t);
            assert_eq!(d.settled(), "");
        }
        assert!(d.is_pending());

        assert!(d.poll(1700));
        assert_eq!(d.settled(), "abc");
        assert!(!d.is_pending());
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut d = Debouncer::new(String::new(), 800);
        let first = d.push("ph".to_string(), 0);
        let second = d.push("phone".to_string(), 300);

        assert!(!d.fire(first));
        assert_eq!(d.settled(), "");
        assert!(d.fire(second));
        assert_eq!(d.settled(), "phone");
        // повторное срабатывание ничего не делает
        assert!(!d.fire(second));
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let mut d = Debouncer::new("x".to_string(), 800);
        let ticket = d.push("xy".to_string(), 0);
        d.cancel();
        assert!(!d.fire(ticket));
        assert!(!d.poll(10_000));
        assert_eq!(d.settled(), "x");
    }

    #[test]
    fn test_returning_to_settled_value_is_not_pending() {
        let mut d = Debouncer::new(String::new(), 800);
        d.push("a".to_string(), 0);
        assert!(d.is_pending());
        d.push(String::new(), 50);
        assert!(!d.is_pending());
        assert!(d.poll(850));
        assert_eq!(d.settled(), "");
    }
}
