/// Решает, нужно ли по событию видимости сентинела запросить догрузку.
///
/// После срабатывания повторные события игнорируются в течение `cooldown_ms`:
/// соседние пересечения не должны порождать дублирующие запросы.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollGate {
    cooldown_ms: u64,
    busy_until: Option<u64>,
}

impl ScrollGate {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            busy_until: None,
        }
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    pub fn is_cooling_down(&self, now_ms: u64) -> bool {
        self.busy_until.is_some_and(|until| now_ms < until)
    }

    /// `true`: вызвать `grow()` ровно один раз
    pub fn on_visibility(&mut self, intersecting: bool, has_more: bool, now_ms: u64) -> bool {
        if !intersecting || !has_more || self.is_cooling_down(now_ms) {
            return false;
        }
        self.busy_until = Some(now_ms + self.cooldown_ms);
        true
    }

    pub fn reset(&mut self) {
        self.busy_until = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_cooldown() {
        let mut gate = ScrollGate::new(200);
        assert!(gate.on_visibility(true, true, 1_000));
        assert!(!gate.on_visibility(true, true, 1_050));
        assert!(!gate.on_visibility(true, true, 1_199));
        assert!(gate.on_visibility(true, true, 1_200));
    }

    #[test]
    fn test_requires_visibility_and_more_items() {
        let mut gate = ScrollGate::new(200);
        assert!(!gate.on_visibility(false, true, 0));
        assert!(!gate.on_visibility(true, false, 0));
        // отказ не включает паузу
        assert!(!gate.is_cooling_down(0));
        assert!(gate.on_visibility(true, true, 0));
    }

    #[test]
    fn test_reset_clears_cooldown() {
        let mut gate = ScrollGate::new(200);
        assert!(gate.on_visibility(true, true, 10));
        gate.reset();
        assert!(gate.on_visibility(true, true, 20));
    }
}
