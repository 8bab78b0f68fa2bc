//! Deadline の実装

use std::cell::Cell;
use std::time::{Duration, Instant};

use super::Deadline;

// =============================================================================
// TurnTimer
// =============================================================================

/// 1手ぶんの持ち時間を実時間で計る
#[derive(Debug, Clone, Copy)]
pub struct TurnTimer {
    start: Instant,
    budget: Duration,
}

impl TurnTimer {
    /// 今から `budget` の持ち時間で計測を始める
    pub fn start(budget: Duration) -> Self {
        Self { start: Instant::now(), budget }
    }

    /// 開始からの経過時間
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// 持ち時間
    #[inline]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// 持ち時間を使い切ったか
    #[inline]
    pub fn expired(&self) -> bool {
        self.remaining_ms() < 0.0
    }
}

impl Deadline for TurnTimer {
    fn remaining_ms(&self) -> f64 {
        let budget = self.budget.as_secs_f64() * 1000.0;
        let elapsed = self.start.elapsed().as_secs_f64() * 1000.0;
        budget - elapsed
    }
}

// =============================================================================
// FixedClock
// =============================================================================

/// 常に同じ残り時間を返す
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub f64);

impl FixedClock {
    /// 時間切れにならない
    pub const INFINITE: FixedClock = FixedClock(f64::INFINITY);

    /// 最初から時間切れ
    pub const EXPIRED: FixedClock = FixedClock(0.0);
}

impl Deadline for FixedClock {
    #[inline]
    fn remaining_ms(&self) -> f64 {
        self.0
    }
}

// =============================================================================
// ManualClock
// =============================================================================

/// 問い合わせのたびに `step_ms` ずつ減る時計
///
/// 「N 回目の問い合わせで時間切れになる」状況を決定的に再現する。
#[derive(Debug, Clone)]
pub struct ManualClock {
    remaining_ms: Cell<f64>,
    step_ms: f64,
    polls: Cell<u64>,
}

impl ManualClock {
    /// 残り `remaining_ms` から始め、問い合わせごとに `step_ms` 減らす
    pub fn new(remaining_ms: f64, step_ms: f64) -> Self {
        Self { remaining_ms: Cell::new(remaining_ms), step_ms, polls: Cell::new(0) }
    }

    /// 問い合わせ回数
    #[inline]
    pub fn polls(&self) -> u64 {
        self.polls.get()
    }

    /// 残り時間を直接設定する
    pub fn set_remaining(&self, remaining_ms: f64) {
        self.remaining_ms.set(remaining_ms);
    }
}

impl Deadline for ManualClock {
    fn remaining_ms(&self) -> f64 {
        let now = self.remaining_ms.get();
        self.remaining_ms.set(now - self.step_ms);
        self.polls.set(self.polls.get() + 1);
        now
    }
}

// =============================================================================
// テスト
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_timer_counts_down() {
        let timer = TurnTimer::start(Duration::from_millis(1000));
        let first = timer.remaining_ms();
        assert!(first <= 1000.0);
        assert!(first > 500.0);

        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.remaining_ms() < first);
        assert!(!timer.expired());
    }

    #[test]
    fn test_turn_timer_zero_budget_expires() {
        let timer = TurnTimer::start(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(1));
        assert!(timer.expired());
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock::INFINITE.remaining_ms(), f64::INFINITY);
        assert_eq!(FixedClock::EXPIRED.remaining_ms(), 0.0);
        assert_eq!(FixedClock(25.0).remaining_ms(), 25.0);
    }

    #[test]
    fn test_manual_clock_steps() {
        let clock = ManualClock::new(30.0, 10.0);
        assert_eq!(clock.remaining_ms(), 30.0);
        assert_eq!(clock.remaining_ms(), 20.0);
        assert_eq!(clock.remaining_ms(), 10.0);
        assert_eq!(clock.polls(), 3);

        clock.set_remaining(100.0);
        assert_eq!(clock.remaining_ms(), 100.0);
    }

    #[test]
    fn test_closure_deadline() {
        let deadline = || 12.5;
        assert_eq!(deadline.remaining_ms(), 12.5);
    }
}
