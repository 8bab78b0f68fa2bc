//! 残り時間の問い合わせ（Deadline）
//!
//! 探索は再帰の入口ごとに `remaining_ms` を呼び、しきい値を下回ったら即座に打ち切る。
//! 値は毎回その時点で取り直すこと（キャッシュしない）。
//!
//! - `TurnTimer`: 実時間（`Instant` + 持ち時間）
//! - `FixedClock`: 常に同じ残り時間を返す（無制限 / 切れ済み）
//! - `ManualClock`: 問い合わせのたびに一定量だけ減る決定的な時計（テスト用）

mod clock;

pub use clock::{FixedClock, ManualClock, TurnTimer};

/// 残り時間（ミリ秒）を返す
pub trait Deadline {
    /// この時点での残り時間（ミリ秒）。負になり得る
    fn remaining_ms(&self) -> f64;
}

impl<F> Deadline for F
where
    F: Fn() -> f64,
{
    #[inline]
    fn remaining_ms(&self) -> f64 {
        self()
    }
}
