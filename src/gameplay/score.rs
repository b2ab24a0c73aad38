//! Fixed-rate score bookkeeping.

use bevy::prelude::*;

use crate::screens::Screen;

/// Simulation ticks per game second.
pub const TICKS_PER_SECOND: i32 = 60;
/// "HIT ME" is visible for this many ticks out of every second.
const BLINK_VISIBLE_TICKS: i32 = 50;
/// A hit landing within this many ticks of the previous one earns a bonus.
const BONUS_WINDOW_TICKS: i32 = 10;
/// Payout per tick of reaction margin. Kept verbatim from the original
/// scoring table, factors and all.
const BONUS_MULTIPLIER: i32 = 42 * 69;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<HitScore>();
    app.init_resource::<HitScore>();

    app.add_systems(FixedUpdate, advance_tick.run_if(in_state(Screen::Gameplay)));
}

/// All score counters for a play session. Everything advances on the fixed
/// tick or on a hit; nothing here is frame-rate dependent.
#[derive(Resource, Reflect, Debug, Clone, Default, PartialEq, Eq)]
#[reflect(Resource)]
pub struct HitScore {
    /// Wraps every second; drives the per-second snapshot and the text blink.
    blink_counter: i32,
    /// Points accumulated since the last per-second snapshot.
    current_score: i32,
    /// Snapshot of `current_score / 60`, taken once per second.
    pub points_per_second: i32,
    /// Highest `points_per_second` seen since the last reset.
    pub best_points_per_second: i32,
    /// Ticks since the last hit; small values earn a reaction bonus.
    ticks_since_last_hit: i32,
}

impl HitScore {
    /// Advances one fixed tick. On every 60th tick the points-per-second
    /// value is snapshotted (integer division, rounding down) and the
    /// accumulator starts over.
    pub fn tick(&mut self) {
        self.blink_counter += 1;
        if self.blink_counter == TICKS_PER_SECOND {
            self.blink_counter = 0;
            self.points_per_second = self.current_score / TICKS_PER_SECOND;
            self.current_score = 0;
        }
        if self.points_per_second > self.best_points_per_second {
            self.best_points_per_second = self.points_per_second;
        }
        self.ticks_since_last_hit += 1;
    }

    /// Registers one hit. Hits within the bonus window of the previous one
    /// pay out proportionally to how little of the window was used.
    pub fn register_hit(&mut self) {
        if self.ticks_since_last_hit < BONUS_WINDOW_TICKS {
            self.current_score +=
                (BONUS_WINDOW_TICKS - self.ticks_since_last_hit) * BONUS_MULTIPLIER;
        }
        self.ticks_since_last_hit = 0;
    }

    /// Ctrl+R: zero the totals. The blink phase, jitter, background color,
    /// and reaction timer keep running.
    pub fn reset_totals(&mut self) {
        self.current_score = 0;
        self.points_per_second = 0;
        self.best_points_per_second = 0;
    }

    /// The banner blinks off for the last ten ticks of every second.
    pub fn hit_me_visible(&self) -> bool {
        self.blink_counter < BLINK_VISIBLE_TICKS
    }
}

fn advance_tick(mut score: ResMut<HitScore>) {
    score.tick();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_happens_only_on_the_60th_tick() {
        let mut score = HitScore::default();
        score.current_score = 600;
        for _ in 0..59 {
            score.tick();
            assert_eq!(score.points_per_second, 0);
        }
        score.tick();
        assert_eq!(score.points_per_second, 10);
        assert_eq!(score.current_score, 0);
    }

    #[test]
    fn snapshot_rounds_down() {
        let mut score = HitScore::default();
        score.current_score = 119;
        for _ in 0..60 {
            score.tick();
        }
        assert_eq!(score.points_per_second, 1);
    }

    #[test]
    fn best_never_decreases_across_seconds() {
        let mut score = HitScore::default();
        score.current_score = 600;
        for _ in 0..60 {
            score.tick();
        }
        assert_eq!(score.best_points_per_second, 10);

        // A weaker second leaves the best untouched.
        score.current_score = 60;
        for _ in 0..60 {
            score.tick();
        }
        assert_eq!(score.points_per_second, 1);
        assert_eq!(score.best_points_per_second, 10);
    }

    #[test]
    fn reaction_bonus_follows_the_payout_curve() {
        for ticks in 0..10 {
            let mut score = HitScore::default();
            score.register_hit();
            for _ in 0..ticks {
                score.tick();
            }
            score.register_hit();
            assert_eq!(
                score.current_score,
                10 * 2898 + (10 - ticks) * 2898,
                "unexpected payout {} ticks after the previous hit",
                ticks
            );
            assert_eq!(score.ticks_since_last_hit, 0);
        }
    }

    #[test]
    fn late_hits_score_nothing() {
        let mut score = HitScore::default();
        score.register_hit();
        for _ in 0..10 {
            score.tick();
        }
        let before = score.current_score;
        score.register_hit();
        assert_eq!(score.current_score, before);
        // But the reaction timer still restarts.
        assert_eq!(score.ticks_since_last_hit, 0);
    }

    #[test]
    fn first_hit_after_start_pays_the_full_bonus() {
        // `ticks_since_last_hit` starts at zero, so the very first hit of a
        // session lands inside the bonus window.
        let mut score = HitScore::default();
        score.register_hit();
        assert_eq!(score.current_score, 10 * 2898);
    }

    #[test]
    fn reset_zeroes_totals_and_nothing_else() {
        let mut score = HitScore::default();
        score.current_score = 600;
        for _ in 0..73 {
            score.tick();
        }
        score.register_hit();
        let blink_before = score.blink_counter;

        score.reset_totals();
        assert_eq!(score.current_score, 0);
        assert_eq!(score.points_per_second, 0);
        assert_eq!(score.best_points_per_second, 0);
        assert_eq!(score.blink_counter, blink_before);
        assert_eq!(score.ticks_since_last_hit, 0);
    }

    #[test]
    fn banner_blinks_off_for_the_last_ten_ticks() {
        let mut score = HitScore::default();
        for tick in 1..=240 {
            score.tick();
            let counter = tick % 60;
            assert_eq!(score.blink_counter, counter);
            assert_eq!(score.hit_me_visible(), counter < 50);
        }
    }

    #[test]
    fn one_scoring_second_then_an_idle_one() {
        let mut score = HitScore::default();
        for _ in 0..59 {
            score.tick();
        }
        score.current_score = 300;
        score.tick();
        assert_eq!(score.points_per_second, 5);
        assert_eq!(score.current_score, 0);

        for _ in 0..60 {
            score.tick();
        }
        assert_eq!(score.points_per_second, 0);
        assert_eq!(score.best_points_per_second, 5);
    }
}
