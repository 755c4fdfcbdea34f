use std::time::{Duration, Instant};

use rand::Rng;

use crate::models::Priority;

/// Sticker glyphs a completion can earn. Picked uniformly at random.
pub const STICKERS: &[&str] = &["🏆", "⭐", "💖", "🌟", "🎉", "💪", "👏", "🌈", "💫", "🦋"];

/// Messages shown alongside the sticker. Picked uniformly at random.
pub const MESSAGES: &[&str] = &[
    "You're doing amazing!",
    "Keep up the great work!",
    "You're on a roll!",
    "Every task done is a win!",
    "You're making a difference!",
    "Fantastic job!",
    "Your effort matters!",
];

/// Transient reward state shown after completing a task.
///
/// Carries an explicit expiry instant so callers decide liveness by
/// checking `now >= expires_at` instead of depending on a scheduled
/// callback firing in the right order.
#[derive(Debug, Clone)]
pub struct Celebration {
    pub sticker: &'static str,
    pub message: &'static str,
    /// Points paid out by the completion that started this celebration.
    /// Taken from the completed task itself, never re-derived from the list.
    pub points_earned: u32,
    pub expires_at: Instant,
}

impl Celebration {
    /// Roll a fresh celebration for a task of the given priority.
    pub fn roll(rng: &mut impl Rng, priority: Priority, now: Instant, lifetime: Duration) -> Self {
        Self {
            sticker: STICKERS[rng.gen_range(0..STICKERS.len())],
            message: MESSAGES[rng.gen_range(0..MESSAGES.len())],
            points_earned: priority.points(),
            expires_at: now + lifetime,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn roll_is_deterministic_with_seeded_rng() {
        let now = Instant::now();
        let lifetime = Duration::from_millis(2000);
        let a = Celebration::roll(
            &mut SmallRng::seed_from_u64(42),
            Priority::High,
            now,
            lifetime,
        );
        let b = Celebration::roll(
            &mut SmallRng::seed_from_u64(42),
            Priority::High,
            now,
            lifetime,
        );
        assert_eq!(a.sticker, b.sticker);
        assert_eq!(a.message, b.message);
        assert_eq!(a.points_earned, 20);
    }

    #[test]
    fn roll_draws_from_the_fixed_pools() {
        let mut rng = SmallRng::seed_from_u64(7);
        let now = Instant::now();
        for _ in 0..50 {
            let c = Celebration::roll(&mut rng, Priority::Low, now, Duration::from_millis(2000));
            assert!(STICKERS.contains(&c.sticker));
            assert!(MESSAGES.contains(&c.message));
        }
    }

    #[test]
    fn expires_exactly_at_deadline() {
        let now = Instant::now();
        let c = Celebration::roll(
            &mut SmallRng::seed_from_u64(1),
            Priority::Medium,
            now,
            Duration::from_millis(2000),
        );
        assert!(!c.expired(now));
        assert!(!c.expired(now + Duration::from_millis(1999)));
        assert!(c.expired(now + Duration::from_millis(2000)));
    }
}
