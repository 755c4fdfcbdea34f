use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::models::{Priority, Task};
use crate::rewards::Celebration;

/// How long a celebration stays on screen unless a newer completion
/// supersedes it.
pub const DEFAULT_CELEBRATION_MS: u64 = 2000;

/// The in-memory task board: the task list, the running point total and the
/// transient celebration. All mutations happen synchronously through the
/// methods below; there is no persistence, everything is lost on exit.
pub struct Board {
    tasks: Vec<Task>,
    points: u32,
    draft_priority: Priority,
    celebration: Option<Celebration>,
    celebration_lifetime: Duration,
    next_id: u64,
    rng: SmallRng,
}

impl Board {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Build a board with a caller-supplied RNG. Tests seed this
    /// (`SmallRng::seed_from_u64`) to pin sticker and message selection.
    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            tasks: Vec::new(),
            points: 0,
            draft_priority: Priority::Medium,
            celebration: None,
            celebration_lifetime: Duration::from_millis(DEFAULT_CELEBRATION_MS),
            next_id: 1,
            rng,
        }
    }

    pub fn set_celebration_lifetime(&mut self, lifetime: Duration) {
        self.celebration_lifetime = lifetime;
    }

    /// Seed the board with a handful of example tasks and a head start on
    /// points, so the reward loop is visible right away.
    pub fn seed_demo(&mut self) {
        self.add_task("Plan tomorrow's schedule", Priority::High);
        self.add_task("Reply to urgent messages", Priority::High);
        self.add_task("Tidy up the desk", Priority::Medium);
        self.add_task("Water the plants", Priority::Low);
        self.points = 150;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn draft_priority(&self) -> Priority {
        self.draft_priority
    }

    pub fn cycle_draft_priority(&mut self) {
        self.draft_priority = self.draft_priority.cycle();
    }

    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Fraction of tasks completed, 0.0 on an empty board.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            0.0
        } else {
            self.completed_count() as f64 / self.tasks.len() as f64
        }
    }

    /// Append a new incomplete task. Whitespace-only text is silently
    /// rejected. Returns the new task's id on success.
    pub fn add_task(&mut self, text: &str, priority: Priority) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, text.to_string(), priority));
        log::debug!("added task {} ({} priority)", id, priority);
        Some(id)
    }

    /// Mark a task completed, pay out its points and start a celebration.
    ///
    /// A no-op when the id is unknown or the task is already completed, so
    /// toggling twice never pays twice. A completion while a celebration is
    /// showing overwrites it and resets the expiry; there is no queue.
    /// Returns the points earned.
    pub fn toggle_complete(&mut self, id: u64, now: Instant) -> Option<u32> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if task.completed {
            return None;
        }
        task.completed = true;
        let priority = task.priority;

        let earned = priority.points();
        self.points += earned;
        self.celebration = Some(Celebration::roll(
            &mut self.rng,
            priority,
            now,
            self.celebration_lifetime,
        ));
        log::debug!("completed task {}, +{} points (total {})", id, earned, self.points);
        Some(earned)
    }

    /// Remove a task if it exists. Points already earned stay earned.
    pub fn delete_task(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() < before;
        if removed {
            log::debug!("deleted task {}", id);
        }
        removed
    }

    /// Clear the celebration once its window has elapsed. Safe to call every
    /// frame; clearing an already-cleared celebration does nothing.
    pub fn tick(&mut self, now: Instant) {
        if let Some(ref c) = self.celebration {
            if c.expired(now) {
                self.celebration = None;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_board() -> Board {
        Board::with_rng(SmallRng::seed_from_u64(42))
    }

    #[test]
    fn add_task_appends_incomplete_task() {
        let mut board = test_board();
        let id = board.add_task("Check the mail", Priority::Medium);
        assert!(id.is_some());
        assert_eq!(board.tasks().len(), 1);
        assert!(!board.tasks()[0].completed);
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut board = test_board();
        assert_eq!(board.add_task("", Priority::High), None);
        assert_eq!(board.add_task("   ", Priority::High), None);
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut board = test_board();
        let a = board.add_task("one", Priority::Low).unwrap();
        let b = board.add_task("two", Priority::Low).unwrap();
        let c = board.add_task("three", Priority::Low).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn completing_pays_points_by_priority() {
        let now = Instant::now();
        for (priority, expected) in [
            (Priority::High, 20),
            (Priority::Medium, 15),
            (Priority::Low, 10),
        ] {
            let mut board = test_board();
            let id = board.add_task("task", priority).unwrap();
            assert_eq!(board.toggle_complete(id, now), Some(expected));
            assert_eq!(board.points(), expected);
        }
    }

    #[test]
    fn completing_twice_is_a_no_op() {
        let mut board = test_board();
        let now = Instant::now();
        let id = board.add_task("task", Priority::High).unwrap();
        assert_eq!(board.toggle_complete(id, now), Some(20));
        assert_eq!(board.toggle_complete(id, now), None);
        assert_eq!(board.points(), 20);
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut board = test_board();
        let now = Instant::now();
        assert_eq!(board.toggle_complete(999, now), None);
        assert!(!board.delete_task(999));
        assert_eq!(board.points(), 0);
    }

    #[test]
    fn delete_removes_only_the_matching_task_and_keeps_points() {
        let mut board = test_board();
        let now = Instant::now();
        let a = board.add_task("keep", Priority::High).unwrap();
        let b = board.add_task("drop", Priority::Low).unwrap();
        board.toggle_complete(b, now);
        assert_eq!(board.points(), 10);

        assert!(board.delete_task(b));
        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].id, a);
        assert_eq!(board.points(), 10);
    }

    #[test]
    fn progress_on_empty_board_is_zero() {
        let board = test_board();
        assert_eq!(board.progress(), 0.0);
    }

    #[test]
    fn progress_is_completed_over_total() {
        let mut board = test_board();
        let now = Instant::now();
        let ids: Vec<u64> = (0..4)
            .map(|i| board.add_task(&format!("task {}", i), Priority::Low).unwrap())
            .collect();
        board.toggle_complete(ids[0], now);
        board.toggle_complete(ids[1], now);
        assert_eq!(board.progress(), 0.5);
    }

    #[test]
    fn completion_starts_a_celebration_that_expires() {
        let mut board = test_board();
        let now = Instant::now();
        let id = board.add_task("task", Priority::Medium).unwrap();
        board.toggle_complete(id, now);

        let c = board.celebration().expect("celebration should be active");
        assert_eq!(c.points_earned, 15);

        // Still active inside the window.
        board.tick(now + Duration::from_millis(1999));
        assert!(board.celebration().is_some());

        // Gone once the 2000ms window elapses.
        board.tick(now + Duration::from_millis(2000));
        assert!(board.celebration().is_none());
    }

    #[test]
    fn newer_completion_supersedes_the_celebration() {
        let mut board = test_board();
        let now = Instant::now();
        let a = board.add_task("first", Priority::Low).unwrap();
        let b = board.add_task("second", Priority::High).unwrap();

        board.toggle_complete(a, now);
        let first_expiry = board.celebration().unwrap().expires_at;

        let later = now + Duration::from_millis(1500);
        board.toggle_complete(b, later);
        let c = board.celebration().unwrap();
        assert_eq!(c.points_earned, 20);
        assert!(c.expires_at > first_expiry);

        // The stale deadline passing must not clear the superseding celebration.
        board.tick(first_expiry);
        assert!(board.celebration().is_some());
        board.tick(later + Duration::from_millis(2000));
        assert!(board.celebration().is_none());
    }

    #[test]
    fn points_label_comes_from_the_completed_task() {
        // Complete a low-priority task while a high-priority one sits first
        // in the list: the celebration must report the low payout.
        let mut board = test_board();
        let now = Instant::now();
        board.add_task("first, high", Priority::High);
        let low = board.add_task("second, low", Priority::Low).unwrap();

        board.toggle_complete(low, now);
        assert_eq!(board.celebration().unwrap().points_earned, 10);
    }

    #[test]
    fn spec_scenario_end_to_end() {
        let mut board = test_board();
        let now = Instant::now();
        let a = board.add_task("A", Priority::High).unwrap();
        let b = board.add_task("B", Priority::Low).unwrap();

        assert_eq!(board.toggle_complete(a, now), Some(20));
        assert_eq!(board.points(), 20);
        assert!(board.tasks()[0].completed);
        assert!(board.celebration().is_some());

        assert_eq!(board.toggle_complete(a, now), None);
        assert_eq!(board.points(), 20);

        assert!(board.delete_task(b));
        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].id, a);
        assert_eq!(board.points(), 20);
    }

    #[test]
    fn seed_demo_matches_the_advertised_start() {
        let mut board = test_board();
        board.seed_demo();
        assert_eq!(board.tasks().len(), 4);
        assert_eq!(board.points(), 150);
        assert!(board.tasks().iter().all(|t| !t.completed));
    }
}
