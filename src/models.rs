use std::fmt;

/// How urgent a task is. Drives both list styling and the point payout
/// when the task is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Points awarded for completing a task of this priority.
    pub fn points(self) -> u32 {
        match self {
            Priority::High => 20,
            Priority::Medium => 15,
            Priority::Low => 10,
        }
    }

    /// Next priority in the draft-selection cycle (High → Medium → Low → High).
    pub fn cycle(self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
}

impl Task {
    pub fn new(id: u64, text: String, priority: Priority) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_match_priority() {
        assert_eq!(Priority::High.points(), 20);
        assert_eq!(Priority::Medium.points(), 15);
        assert_eq!(Priority::Low.points(), 10);
    }

    #[test]
    fn cycle_visits_every_priority() {
        let start = Priority::High;
        assert_eq!(start.cycle(), Priority::Medium);
        assert_eq!(start.cycle().cycle(), Priority::Low);
        assert_eq!(start.cycle().cycle().cycle(), Priority::High);
    }

    #[test]
    fn new_task_starts_incomplete() {
        let task = Task::new(1, "Water the plants".to_string(), Priority::Low);
        assert!(!task.completed);
        assert_eq!(task.id, 1);
    }
}
