//! Frontend Models
//!
//! Data structures owned by the top-level panel.

/// Task priority, fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Translation key / form value for this priority
    pub fn as_key(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a form value; unknown values fall back to Medium
    pub fn from_key(key: &str) -> Priority {
        match key {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    /// CSS class for the priority badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::High => "priority-badge high",
            Priority::Medium => "priority-badge medium",
            Priority::Low => "priority-badge low",
        }
    }
}

/// Task data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_key_round_trip() {
        for p in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(Priority::from_key(p.as_key()), p);
        }
    }

    #[test]
    fn test_priority_unknown_key_is_medium() {
        assert_eq!(Priority::from_key("urgent"), Priority::Medium);
        assert_eq!(Priority::from_key(""), Priority::Medium);
    }
}
