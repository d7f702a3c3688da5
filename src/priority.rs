//! Priority Bands
//!
//! Display-only colour banding for task priorities.

/// Urgency band of a priority value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBand {
    High,
    Medium,
    Low,
}

impl PriorityBand {
    pub fn of(priority: i32) -> Self {
        if priority >= 8 {
            PriorityBand::High
        } else if priority >= 5 {
            PriorityBand::Medium
        } else {
            PriorityBand::Low
        }
    }

    /// CSS class for the badge
    pub fn class(self) -> &'static str {
        match self {
            PriorityBand::High => "priority-high",
            PriorityBand::Medium => "priority-medium",
            PriorityBand::Low => "priority-low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10, PriorityBand::High)]
    #[case(8, PriorityBand::High)]
    #[case(7, PriorityBand::Medium)]
    #[case(5, PriorityBand::Medium)]
    #[case(4, PriorityBand::Low)]
    #[case(1, PriorityBand::Low)]
    fn test_band_boundaries(#[case] priority: i32, #[case] expected: PriorityBand) {
        assert_eq!(PriorityBand::of(priority), expected);
    }

    #[test]
    fn test_band_classes() {
        assert_eq!(PriorityBand::of(9).class(), "priority-high");
        assert_eq!(PriorityBand::of(6).class(), "priority-medium");
        assert_eq!(PriorityBand::of(2).class(), "priority-low");
    }
}
