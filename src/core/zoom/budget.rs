pub const DEFAULT_BUDGET_STEP: u32 = 10;

/// Decides how many iterations each frame of a zoom may spend.
pub trait IterationBudgetPolicy {
    /// Budget for `frame_index`, given the budget the previous frame used.
    fn budget_for_frame(&self, previous: u32, frame_index: u32) -> u32;
}

/// Frame 1 reuses frame 0's budget; every later frame `k` adds `k * step`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LinearBudgetGrowth {
    step: u32,
}

impl LinearBudgetGrowth {
    #[must_use]
    pub fn new(step: u32) -> Self {
        Self { step }
    }

    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }
}

impl Default for LinearBudgetGrowth {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET_STEP)
    }
}

impl IterationBudgetPolicy for LinearBudgetGrowth {
    fn budget_for_frame(&self, previous: u32, frame_index: u32) -> u32 {
        if frame_index <= 1 {
            return previous;
        }

        previous.saturating_add(frame_index.saturating_mul(self.step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_growth_sequence() {
        let policy = LinearBudgetGrowth::default();
        let mut budget = 100;
        let mut budgets = vec![budget];

        for frame_index in 1..=4 {
            budget = policy.budget_for_frame(budget, frame_index);
            budgets.push(budget);
        }

        assert_eq!(budgets, vec![100, 100, 120, 150, 190]);
    }

    #[test]
    fn test_linear_growth_saturates() {
        let policy = LinearBudgetGrowth::new(u32::MAX);

        assert_eq!(policy.budget_for_frame(u32::MAX - 1, 5), u32::MAX);
    }

    #[test]
    fn test_zero_step_is_fixed() {
        let policy = LinearBudgetGrowth::new(0);

        assert_eq!(policy.budget_for_frame(64, 9), 64);
    }
}
