#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

/// Position inside an ordered run of steps, numbered `1..=len`.
///
/// Every transition checks its own bound; there is no way to move the
/// cursor outside the range or to skip a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    len: usize,
    current: usize,
}

impl Flow {
    /// # Panics
    /// When `len` is zero.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a flow needs at least one step");
        Self { len, current: 1 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.len
    }

    pub fn is_terminal(&self) -> bool {
        self.current == self.len
    }

    pub fn has_next(&self) -> bool {
        self.current < self.len
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn status_at(&self, step: usize) -> StepStatus {
        if step < self.current {
            StepStatus::Done
        } else if step == self.current {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Progress as a whole percentage, `current / len`.
    pub fn percent(&self) -> usize {
        self.current * 100 / self.len
    }
}

#[cfg(test)]
mod tests {
    use super::{Flow, StepStatus};

    #[test]
    fn starts_at_first_step() {
        let flow = Flow::new(6);
        assert_eq!(flow.current(), 1);
        assert!(!flow.has_prev());
        assert!(!flow.is_terminal());
    }

    #[test]
    fn stops_at_both_ends() {
        let mut flow = Flow::new(2);
        assert!(!flow.retreat());
        assert!(flow.advance());
        assert!(flow.is_terminal());
        assert!(!flow.advance());
        assert_eq!(flow.current(), 2);
    }

    #[test]
    fn statuses_follow_cursor() {
        let mut flow = Flow::new(3);
        flow.advance();
        assert_eq!(flow.status_at(1), StepStatus::Done);
        assert_eq!(flow.status_at(2), StepStatus::Active);
        assert_eq!(flow.status_at(3), StepStatus::Pending);
    }

    #[test]
    fn percent_matches_progress_bar() {
        let mut flow = Flow::new(6);
        assert_eq!(flow.percent(), 16);
        while flow.advance() {}
        assert_eq!(flow.percent(), 100);
    }
}
