use crate::scheduler::MergeOptions;

/// État partagé, immuable, entre les handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    options: MergeOptions,
}

impl AppState {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MergeOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::OverridePrecedence;

    #[test]
    fn options_are_handed_out_by_value() {
        let state = AppState::new(MergeOptions {
            precedence: OverridePrecedence::EarliestWins,
        });
        let copy = state;
        assert_eq!(copy.options().precedence, OverridePrecedence::EarliestWins);
        assert_eq!(state.options().precedence, OverridePrecedence::EarliestWins);
    }
}
