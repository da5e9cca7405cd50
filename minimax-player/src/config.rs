//! Search configuration.

/// What happens when the side to move has no legal move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PassRule {
    /// The position is a leaf and is scored as it stands, even if the other
    /// side could still move. This deviates from tournament rules.
    Terminal,
    /// Tournament rules: the side passes and the other side moves. The position
    /// is a leaf only when neither side can move.
    Standard,
}

impl Default for PassRule {
    fn default() -> Self {
        PassRule::Terminal
    }
}

/// Options for building and scoring a search tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SearchConfig {
    pub pass_rule: PassRule,
}

impl SearchConfig {
    pub fn with_pass_rule(self, pass_rule: PassRule) -> Self {
        Self { pass_rule }
    }
}
