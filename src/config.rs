#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Only overwrite the cost and parent of a cell already on the frontier
    /// when the rediscovered cost is strictly cheaper. The default overwrites
    /// unconditionally.
    pub overwrite_only_if_cheaper: bool,
    /// Move an already-expanded cell back onto the frontier when a strictly
    /// cheaper route to it is found. The default keeps the closed set
    /// monotone: once expanded, a cell is never considered again.
    pub allow_reopen: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            overwrite_only_if_cheaper: false,
            allow_reopen: false,
        }
    }
}
