#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    StartOutsideGrid,
    GoalOutsideGrid,
    StartSolid,
    GoalSolid,
    StartIsGoal,
    /// `step` was called after the search reached a terminal status.
    SearchComplete,
    /// The search context is too small for the grid being searched.
    VisitOutsideContext,
    /// Returned by the blocking wrappers when the frontier is exhausted.
    NoPath,
}
