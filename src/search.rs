use config::*;
use direction::*;
use error::*;
use event::*;
use grid::*;
use grid_2d::*;
use metadata::*;
use num_traits::Zero;
use path::{self, PathNode};
use status::*;
use std::ops::Add;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<Cost> {
    pub(crate) seen: u64,
    pub(crate) visited: u64,
    pub(crate) coord: Coord,
    pub(crate) from_parent: Option<Direction>,
    pub(crate) g: Cost,
    pub(crate) h: Cost,
}

impl<Cost: Zero> SearchNode<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            visited: 0,
            coord,
            from_parent: None,
            g: Zero::zero(),
            h: Zero::zero(),
        }
    }
}

impl<Cost> PathNode for SearchNode<Cost> {
    fn from_parent(&self) -> Option<Direction> {
        self.from_parent
    }
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// A reusable search session. The node arena is allocated once for a given
/// grid size; `begin_search` starts a session and repeated `step` calls each
/// perform a single node expansion, reporting progress through the returned
/// status and the per-step expansion-event batch.
///
/// A freshly constructed context behaves like a finished search: stepping
/// fails with `Error::SearchComplete` until `begin_search` is called.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct SearchContext<Cost> {
    seq: u64,
    node_grid: Grid<SearchNode<Cost>>,
    frontier: Vec<usize>,
    current: usize,
    start: Coord,
    goal: Coord,
    status: SearchStatus,
    config: SearchConfig,
    events: Vec<ExpansionEvent>,
    num_nodes_visited: usize,
}

impl<Cost: PartialOrd<Cost> + Zero> SearchContext<Cost> {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            node_grid: Grid::new_fn(size, SearchNode::new),
            frontier: Vec::new(),
            current: 0,
            start: Coord::new(0, 0),
            goal: Coord::new(0, 0),
            status: SearchStatus::NoPathExists,
            config: Default::default(),
            events: Vec::new(),
            num_nodes_visited: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.node_grid.width()
    }

    pub fn height(&self) -> u32 {
        self.node_grid.height()
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// The expansion events produced by the most recent `step` call. The
    /// batch is replaced on each step; the step that reports a terminal
    /// status produces an empty batch.
    pub fn events(&self) -> &[ExpansionEvent] {
        &self.events
    }

    pub fn metadata(&self) -> SearchMetadata {
        SearchMetadata {
            num_nodes_visited: self.num_nodes_visited,
        }
    }
}

impl<Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost> + Zero> SearchContext<Cost> {
    pub fn begin_search<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<(), Error>
    where
        G: SolidGrid,
    {
        match grid.is_solid(start) {
            None => return Err(Error::StartOutsideGrid),
            Some(true) => return Err(Error::StartSolid),
            Some(false) => (),
        }
        match grid.is_solid(goal) {
            None => return Err(Error::GoalOutsideGrid),
            Some(true) => return Err(Error::GoalSolid),
            Some(false) => (),
        }
        if start == goal {
            return Err(Error::StartIsGoal);
        }

        let index = self
            .node_grid
            .index_of_coord(start)
            .ok_or(Error::VisitOutsideContext)?;
        self.node_grid
            .index_of_coord(goal)
            .ok_or(Error::VisitOutsideContext)?;

        self.seq += 1;
        self.frontier.clear();
        self.events.clear();
        self.num_nodes_visited = 0;
        self.start = start;
        self.goal = goal;
        self.config = config;

        let node = &mut self.node_grid[index];
        node.seen = self.seq;
        node.from_parent = None;
        node.g = Zero::zero();
        node.h = Zero::zero();

        self.frontier.push(index);
        self.current = index;
        self.status = SearchStatus::Ready;

        Ok(())
    }

    pub(crate) fn step_general<G, V, D, W, H>(
        &mut self,
        grid: &G,
        directions: D,
        weight_fn: W,
        heuristic_fn: H,
    ) -> Result<SearchStatus, Error>
    where
        G: SolidGrid,
        V: Into<Direction>,
        D: Copy + IntoIterator<Item = V>,
        W: Fn(Direction) -> Cost,
        H: Fn(Coord, Coord) -> Cost,
    {
        if self.status.is_terminal() {
            return Err(Error::SearchComplete);
        }

        self.events.clear();

        if self.node_grid[self.current].coord == self.goal {
            self.status = SearchStatus::PathFound;
            return Ok(self.status);
        }

        if self.frontier.is_empty() {
            self.status = SearchStatus::NoPathExists;
            return Ok(self.status);
        }

        let (current_coord, current_cost) = {
            let node = &self.node_grid[self.current];
            (node.coord, node.g)
        };

        for v in directions {
            let direction = v.into();
            let neighbour_coord = current_coord + direction.coord();

            if let Some(false) = grid.is_solid(neighbour_coord) {
            } else {
                continue;
            }

            let index = self
                .node_grid
                .index_of_coord(neighbour_coord)
                .ok_or(Error::VisitOutsideContext)?;

            let cost = current_cost + weight_fn(direction);

            let node = &mut self.node_grid[index];

            if node.visited == self.seq {
                if !self.config.allow_reopen || !(cost < node.g) {
                    continue;
                }
                // Cheaper route to an expanded cell: pull it back out of the
                // closed set by clearing its visited stamp.
                node.visited = 0;
                node.g = cost;
                node.h = heuristic_fn(neighbour_coord, self.goal);
                node.from_parent = Some(direction);
                self.frontier.push(index);
                self.events
                    .push(ExpansionEvent::new(neighbour_coord, CellRole::Frontier));
            } else if node.seen == self.seq {
                if self.config.overwrite_only_if_cheaper && !(cost < node.g) {
                    continue;
                }
                node.g = cost;
                node.h = heuristic_fn(neighbour_coord, self.goal);
                node.from_parent = Some(direction);
            } else {
                node.seen = self.seq;
                node.g = cost;
                node.h = heuristic_fn(neighbour_coord, self.goal);
                node.from_parent = Some(direction);
                self.frontier.push(index);
                self.events
                    .push(ExpansionEvent::new(neighbour_coord, CellRole::Frontier));
            }
        }

        if let Some(position) = self.min_frontier_position() {
            let index = self.frontier.remove(position);
            let node = &mut self.node_grid[index];
            node.visited = self.seq;
            let coord = node.coord;
            self.current = index;
            self.num_nodes_visited += 1;
            self.events
                .push(ExpansionEvent::new(coord, CellRole::Visited));
        }

        self.status = SearchStatus::InProgress;
        Ok(self.status)
    }

    // First-inserted node wins ties, matching a stable sort by f.
    fn min_frontier_position(&self) -> Option<usize> {
        let mut best: Option<(usize, Cost)> = None;
        for (position, &index) in self.frontier.iter().enumerate() {
            let node = &self.node_grid[index];
            let f = node.g + node.h;
            let replace = match best {
                Some((_, best_f)) => f < best_f,
                None => true,
            };
            if replace {
                best = Some((position, f));
            }
        }
        best.map(|(position, _)| position)
    }

    /// Writes the found path into `path` in start-to-goal order, including
    /// both endpoints. Clears `path` instead when the current status is not
    /// `PathFound`.
    pub fn reconstruct_path(&self, path: &mut Vec<Coord>) {
        if let SearchStatus::PathFound = self.status {
            path::make_path(&self.node_grid, self.current, path);
        } else {
            path.clear();
        }
    }
}
