use config::*;
use direction::*;
use error::*;
use grid::*;
use grid_2d::Coord;
use metadata::*;
use num_traits::{One, Zero};
use search::*;
use status::*;
use std::ops::Add;

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost> + One + Zero,
{
    /// A single expansion with unit move weights and no heuristic.
    pub fn step_uniform_cost<G, V, D>(
        &mut self,
        grid: &G,
        directions: D,
    ) -> Result<SearchStatus, Error>
    where
        G: SolidGrid,
        V: Into<Direction>,
        D: Copy + IntoIterator<Item = V>,
    {
        self.step_general(grid, directions, |_| One::one(), |_, _| Zero::zero())
    }

    pub fn dijkstra<G, V, D>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        directions: D,
        config: SearchConfig,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata, Error>
    where
        G: SolidGrid,
        V: Into<Direction>,
        D: Copy + IntoIterator<Item = V>,
    {
        self.begin_search(grid, start, goal, config)?;
        loop {
            match self.step_uniform_cost(grid, directions)? {
                SearchStatus::PathFound => {
                    self.reconstruct_path(path);
                    return Ok(self.metadata());
                }
                SearchStatus::NoPathExists => return Err(Error::NoPath),
                SearchStatus::Ready | SearchStatus::InProgress => (),
            }
        }
    }
}
