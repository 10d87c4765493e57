use config::*;
use direction::*;
use error::*;
use grid::*;
use grid_2d::Coord;
use metadata::*;
use num_traits::{NumCast, One, Zero};
use search::*;
use status::*;
use std::ops::Add;

pub fn euclidean_distance(a: Coord, b: Coord) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

fn manhatten_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

fn offset_distance(direction: Direction) -> f64 {
    let coord = direction.coord();
    ((coord.x * coord.x + coord.y * coord.y) as f64).sqrt()
}

impl SearchContext<f64> {
    /// Performs a single expansion of the current search, weighting each move
    /// by the euclidean length of its offset and using euclidean distance to
    /// the goal as the heuristic.
    pub fn step_euclidean_distance_heuristic<G, V, D>(
        &mut self,
        grid: &G,
        directions: D,
    ) -> Result<SearchStatus, Error>
    where
        G: SolidGrid,
        V: Into<Direction>,
        D: Copy + IntoIterator<Item = V>,
    {
        self.step_general(grid, directions, offset_distance, euclidean_distance)
    }

    pub fn astar_euclidean_distance_heuristic<G, V, D>(
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
            match self.step_euclidean_distance_heuristic(grid, directions)? {
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

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost> + NumCast + One + Zero,
{
    pub fn step_cardinal_manhatten_distance_heuristic<G>(
        &mut self,
        grid: &G,
    ) -> Result<SearchStatus, Error>
    where
        G: SolidGrid,
    {
        let heuristic_fn =
            |a, b| NumCast::from(manhatten_distance(a, b)).expect("Failed to cast to Cost");
        self.step_general(grid, DirectionsCardinal, |_| One::one(), heuristic_fn)
    }

    pub fn astar_cardinal_manhatten_distance_heuristic<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata, Error>
    where
        G: SolidGrid,
    {
        self.begin_search(grid, start, goal, config)?;
        loop {
            match self.step_cardinal_manhatten_distance_heuristic(grid)? {
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
