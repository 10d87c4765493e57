extern crate direction;
extern crate grid_2d;
extern crate num_traits;
#[cfg(feature = "serialize")]
#[macro_use]
extern crate serde;

mod astar;
mod config;
mod dijkstra;
mod error;
mod event;
mod grid;
mod metadata;
mod path;
mod search;
mod status;

pub use astar::*;
pub use config::*;
pub use dijkstra::*;
pub use error::*;
pub use event::*;
pub use grid::*;
pub use metadata::*;
pub use path::*;
pub use search::*;
pub use status::*;
