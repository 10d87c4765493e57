use direction::Direction;
use grid_2d::{Coord, Grid};

pub trait PathNode {
    fn from_parent(&self) -> Option<Direction>;
    fn coord(&self) -> Coord;
}

pub(crate) fn make_path<N: PathNode>(node_grid: &Grid<N>, goal_index: usize, path: &mut Vec<Coord>) {
    path.clear();

    let mut node = &node_grid[goal_index];
    loop {
        path.push(node.coord());
        if let Some(direction) = node.from_parent() {
            let parent_coord = node.coord() - direction.coord();
            node = node_grid
                .get(parent_coord)
                .expect("path node outside search context");
        } else {
            break;
        }
    }

    path.reverse();
}
