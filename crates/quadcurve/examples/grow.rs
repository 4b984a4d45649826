//! Minimal example: grow the seed a few steps and inspect the path.

use quadcurve::{Grid, PathGraph, grow};

fn main() {
    let mut grid = Grid::seed();
    for _ in 0..3 {
        grid = grow(&grid);
    }
    println!(
        "order {} curve: {}x{} grid, {} cells",
        grid.order(),
        grid.side(),
        grid.side(),
        grid.len()
    );

    let graph = PathGraph::new(&grid);
    println!("continuous path: {}", graph.is_single_path());
    println!("path ends: {:?}", graph.endpoints());
}
