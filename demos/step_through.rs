use grid_util::point::Point;
use stepwise_pathfinding::{Graph, Pathfinder, SearchConfig, SearchMode, Snapshot};

// In this example a search is stepped one expansion at a time on a map with shape
// y = 4 |  #   G|
// y = 3 |  # 44 |
// y = 2 |  # 4  |
// y = 1 |  #    |
// y = 0 |S      |
// and every intermediate state is printed. S marks the start, G the goal, 4 heavy terrain.
const MAP: [[u8; 7]; 5] = [
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 0, 0],
    [0, 0, 1, 0, 4, 0, 0],
    [0, 0, 1, 0, 4, 4, 0],
    [0, 0, 1, 0, 0, 0, 0],
];

fn print_frame(graph: &Graph, snapshot: &Snapshot, start: Point, goal: Point) {
    println!("Iteration {}:", snapshot.iterations);
    for y in (0..graph.height() as i32).rev() {
        let line: String = (0..graph.width() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if p == start {
                    'S'
                } else if p == goal {
                    'G'
                } else if snapshot.path.contains(&p) {
                    '*'
                } else if snapshot.in_frontier(p) {
                    'o'
                } else if snapshot.is_explored(p) {
                    '.'
                } else if graph.get_node(p).map_or(false, |n| n.node_type().is_blocked()) {
                    '#'
                } else {
                    ' '
                }
            })
            .collect();
        println!("|{}|", line);
    }
}

fn main() {
    let graph = Graph::new(&MAP).unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(6, 4);
    let mut pathfinder =
        Pathfinder::with_endpoints(&graph, start, goal, SearchConfig::new(SearchMode::Dijkstra))
            .unwrap();
    while !pathfinder.is_complete() {
        let snapshot = pathfinder.step().unwrap();
        print_frame(&graph, &snapshot, start, goal);
    }
    match pathfinder.distance_traveled(goal) {
        Some(d) if d.is_finite() => println!("Reached the goal, distance traveled: {}", d),
        _ => println!("The goal could not be reached"),
    }
}
