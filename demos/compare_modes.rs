use grid_util::point::Point;
use stepwise_pathfinding::{path_cost, EarlyExit, Graph, Pathfinder, SearchConfig, SearchMode};

// Runs every search mode on the same terrain map and compares how much each one explored
// against the cost of the path it produced.
fn main() {
    let rows: Vec<Vec<u8>> = vec![
        vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 2, 2, 3, 3, 3, 2, 2, 0, 0],
        vec![0, 2, 1, 1, 1, 1, 1, 2, 0, 0],
        vec![0, 3, 1, 0, 0, 0, 1, 4, 4, 0],
        vec![0, 3, 4, 4, 4, 0, 0, 4, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 0, 0],
    ];
    let graph = Graph::new(&rows).unwrap();
    println!("{}", graph);
    let start = Point::new(0, 0);
    let goal = Point::new(4, 3);
    for mode in SearchMode::ALL {
        for early_exit in [EarlyExit::OnDiscovery, EarlyExit::OnSettled] {
            let config = SearchConfig::new(mode).with_early_exit(early_exit);
            let mut pathfinder = Pathfinder::with_endpoints(&graph, start, goal, config).unwrap();
            let snapshot = pathfinder.run_to_completion().unwrap();
            println!(
                "{:>18} {:?}: {} iterations, {} explored, path of {} nodes costing {:?}",
                mode.to_string(),
                early_exit,
                snapshot.iterations,
                snapshot.explored_len(),
                snapshot.path.len(),
                path_cost(&graph, snapshot.path)
            );
        }
    }
}
