use grid_util::point::Point;
use stepwise_pathfinding::{
    path_cost, EarlyExit, Graph, NodeType, Pathfinder, SearchConfig, SearchMode,
};

// y = 2 |     |
// y = 1 |S444G|
// y = 0 |     |
fn heavy_corridor() -> Graph {
    Graph::new(&[[0u8, 0, 0, 0, 0], [0, 4, 4, 4, 0], [0, 0, 0, 0, 0]]).unwrap()
}

fn run(graph: &Graph, start: Point, goal: Point, config: SearchConfig) -> (Vec<Point>, f32) {
    let mut pathfinder = Pathfinder::with_endpoints(graph, start, goal, config).unwrap();
    pathfinder.run_to_completion().unwrap();
    let distance = pathfinder.distance_traveled(goal).unwrap();
    (pathfinder.path().to_vec(), distance)
}

#[test]
fn open_three_by_three_diagonal() {
    let graph = Graph::new(&vec![vec![0u8; 3]; 3]).unwrap();
    let (path, distance) = run(
        &graph,
        Point::new(0, 0),
        Point::new(2, 2),
        SearchConfig::new(SearchMode::Dijkstra),
    );
    assert_eq!(path.len(), 3);
    assert!((distance - 2.8).abs() < 1e-5);
    assert!((path_cost(&graph, &path).unwrap() - 2.8).abs() < 1e-5);
}

#[test]
fn dijkstra_walks_around_heavy_terrain() {
    let graph = heavy_corridor();
    let config = SearchConfig::new(SearchMode::Dijkstra).with_early_exit(EarlyExit::OnSettled);
    let (path, distance) = run(&graph, Point::new(0, 1), Point::new(4, 1), config);
    assert!((distance - 4.8).abs() < 1e-5);
    assert!(path
        .iter()
        .all(|p| graph.get_node(*p).unwrap().node_type() != NodeType::HeavyTerrain));
}

#[test]
fn greedy_heads_straight_through_heavy_terrain() {
    let graph = heavy_corridor();
    let config = SearchConfig::new(SearchMode::GreedyBestFirst);
    let (path, distance) = run(&graph, Point::new(0, 1), Point::new(4, 1), config);
    let expected: Vec<Point> = (0..5).map(|x| Point::new(x, 1)).collect();
    assert_eq!(path, expected);
    assert!((distance - 13.0).abs() < 1e-5);
}

#[test]
fn breadth_first_finds_fewest_steps() {
    let graph = heavy_corridor();
    let config = SearchConfig::new(SearchMode::BreadthFirstSearch);
    let (path, _) = run(&graph, Point::new(0, 1), Point::new(4, 1), config);
    assert_eq!(path.len(), 5);
}

/// One graph can back several runs; none of them writes to it.
#[test]
fn graph_is_shared_between_runs() {
    let graph = heavy_corridor();
    let start = Point::new(0, 0);
    let goal = Point::new(4, 2);
    let mut runs: Vec<Pathfinder> = SearchMode::ALL
        .iter()
        .map(|&mode| Pathfinder::with_endpoints(&graph, start, goal, SearchConfig::new(mode)).unwrap())
        .collect();
    // Interleave the runs one step at a time.
    while runs.iter().any(|r| !r.is_complete()) {
        for run in runs.iter_mut().filter(|r| !r.is_complete()) {
            run.step().unwrap();
        }
    }
    for run in &runs {
        assert_eq!(run.path().first(), Some(&start));
        assert_eq!(run.path().last(), Some(&goal));
    }
}
