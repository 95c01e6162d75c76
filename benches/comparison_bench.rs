use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{
    generate_maze,
    solver::{
        astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, dijkstra::DijkstraSolver,
        GridSolver,
    },
    Coordinate, Grid, MazeAlgorithm,
};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

const ROWS: usize = 41;
const COLS: usize = 61;
const START: Coordinate = Coordinate::new(0, 0);
const END: Coordinate = Coordinate::new(ROWS - 1, COLS - 1);

fn maze_grid(algorithm: MazeAlgorithm) -> Grid {
    let mut rng = StdRng::seed_from_u64(0);
    let mut grid = Grid::with_destinations(ROWS, COLS, START, END).unwrap();
    let maze = generate_maze(algorithm, &grid, START, END, &mut rng).unwrap();
    grid.splice(&maze);
    grid
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    for algorithm in [MazeAlgorithm::BacktrackingIterative, MazeAlgorithm::Prim] {
        let grid = maze_grid(algorithm);
        c.bench_function(
            format!("{algorithm} {ROWS}x{COLS}, {solver_name}").as_str(),
            |b| b.iter(|| black_box(solver.solve(&grid, START, END))),
        );
    }
    let open = Grid::with_destinations(ROWS, COLS, START, END).unwrap();
    c.bench_function(
        format!("open {ROWS}x{COLS}, {solver_name}").as_str(),
        |b| b.iter(|| black_box(solver.solve(&open, START, END))),
    );
}

fn bench_dijkstra(c: &mut Criterion) {
    bench_solver(c, "Dijkstra", DijkstraSolver);
}

fn bench_astar(c: &mut Criterion) {
    bench_solver(c, "Astar", AstarSolver::new());
}

fn bench_bfs(c: &mut Criterion) {
    bench_solver(c, "BFS", BfsSolver);
}

fn bench_dfs(c: &mut Criterion) {
    bench_solver(c, "DFS", DfsSolver);
}

fn bench_generation(c: &mut Criterion) {
    let grid = Grid::with_destinations(ROWS, COLS, START, END).unwrap();
    for algorithm in MazeAlgorithm::ALL {
        let mut rng = StdRng::seed_from_u64(0);
        c.bench_function(format!("generate {algorithm} {ROWS}x{COLS}").as_str(), |b| {
            b.iter(|| black_box(generate_maze(algorithm, &grid, START, END, &mut rng)))
        });
    }
}

criterion_group!(
    benches,
    bench_dijkstra,
    bench_astar,
    bench_bfs,
    bench_dfs,
    bench_generation,
);
criterion_main!(benches);
