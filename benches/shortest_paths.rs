mod common;

use common::{grafo_random, to_petgraph, RANDOM_SEED};
use fastrand::Rng;
use grafo::{
    algo::{AllPairs, ShortestPaths},
    core::marker::Directed,
};
use petgraph::graph::NodeIndex;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn grafo_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f64) {
    let graph = grafo_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ShortestPaths::on(&graph).dijkstra().run(0));
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn petgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f64) {
    let graph = to_petgraph(&grafo_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED)));
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn grafo_bellman_ford_random<const N: usize>(bencher: divan::Bencher, density: f64) {
    let graph = grafo_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ShortestPaths::on(&graph).bellman_ford().run(0));
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn petgraph_bellman_ford_random<const N: usize>(bencher: divan::Bencher, density: f64) {
    let graph = to_petgraph(&grafo_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED)));
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::bellman_ford(&graph, start));
}

#[divan::bench(consts = [50, 200], args = [0.25])]
fn grafo_johnson_random<const N: usize>(bencher: divan::Bencher, density: f64) {
    let graph = grafo_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| AllPairs::on(&graph).run());
}
