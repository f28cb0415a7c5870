#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generator of random edges with given density.
///
/// Every generated edge goes from a larger node to a smaller one, so a
/// directed graph built from them is acyclic.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(node_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: node_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn adjgraph_random(
    node_count: usize,
    density: f32,
    directed: bool,
    rng: &mut Rng,
) -> adjgraph::Graph<u32> {
    let mut graph = adjgraph::Graph::with_capacity(directed, node_count);
    graph.extend_with_nodes(0..node_count as u32);

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&(u as u32), &(v as u32));
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    node_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, (), Ty> {
    let mut graph = petgraph::Graph::with_capacity(node_count, 0);

    for id in 0..node_count {
        graph.add_node(id as u32);
    }

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}
