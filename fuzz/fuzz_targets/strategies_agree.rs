#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    algo::{ConnectedComponents, Cycle, StronglyConnectedComponents, TopoSort},
    infra::arbitrary::MutOpsSeq,
    Graph,
};

fuzz_target!(|input: (bool, MutOpsSeq)| {
    let (directed, ops) = input;
    let mut graph = Graph::new(directed);

    for op in ops {
        op.apply(&mut graph);
    }

    for node in graph.nodes() {
        assert_eq!(graph.dfs(node), graph.recursive_dfs(node));
    }

    assert_eq!(
        ConnectedComponents::on(&graph).iterative().run(),
        ConnectedComponents::on(&graph).recursive().run()
    );
    assert_eq!(
        StronglyConnectedComponents::on(&graph).iterative().run(),
        StronglyConnectedComponents::on(&graph).recursive().run()
    );
    assert_eq!(
        TopoSort::on(&graph).iterative().run(),
        TopoSort::on(&graph).recursive().run()
    );
    assert_eq!(
        Cycle::on(&graph).iterative().run(),
        Cycle::on(&graph).recursive().run()
    );
});
