use adjgraph::{
    algo::TreeHierarchy,
    visit::{ParseTraversalError, Traversal},
    Graph,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Stands in for the canvas: hands out fresh identifiers on every click.
#[derive(Default)]
struct Canvas {
    counter: usize,
    graph: Graph<String>,
}

impl Canvas {
    fn click_empty_space(&mut self) -> String {
        let id = format!("node_{}", self.counter);
        self.counter += 1;
        self.graph.add_node(id.clone());
        id
    }

    fn drag(&mut self, src: &str, dst: &str) {
        self.graph.add_edge(&src.to_owned(), &dst.to_owned());
    }
}

fn format_groups(groups: &[Vec<String>]) -> String {
    groups
        .iter()
        .map(|group| format!("[{}]", group.join(", ")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), ParseTraversalError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // The menu label, e.g. "BFS", "DFS" or "Recursive DFS".
    let traversal = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Traversal::Bfs.label().to_owned())
        .parse::<Traversal>()?;

    let mut canvas = Canvas::default();
    let nodes = (0..7)
        .map(|_| canvas.click_empty_space())
        .collect::<Vec<_>>();

    for (src, dst) in [(0, 1), (1, 2), (1, 3), (3, 4), (5, 6)] {
        canvas.drag(&nodes[src], &nodes[dst]);
    }

    let graph = &canvas.graph;
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "canvas ready");

    let order = graph.traverse(traversal, &nodes[0]);
    println!("{traversal} from {}: {}", nodes[0], order.join(" -> "));
    println!(
        "connected components: {}",
        format_groups(&graph.find_connected_components())
    );
    println!("cycle: {}", graph.is_cycle());
    println!("tree: {}", graph.is_tree());

    // Joining the two pieces makes the drawing a tree.
    canvas.drag(&nodes[4], &nodes[5]);
    let graph = &canvas.graph;
    println!("tree after joining: {}", graph.is_tree());

    let center = graph.find_tree_center();
    println!("center: {}", center.join(", "));

    if let Some(hierarchy) = center
        .first()
        .and_then(|root| TreeHierarchy::rooted_at(graph, root))
    {
        for node in hierarchy.iter() {
            let depth = hierarchy.depth(node).unwrap_or_default();
            println!("{}{node}", "  ".repeat(depth));
        }
    }

    // Switching to a directed drawing.
    let mut directed = Graph::new_directed();
    directed.extend_with_nodes(nodes.iter().cloned());
    for (src, dst) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3), (5, 6)] {
        directed.add_edge(&nodes[src], &nodes[dst]);
    }

    println!(
        "strongly connected components: {}",
        format_groups(&directed.kosaraju())
    );

    canvas.graph.delete_node(&nodes[3]);
    println!(
        "after deleting {}: {}",
        nodes[3],
        format_groups(&canvas.graph.find_connected_components())
    );

    Ok(())
}
