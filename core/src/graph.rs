// gridcell-core/src/graph.rs
// Dependency-edge maintenance: cycle detection on a tentative edit, and
// rewiring the committed refs_out/refs_in sets once an edit commits.
//
// The graph of record lives distributed across each CellNode's
// refs_out/refs_in (these are always mutual inverses). would_cycle only
// ever builds a disposable scratch subgraph, via petgraph, of the portion
// reachable from the proposed edges, never mutating the committed graph,
// so a rejected edit leaves no trace.

use hashbrown::HashMap;
use petgraph::algo::is_cyclic_directed;
use petgraph::graphmap::DiGraphMap;

use crate::node::CellNode;
use crate::position::Position;

/// Would adding edges `pos -> r` for every `r` in `new_refs` (replacing
/// `pos`'s current outgoing edges) introduce a cycle?
pub(crate) fn would_cycle(nodes: &HashMap<Position, CellNode>, pos: Position, new_refs: &[Position]) -> bool {
    // Self-reference is a cycle before we even look at the rest of the graph.
    if new_refs.contains(&pos) {
        return true;
    }

    let mut graph: DiGraphMap<Position, ()> = DiGraphMap::new();
    graph.add_node(pos);

    for &r in new_refs {
        graph.add_edge(pos, r, ());
    }

    // Extend the scratch graph with the committed edges reachable from the
    // proposed targets, so a cycle routed back through already-committed
    // formulas is caught too.
    let mut stack: Vec<Position> = new_refs.to_vec();
    let mut seen: std::collections::HashSet<Position> = new_refs.iter().copied().collect();
    while let Some(cur) = stack.pop() {
        graph.add_node(cur);
        if let Some(node) = nodes.get(&cur) {
            for &next in &node.refs_out {
                graph.add_edge(cur, next, ());
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
    }

    is_cyclic_directed(&graph)
}

/// Commit `pos`'s outgoing edges as `new_refs`, materializing any
/// newly-referenced position as `Empty` if it doesn't exist yet, and
/// dropping `pos` from the `refs_in` of anything it no longer references.
pub(crate) fn rewire(
    nodes: &mut HashMap<Position, CellNode>,
    pos: Position,
    old_refs: &std::collections::BTreeSet<Position>,
    new_refs: &[Position],
) {
    let new_set: std::collections::BTreeSet<Position> = new_refs.iter().copied().collect();

    for r in old_refs.difference(&new_set) {
        if let Some(node) = nodes.get_mut(r) {
            node.refs_in.remove(&pos);
        }
    }

    for r in new_set.difference(old_refs) {
        let node = nodes.entry(*r).or_insert_with(CellNode::empty);
        node.refs_in.insert(pos);
    }

    nodes.entry(pos).or_insert_with(CellNode::empty).refs_out = new_set;
}
