//! Topological ordering and cycle detection for the task graph.
//!
//! Depth-first traversal with three-color marking, run over predecessor
//! edges with post-order emission so every predecessor precedes its
//! successors. The traversal uses an explicit frame stack instead of
//! recursion; graphs arrive from an editing surface and recursion depth
//! would otherwise track the longest dependency chain.

use crate::error::ScheduleError;
use crate::graph::TaskGraph;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Not yet visited.
    White,
    /// On the current descent path.
    Gray,
    /// Fully processed and emitted.
    Black,
}

/// Produce a topological ordering of all task indices.
///
/// Every predecessor appears before each of its successors. Encountering an
/// in-progress node during descent signals a cycle; the error names that
/// task so the editing surface can highlight the offending edge. This must
/// run before any forward/backward pass; a pass is never attempted on a
/// cyclic graph.
pub fn topological_order_indices(graph: &TaskGraph) -> Result<Vec<usize>, ScheduleError> {
    let n = graph.len();
    let mut marks = vec![Mark::White; n];
    let mut order = Vec::with_capacity(n);

    for root in 0..n {
        if marks[root] != Mark::White {
            continue;
        }
        marks[root] = Mark::Gray;
        // (node, position of the next predecessor edge to follow)
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let preds = graph.preds(node);
            if frame.1 < preds.len() {
                let pred = preds[frame.1];
                frame.1 += 1;
                match marks[pred] {
                    Mark::White => {
                        marks[pred] = Mark::Gray;
                        stack.push((pred, 0));
                    }
                    Mark::Gray => {
                        return Err(ScheduleError::CyclicDependency(
                            graph.id(pred).to_string(),
                        ));
                    }
                    Mark::Black => {}
                }
            } else {
                marks[node] = Mark::Black;
                order.push(node);
                stack.pop();
            }
        }
    }

    Ok(order)
}
