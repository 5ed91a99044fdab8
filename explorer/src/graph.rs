//! Relationship graph
//!
//! Edges come from rows that name a relationship target. Self-loops are
//! dropped, and large edge sets are cut down to a seeded uniform sample so a
//! given filter selection always draws the same graph.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::palette::{house_color, relationship_color, NEUTRAL_COLOR};
use crate::record::{CharacterRecord, UNKNOWN_LABEL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    pub house: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub relationship: Option<String>,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Edges available before sampling
    pub total_edges: usize,
    pub sampled: bool,
}

/// Rows that encode an edge to a different character
pub fn edges<'a, I>(rows: I) -> Vec<&'a CharacterRecord>
where
    I: IntoIterator<Item = &'a CharacterRecord>,
{
    rows.into_iter().filter(|r| r.is_edge()).collect()
}

/// Uniform sample of `cap` items drawn with `seed`, kept in input order.
/// Inputs at or under the cap come back unchanged.
pub fn sample_edges<T>(items: Vec<T>, cap: usize, seed: u64) -> Vec<T> {
    if items.len() <= cap {
        return items;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = rand::seq::index::sample(&mut rng, items.len(), cap).into_vec();
    picked.sort_unstable();

    let mut picked = picked.into_iter().peekable();
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            if picked.peek() == Some(&i) {
                picked.next();
                Some(item)
            } else {
                None
            }
        })
        .collect()
}

/// Build the graph for a filtered view.
///
/// `all_rows` is the full table and only supplies each node's house (from the
/// name's first row), so targets outside the view are still coloured.
pub fn build_graph(
    all_rows: &[CharacterRecord],
    view: &[&CharacterRecord],
    cap: usize,
    seed: u64,
) -> RelationshipGraph {
    let candidates = edges(view.iter().copied());
    let total_edges = candidates.len();
    let chosen = sample_edges(candidates, cap, seed);
    let sampled = chosen.len() < total_edges;

    let mut houses: HashMap<&str, &str> = HashMap::new();
    for row in all_rows {
        houses.entry(row.name.as_str()).or_insert_with(|| row.house_label());
    }
    let house_of = |name: &str| houses.get(name).copied().unwrap_or(UNKNOWN_LABEL);

    let mut seen = HashSet::new();
    let mut nodes = Vec::new();
    let mut graph_edges = Vec::with_capacity(chosen.len());

    for row in chosen {
        // is_edge() guarantees the target is present
        let Some(target) = row.relationship_target.as_deref() else {
            continue;
        };

        for name in [row.name.as_str(), target] {
            if seen.insert(name) {
                let house = house_of(name);
                nodes.push(GraphNode {
                    name: name.to_string(),
                    house: house.to_string(),
                    color: house_color(house).to_string(),
                });
            }
        }

        graph_edges.push(GraphEdge {
            source: row.name.clone(),
            target: target.to_string(),
            relationship: row.relationship_type.clone(),
            color: row
                .relationship_type
                .as_deref()
                .map(relationship_color)
                .unwrap_or(NEUTRAL_COLOR)
                .to_string(),
        });
    }

    debug!(
        "Relationship graph: {} nodes, {} of {} edges",
        nodes.len(),
        graph_edges.len(),
        total_edges
    );

    RelationshipGraph {
        nodes,
        edges: graph_edges,
        total_edges,
        sampled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, target: &str, rel: &str) -> CharacterRecord {
        CharacterRecord {
            relationship_target: Some(target.to_string()),
            relationship_type: Some(rel.to_string()),
            ..CharacterRecord::new(source)
        }
    }

    fn many_edges(count: usize) -> Vec<CharacterRecord> {
        (0..count)
            .map(|i| edge(&format!("Sardaukar {i}"), "Shaddam IV", "Servant"))
            .collect()
    }

    #[test]
    fn test_self_loops_dropped() {
        let rows = vec![
            edge("Paul", "Paul", "Self"),
            edge("Paul", "Chani", "Spouse"),
            CharacterRecord::new("Stilgar"),
        ];
        let found = edges(&rows);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].relationship_target.as_deref(), Some("Chani"));
    }

    #[test]
    fn test_small_sets_not_sampled() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(sample_edges(items.clone(), 50, 42), items);
        assert_eq!(sample_edges(items.clone(), 10, 42), items);
    }

    #[test]
    fn test_sampling_is_reproducible() {
        let items: Vec<u32> = (0..200).collect();
        let first = sample_edges(items.clone(), 50, 42);
        let second = sample_edges(items.clone(), 50, 42);

        assert_eq!(first.len(), 50);
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));

        let unique: HashSet<_> = first.iter().collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_graph_caps_edges() {
        let rows = many_edges(120);
        let view: Vec<&CharacterRecord> = rows.iter().collect();

        let graph = build_graph(&rows, &view, 50, 42);
        assert_eq!(graph.total_edges, 120);
        assert_eq!(graph.edges.len(), 50);
        assert!(graph.sampled);
        assert_eq!(graph, build_graph(&rows, &view, 50, 42));
        assert!(graph.edges.iter().all(|e| e.source != e.target));
    }

    #[test]
    fn test_node_colors_from_first_row() {
        let mut paul = edge("Paul", "Chani", "Spouse");
        paul.house = Some("House Atreides".into());
        let mut later = CharacterRecord::new("Paul");
        later.house = Some("Fremen".into());
        let rows = vec![paul, later];
        let view: Vec<&CharacterRecord> = rows.iter().collect();

        let graph = build_graph(&rows, &view, 50, 42);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].house, "House Atreides");
        assert_eq!(graph.nodes[0].color, house_color("House Atreides"));
        // Chani has no row of her own
        assert_eq!(graph.nodes[1].house, UNKNOWN_LABEL);
        assert_eq!(graph.nodes[1].color, NEUTRAL_COLOR);
        assert_eq!(graph.edges[0].color, relationship_color("Spouse"));
        assert!(!graph.sampled);
    }

    #[test]
    fn test_empty_view() {
        let graph = build_graph(&[], &[], 50, 42);
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert_eq!(graph.total_edges, 0);
    }
}
