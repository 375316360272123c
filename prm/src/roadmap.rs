use std::collections::VecDeque;

use nalgebra as na;

pub type VertexIndex = usize;

/// Neighbour lists indexed by vertex, in the order the edges were accepted.
pub type AdjacencyList = Vec<Vec<VertexIndex>>;

/// A finished probabilistic roadmap. Only `PrmBuilder` creates these; once handed out the
/// roadmap is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Roadmap {
    vertices: Vec<na::Point2<f64>>,
    adjacency: AdjacencyList,
}

impl Roadmap {
    pub(crate) fn new(vertices: Vec<na::Point2<f64>>, adjacency: AdjacencyList) -> Self {
        debug_assert_eq!(vertices.len(), adjacency.len());
        Roadmap {
            vertices,
            adjacency,
        }
    }

    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline(always)]
    pub fn vertices(&self) -> &[na::Point2<f64>] {
        self.vertices.as_slice()
    }

    pub fn vertex(&self, index: VertexIndex) -> Option<&na::Point2<f64>> {
        self.vertices.get(index)
    }

    /// Neighbours of `index`. Out of range indices have no neighbours.
    pub fn neighbors(&self, index: VertexIndex) -> &[VertexIndex] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline(always)]
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    pub fn degree(&self, index: VertexIndex) -> usize {
        self.neighbors(index).len()
    }

    /// Every undirected edge exactly once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |&&v| u < v)
                    .map(move |&v| (u, v))
            })
    }

    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Vertices that ended up with fewer than `k` neighbours.
    pub fn under_connected(&self, k: usize) -> impl Iterator<Item = VertexIndex> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(move |(_, neighbors)| neighbors.len() < k)
            .map(|(i, _)| i)
    }

    /// Labels each vertex with the index of its connected component. Components are numbered
    /// in order of their lowest vertex.
    pub fn connected_components(&self) -> Vec<usize> {
        let mut labels: Vec<Option<usize>> = vec![None; self.num_vertices()];
        let mut next_label = 0;
        let mut queue = VecDeque::new();

        for start in 0..self.num_vertices() {
            if labels[start].is_some() {
                continue;
            }

            labels[start] = Some(next_label);
            queue.push_back(start);

            while let Some(curr) = queue.pop_front() {
                for &neighbor in &self.adjacency[curr] {
                    if labels[neighbor].is_none() {
                        labels[neighbor] = Some(next_label);
                        queue.push_back(neighbor);
                    }
                }
            }

            next_label += 1;
        }

        labels.into_iter().flatten().collect()
    }

    pub fn num_components(&self) -> usize {
        self.connected_components()
            .iter()
            .max()
            .map_or(0, |&max| max + 1)
    }
}
