use log::{debug, info, trace, warn};
use nalgebra as na;

use crate::collision::{ EdgeChecker, DEFAULT_EDGE_CHECK_BASE, DEFAULT_EDGE_CHECK_PRECISION };
use crate::error::{ PrmError, Result };
use crate::obstacle::ObstacleField;
use crate::roadmap::{ AdjacencyList, Roadmap, VertexIndex };
use crate::sequence::Halton;

pub const DEFAULT_NUM_VERTICES: usize = 150;
pub const DEFAULT_HALTON_BASES: (u32, u32) = (2, 3);

/// Draws allowed per requested vertex before sampling is considered hopeless.
const DEFAULT_SAMPLES_PER_VERTEX: usize = 100;

/// Configures and builds a `Roadmap` over an obstacle field.
///
/// `max_neighbors` (k) bounds how many edges a vertex tries to create during its own
/// neighbour search and `max_edge_length` (r) bounds the length of any edge. Everything
/// else has a default, see the `get_*` methods.
pub struct PrmBuilder<F> {
    field: F,
    max_neighbors: usize,
    max_edge_length: f64,
    num_vertices: Option<usize>,
    halton_bases: Option<(u32, u32)>,
    edge_check_precision: Option<f64>,
    edge_check_base: Option<u32>,
    max_samples: Option<usize>,
}

impl<F> PrmBuilder<F>
where
    F: ObstacleField,
{
    pub fn new(field: F, max_neighbors: usize, max_edge_length: f64) -> PrmBuilder<F> {
        PrmBuilder {
            field,
            max_neighbors,
            max_edge_length,
            num_vertices: None,
            halton_bases: None,
            edge_check_precision: None,
            edge_check_base: None,
            max_samples: None,
        }
    }

    pub fn with_num_vertices(mut self, num_vertices: usize) -> Self {
        self.num_vertices.replace(num_vertices);
        self
    }

    pub fn with_halton_bases(mut self, p: u32, q: u32) -> Self {
        self.halton_bases.replace((p, q));
        self
    }

    pub fn with_edge_check_precision(mut self, precision: f64) -> Self {
        self.edge_check_precision.replace(precision);
        self
    }

    pub fn with_edge_check_base(mut self, base: u32) -> Self {
        self.edge_check_base.replace(base);
        self
    }

    /// Caps the number of samples drawn while generating vertices.
    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples.replace(max_samples);
        self
    }

    pub fn get_field(&self) -> &F {
        &self.field
    }

    pub fn get_max_neighbors(&self) -> usize {
        self.max_neighbors
    }

    pub fn get_max_edge_length(&self) -> f64 {
        self.max_edge_length
    }

    pub fn get_num_vertices(&self) -> usize {
        self.num_vertices.unwrap_or(DEFAULT_NUM_VERTICES)
    }

    pub fn get_halton_bases(&self) -> (u32, u32) {
        self.halton_bases.unwrap_or(DEFAULT_HALTON_BASES)
    }

    pub fn get_edge_check_precision(&self) -> f64 {
        self.edge_check_precision
            .unwrap_or(DEFAULT_EDGE_CHECK_PRECISION)
    }

    pub fn get_edge_check_base(&self) -> u32 {
        self.edge_check_base.unwrap_or(DEFAULT_EDGE_CHECK_BASE)
    }

    pub fn get_max_samples(&self) -> usize {
        self.max_samples
            .unwrap_or_else(|| self.get_num_vertices().saturating_mul(DEFAULT_SAMPLES_PER_VERTEX))
    }

    pub fn build(self) -> Result<Roadmap> {
        let k = self.get_max_neighbors();
        let r = self.get_max_edge_length();

        if r.is_nan() || r < 0.0 {
            return Err(PrmError::InvalidRadius(r));
        }

        let (p, q) = self.get_halton_bases();
        let sampler = Halton::new(p, q)?;
        let checker = EdgeChecker::new(self.get_edge_check_precision(), self.get_edge_check_base())?;

        info!(
            "building roadmap: {} vertices, k = {}, r = {}, map {}x{}",
            self.get_num_vertices(),
            k,
            r,
            self.field.width(),
            self.field.height(),
        );

        let vertices = self.generate_vertices(sampler)?;

        if k >= vertices.len() && !vertices.is_empty() {
            warn!(
                "k = {} but only {} other vertices exist, vertices will get fewer neighbours",
                k,
                vertices.len() - 1,
            );
        }

        let mut adjacency: AdjacencyList = vec![Vec::new(); vertices.len()];
        for i in 0..vertices.len() {
            self.connect_neighbors(i, &vertices, &mut adjacency, &checker);
        }

        let roadmap = Roadmap::new(vertices, adjacency);
        self.report(&roadmap);

        Ok(roadmap)
    }

    /// Phase 1: keeps drawing Halton points, scaled to the map, until enough of them land
    /// outside every obstacle. The sequence is never rewound, rejected samples still
    /// advance it.
    fn generate_vertices(&self, sampler: Halton) -> Result<Vec<na::Point2<f64>>> {
        let target = self.get_num_vertices();
        let max_samples = self.get_max_samples();
        let scale = na::Vector2::new(self.field.width(), self.field.height());

        let mut vertices = Vec::with_capacity(target);
        let mut samples = 0;

        for fraction in sampler {
            if vertices.len() >= target {
                break;
            }
            if samples >= max_samples {
                return Err(PrmError::SamplingExhausted {
                    accepted: vertices.len(),
                    target,
                    samples,
                });
            }
            samples += 1;

            let point = na::Point2::from(fraction.coords.component_mul(&scale));
            if self.field.contains_point(&point) {
                trace!("sample ({:.2}, {:.2}) rejected, inside obstacle", point.x, point.y);
            } else {
                vertices.push(point);
            }
        }

        debug!("kept {} of {} samples", vertices.len(), samples);
        Ok(vertices)
    }

    /// Phase 2 for a single vertex: walks the other vertices from nearest to farthest,
    /// linking to each one reachable by a valid edge until `k` neighbours are held or the
    /// candidates get farther than `r`.
    ///
    /// Edges are added to both ends. The candidate's own count is not checked, so a vertex can
    /// end up with more than `k` neighbours through other vertices' searches.
    fn connect_neighbors(
        &self,
        i: VertexIndex,
        vertices: &[na::Point2<f64>],
        adjacency: &mut AdjacencyList,
        checker: &EdgeChecker,
    ) {
        let k = self.get_max_neighbors();
        let r = self.get_max_edge_length();

        if adjacency[i].len() >= k {
            return;
        }

        let origin = &vertices[i];
        let mut candidates: Vec<(VertexIndex, f64)> = vertices
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(j, p)| (j, na::distance(origin, p)))
            .collect();

        // Stable, so equally distant candidates stay in index order.
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        for (j, dist) in candidates {
            if adjacency[i].len() >= k || dist > r {
                break;
            }

            // Already linked from `j`'s own search, adding it again would duplicate the edge.
            if adjacency[i].contains(&j) {
                continue;
            }

            if checker.is_edge_valid(origin, &vertices[j], &self.field) {
                adjacency[i].push(j);
                adjacency[j].push(i);
            }
        }
    }

    fn report(&self, roadmap: &Roadmap) {
        let k = self.get_max_neighbors();
        let mut under_connected = 0;

        for i in roadmap.under_connected(k) {
            under_connected += 1;
            let p = roadmap.vertices()[i];
            debug!(
                "vertex {} at ({:.2}, {:.2}) has {} of {} neighbours",
                i,
                p.x,
                p.y,
                roadmap.degree(i),
                k,
            );
        }

        info!(
            "roadmap built: {} vertices, {} edges, {} under-connected, {} components",
            roadmap.num_vertices(),
            roadmap.num_edges(),
            under_connected,
            roadmap.num_components(),
        );
    }
}
