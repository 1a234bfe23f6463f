use anyhow::{Result, ensure};

/// Line-segment mesh: vertex positions plus edge index pairs.
///
/// Invariant: every edge index references a vertex in `positions`.
/// [`WireMesh::new`] enforces it once at construction so the renderer can
/// upload the arrays without re-checking.
#[derive(Debug, Clone)]
pub struct WireMesh {
    positions: Vec<[f32; 3]>,
    edges: Vec<[u32; 2]>,
}

impl WireMesh {
    pub fn new(positions: Vec<[f32; 3]>, edges: Vec<[u32; 2]>) -> Result<Self> {
        let vertex_count = positions.len() as u32;
        for (i, edge) in edges.iter().enumerate() {
            ensure!(
                edge[0] < vertex_count && edge[1] < vertex_count,
                "edge {i} ({}, {}) references a vertex outside 0..{vertex_count}",
                edge[0],
                edge[1],
            );
        }
        Ok(Self { positions, edges })
    }

    /// Axis-aligned cube centered on the origin: 8 corners at
    /// `±half_extent`, 12 edges.
    pub fn cube(half_extent: f32) -> Self {
        let h = half_extent;
        let positions = vec![
            [-h, -h, -h], // 0
            [h, -h, -h],  // 1
            [h, -h, h],   // 2
            [-h, -h, h],  // 3
            [-h, h, -h],  // 4
            [h, h, -h],   // 5
            [h, h, h],    // 6
            [-h, h, h],   // 7
        ];
        let edges = vec![
            // bottom face
            [0, 1],
            [1, 2],
            [2, 3],
            [3, 0],
            // verticals
            [0, 4],
            [1, 5],
            [2, 6],
            [3, 7],
            // top face
            [4, 5],
            [5, 6],
            [6, 7],
            [7, 4],
        ];
        Self { positions, edges }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Number of line-list indices (two per edge).
    pub fn index_count(&self) -> u32 {
        (self.edges.len() * 2) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_expected_topology() {
        let cube = WireMesh::cube(0.9);
        assert_eq!(cube.positions().len(), 8);
        assert_eq!(cube.edges().len(), 12);
        assert_eq!(cube.index_count(), 24);

        // Every edge spans exactly one axis of the cube.
        for edge in cube.edges() {
            let a = cube.positions()[edge[0] as usize];
            let b = cube.positions()[edge[1] as usize];
            let differing = (0..3).filter(|&i| a[i] != b[i]).count();
            assert_eq!(differing, 1, "edge {edge:?} is not axis-aligned");
        }
    }

    #[test]
    fn new_accepts_in_range_edges() {
        let mesh = WireMesh::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            vec![[0, 1]],
        )
        .unwrap();
        assert_eq!(mesh.index_count(), 2);
    }

    #[test]
    fn new_rejects_out_of_range_edge() {
        let err = WireMesh::new(vec![[0.0; 3], [1.0, 0.0, 0.0]], vec![[0, 2]]);
        assert!(err.is_err());
    }
}
