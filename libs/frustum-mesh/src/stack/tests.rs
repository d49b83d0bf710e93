//! Tests for the stack assembler.

use super::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use config::constants::NORMAL_TOLERANCE;
use glam::DVec3;

fn stack(sides: u32, segments: &[(f64, f64, f64)]) -> StackConfig {
    let segments = segments
        .iter()
        .map(|&(h, r1, r2)| Segment::new(h, r1, r2))
        .collect();
    StackConfig::new(sides, segments).unwrap()
}

/// Outward direction of a lateral face: away from the Y axis.
fn radial(point: DVec3) -> DVec3 {
    DVec3::new(point.x, 0.0, point.z)
}

fn centroid(mesh: &Mesh, tri: [u32; 3]) -> DVec3 {
    (mesh.vertex(tri[0]) + mesh.vertex(tri[1]) + mesh.vertex(tri[2])) / 3.0
}

// =============================================================================
// COUNTS
// =============================================================================

#[test]
fn test_single_cylinder_counts() {
    let mesh = build_stack(&stack(4, &[(2.0, 1.0, 1.0)]));
    assert_eq!(mesh.vertex_count(), 10);
    assert_eq!(mesh.normals().len(), 10);
    assert_eq!(mesh.triangle_count(), 16);
    assert!(mesh.validate());
}

#[test]
fn test_default_stack_counts() {
    let mesh = build_stack(&StackConfig::default());
    assert_eq!(mesh.vertex_count(), 18);
    assert_eq!(mesh.triangle_count(), 32);
    assert!(mesh.validate());
}

#[test]
fn test_multi_segment_counts() {
    for sides in [3, 7, 36] {
        let config = stack(sides, &[(1.0, 1.0, 0.9), (2.0, 0.9, 0.5), (0.5, 0.5, 0.0)]);
        let mesh = build_stack(&config);
        let n = sides as usize;
        assert_eq!(mesh.vertex_count(), 3 * 2 * n + 2);
        assert_eq!(mesh.triangle_count(), 3 * 2 * n + 2 * n);
        assert_eq!(mesh.vertex_count(), config.expected_vertex_count());
        assert_eq!(mesh.triangle_count(), config.expected_triangle_count());
        assert!(mesh.validate());
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

#[test]
fn test_default_stack_layout() {
    let mesh = build_stack(&StackConfig::default());

    // rings first, then bottom center, then top center
    assert_relative_eq!(mesh.vertex(0).x, 1.0);
    assert_eq!(mesh.vertex(0).y, 0.0);
    assert_relative_eq!(mesh.vertex(8).x, 0.8);
    assert_eq!(mesh.vertex(8).y, 6.0);
    assert_eq!(mesh.vertex(16), DVec3::ZERO);
    assert_eq!(mesh.normal(16), DVec3::NEG_Y);
    assert_eq!(mesh.vertex(17), DVec3::new(0.0, 6.0, 0.0));
    assert_eq!(mesh.normal(17), DVec3::Y);

    assert_eq!(mesh.triangle(0), [0, 8, 1]);
    assert_eq!(mesh.triangle(1), [1, 8, 9]);
    assert_eq!(mesh.triangle(15), [0, 15, 8]);
    assert_eq!(mesh.triangle(16), [16, 0, 1]);
    assert_eq!(mesh.triangle(24), [17, 9, 8]);
}

#[test]
fn test_segments_stack_without_gap() {
    let mesh = build_stack(&stack(5, &[(1.5, 1.0, 1.0), (2.0, 0.5, 0.5)]));
    let n = 5;

    // segment 0: rings 0..10, bottom center 10
    // segment 1: rings 11..21, top center 21
    assert!((0..n).all(|i| mesh.vertex(i).y == 0.0));
    assert!((n..2 * n).all(|i| mesh.vertex(i).y == 1.5));
    assert!((2 * n + 1..3 * n + 1).all(|i| mesh.vertex(i).y == 1.5));
    assert!((3 * n + 1..4 * n + 1).all(|i| mesh.vertex(i).y == 3.5));
    assert_eq!(mesh.vertex(2 * n), DVec3::ZERO);
    assert_eq!(mesh.vertex(4 * n + 1), DVec3::new(0.0, 3.5, 0.0));

    let (min, max) = mesh.bounding_box();
    assert_eq!(min.y, 0.0);
    assert_eq!(max.y, 3.5);
}

#[test]
fn test_seam_between_segments_left_open() {
    let n = 6u32;
    let mesh = build_stack(&stack(n, &[(1.0, 1.0, 1.0), (1.0, 0.5, 0.5)]));

    // indices below 2n + 1 belong to the first segment (rings + bottom center)
    let block = |i: u32| i < 2 * n + 1;
    for tri in mesh.triangles() {
        let first = block(tri[0]);
        assert!(
            tri.iter().all(|&i| block(i) == first),
            "face {:?} spans two segments",
            tri
        );
    }
}

// =============================================================================
// NORMALS
// =============================================================================

#[test]
fn test_normals_are_unit() {
    let mesh = build_stack(&stack(
        9,
        &[(1.0, 2.0, 1.0), (3.0, 1.0, 1.0), (0.25, 1.0, 3.0), (2.0, 3.0, 0.0)],
    ));
    assert!(mesh.normals_are_unit());
    for n in mesh.normals() {
        assert_relative_eq!(n.length(), 1.0, epsilon = NORMAL_TOLERANCE);
    }
}

#[test]
fn test_cylinder_normals_horizontal() {
    let mesh = build_stack(&stack(12, &[(4.0, 1.5, 1.5)]));
    for i in 0..24 {
        let n = mesh.normal(i);
        assert_eq!(n.y, 0.0);
        // points away from the axis through its own vertex
        let v = mesh.vertex(i);
        assert_relative_eq!(n.dot(radial(v).normalize()), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_frustum_normals_share_slope() {
    let mesh = build_stack(&stack(8, &[(4.0, 4.0, 1.0)]));
    for i in 0..16 {
        assert_relative_eq!(mesh.normal(i).y, 0.6, epsilon = 1e-12);
    }
}

#[test]
fn test_zero_height_equal_radii_does_not_panic() {
    let mesh = build_stack(&stack(4, &[(0.0, 1.0, 1.0)]));
    assert_eq!(mesh.vertex_count(), 10);
    assert!(mesh.validate());
    // slope normal collapses to zero and is stored unnormalized
    assert_eq!(mesh.normal(0), DVec3::ZERO);
    assert!(mesh.normals().iter().all(|n| n.is_finite()));
}

// =============================================================================
// WINDING
// =============================================================================

fn is_cap_center(mesh: &Mesh, index: u32) -> bool {
    let n = mesh.normal(index);
    n.x == 0.0 && n.z == 0.0 && n.y.abs() == 1.0
}

fn assert_outward(mesh: &Mesh, check_vertex_normals: bool) {
    for (t, &tri) in mesh.triangles().iter().enumerate() {
        let normal = mesh.face_normal(t);
        if normal.length() < 1e-12 {
            continue;
        }

        if is_cap_center(mesh, tri[0]) {
            let facing = mesh.normal(tri[0]).y;
            assert!(normal.y * facing > 0.0, "cap face {} points the wrong way", t);
        } else {
            let c = centroid(mesh, tri);
            assert!(normal.dot(radial(c)) > 0.0, "lateral face {} faces inward", t);
            if check_vertex_normals {
                assert!(normal.dot(mesh.normal(tri[0])) > 0.0);
            }
        }
    }
}

#[test]
fn test_winding_outward_cylinder() {
    let mesh = build_stack(&stack(8, &[(2.0, 1.0, 1.0)]));
    assert_outward(&mesh, true);
}

#[test]
fn test_winding_outward_frustums() {
    let mesh = build_stack(&stack(
        7,
        &[(1.0, 2.0, 1.0), (2.0, 0.5, 1.5), (1.0, 1.0, 1.0)],
    ));
    assert_outward(&mesh, true);
}

#[test]
fn test_winding_outward_cones() {
    // apex at the top, then apex at the bottom
    let mesh = build_stack(&stack(6, &[(2.0, 1.0, 0.0), (2.0, 0.0, 1.0)]));
    assert!(mesh.validate());
    assert_outward(&mesh, true);
}

#[test]
fn test_winding_outward_negative_radii() {
    // rings are rotated by half a turn, so only face winding is checked
    let mesh = build_stack(&stack(5, &[(1.0, -1.0, -0.5)]));
    assert_outward(&mesh, false);
}

#[test]
fn test_negative_height_passes_through() {
    let mesh = build_stack(&stack(4, &[(2.0, 1.0, 1.0), (-1.0, 1.0, 1.0)]));
    assert_eq!(mesh.vertex_count(), 18);
    assert!(mesh.validate());
    let top_center = mesh.vertex(17);
    assert_abs_diff_eq!(top_center.y, 1.0);
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_build_is_deterministic() {
    let config = stack(11, &[(1.0, 1.0, 0.7), (3.0, 0.7, 0.7)]);
    assert_eq!(build_stack(&config), build_stack(&config));
}
