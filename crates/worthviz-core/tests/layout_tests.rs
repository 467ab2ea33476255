// Host-side tests for the layout generator: exact positions for the regular
// layouts, radius/facing properties for the curved ones.

use glam::Vec3;
use worthviz_core::{
    layout_placement, look_at_rotation, rotation_matrix, Layout, LayoutTargets, GRID_LAYER_PITCH,
    HELIX_DROP_PER_ITEM, HELIX_RADIUS, HELIX_TOP_Y, SPHERE_RADIUS, TABLE_COLUMN_PITCH,
    TABLE_ROW_PITCH,
};

#[test]
fn table_positions_follow_column_and_row_pitch() {
    let total = 50;
    for i in 0..total {
        let p = layout_placement(Layout::Table, i, total);
        let expected_x = (i % 20) as f32 * TABLE_COLUMN_PITCH - 1600.0;
        let expected_y = -((i / 20) as f32) * TABLE_ROW_PITCH + 900.0;
        assert_eq!(p.position.x, expected_x, "x at index {i}");
        assert_eq!(p.position.y, expected_y, "y at index {i}");
        assert_eq!(p.position.z, 0.0, "z at index {i}");
        assert_eq!(p.rotation, Vec3::ZERO, "table panels stay unrotated");
    }
    // neighbors on one row share y and sit one column pitch apart
    let a = layout_placement(Layout::Table, 7, total);
    let b = layout_placement(Layout::Table, 8, total);
    assert_eq!(a.position.y, b.position.y);
    assert_eq!(b.position.x - a.position.x, TABLE_COLUMN_PITCH);
}

#[test]
fn three_item_table_lands_on_one_row() {
    let positions: Vec<Vec3> = (0..3)
        .map(|i| layout_placement(Layout::Table, i, 3).position)
        .collect();
    assert_eq!(positions[0], Vec3::new(-1600.0, 900.0, 0.0));
    assert_eq!(positions[1], Vec3::new(-1440.0, 900.0, 0.0));
    assert_eq!(positions[2], Vec3::new(-1280.0, 900.0, 0.0));
}

#[test]
fn sphere_positions_sit_on_the_radius() {
    let total = 100;
    for i in 0..total {
        let p = layout_placement(Layout::Sphere, i, total);
        let r = p.position.length();
        assert!(
            (r - SPHERE_RADIUS).abs() < 0.5,
            "index {i} sits at radius {r}, expected {SPHERE_RADIUS}"
        );
    }
}

#[test]
fn sphere_panels_face_outward() {
    let total = 32;
    for i in 0..total {
        let p = layout_placement(Layout::Sphere, i, total);
        let facing = rotation_matrix(p.rotation).z_axis;
        let outward = p.position.normalize();
        assert!(
            facing.dot(outward) > 0.999,
            "index {i}: panel normal {facing:?} is not outward {outward:?}"
        );
    }
}

#[test]
fn helix_drops_per_item_and_keeps_radius() {
    let total = 40;
    for i in 0..total {
        let p = layout_placement(Layout::Helix, i, total);
        let expected_y = -(i as f32) * HELIX_DROP_PER_ITEM + HELIX_TOP_Y;
        assert_eq!(p.position.y, expected_y, "y at index {i}");
        let r = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
        assert!(
            (r - HELIX_RADIUS).abs() < 0.1,
            "index {i} sits at horizontal radius {r}"
        );
        // the look target is level with the panel, so facing stays horizontal
        let facing = rotation_matrix(p.rotation).z_axis;
        assert!(facing.y.abs() < 1e-4, "index {i} tilts vertically: {facing:?}");
    }
}

#[test]
fn grid_wraps_on_five_by_four_layers() {
    let total = 60;
    let p0 = layout_placement(Layout::Grid, 0, total).position;
    assert_eq!(p0, Vec3::new(-800.0, 600.0, -1000.0));
    // column wraps every 5
    let p4 = layout_placement(Layout::Grid, 4, total).position;
    let p5 = layout_placement(Layout::Grid, 5, total).position;
    assert_eq!(p4.x, 800.0);
    assert_eq!(p5.x, -800.0);
    assert_eq!(p5.y, 200.0);
    // row wraps every 4 rows = 20 items, stepping one layer deeper
    for i in 0..(total - 20) {
        let near = layout_placement(Layout::Grid, i, total).position;
        let deep = layout_placement(Layout::Grid, i + 20, total).position;
        assert_eq!(near.x, deep.x, "x should repeat every 20 at index {i}");
        assert_eq!(near.y, deep.y, "y should repeat every 20 at index {i}");
        assert_eq!(
            deep.z - near.z,
            GRID_LAYER_PITCH,
            "z should step one layer at index {i}"
        );
    }
}

#[test]
fn layouts_are_finite_everywhere() {
    for &total in &[1usize, 3, 20, 47, 100] {
        for layout in Layout::ALL {
            for i in 0..total {
                let p = layout_placement(layout, i, total);
                assert!(
                    p.position.is_finite() && p.rotation.is_finite(),
                    "{} index {i} of {total} is not finite",
                    layout.name()
                );
            }
        }
    }
}

#[test]
fn layouts_are_deterministic() {
    for layout in Layout::ALL {
        for i in 0..30 {
            let a = layout_placement(layout, i, 30);
            let b = layout_placement(layout, i, 30);
            assert_eq!(a.position, b.position, "{} index {i}", layout.name());
            assert_eq!(a.rotation, b.rotation, "{} index {i}", layout.name());
        }
    }
}

#[test]
fn layout_targets_are_index_aligned() {
    let total = 33;
    let targets = LayoutTargets::compute(total);
    for layout in Layout::ALL {
        assert_eq!(targets.for_layout(layout).len(), total);
    }
    let direct = layout_placement(Layout::Helix, 5, total);
    assert_eq!(targets.helix[5].position, direct.position);
    assert_eq!(targets.helix[5].rotation, direct.rotation);
}

#[test]
fn look_at_rotation_points_z_at_the_target() {
    let cases = [
        (Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 5.0)),
        (Vec3::new(100.0, -50.0, 30.0), Vec3::new(-200.0, 80.0, -10.0)),
        (Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)),
    ];
    for (position, target) in cases {
        let rot = look_at_rotation(position, target);
        let facing = rotation_matrix(rot).z_axis;
        let dir = (target - position).normalize();
        assert!(
            facing.dot(dir) > 0.9999,
            "facing {facing:?} should match direction {dir:?}"
        );
    }
}

#[test]
fn look_at_rotation_survives_degenerate_directions() {
    // target below the panel: up and the look direction are colinear
    let down = look_at_rotation(Vec3::ZERO, Vec3::new(0.0, -10.0, 0.0));
    assert!(down.is_finite());
    // coincident position and target
    let same = look_at_rotation(Vec3::ONE, Vec3::ONE);
    assert!(same.is_finite());
}
