//! The four spatial arrangements and the math behind them.
//!
//! Every placement is a pure function of `(layout, index, total)`, so layouts
//! can be recomputed or spot-checked at any time and identical inputs always
//! produce identical outputs. Rotations are XYZ Euler angles (radians) so the
//! transition engine can interpolate each channel independently.

use glam::{Mat3, Vec3};

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Table,
    Sphere,
    Helix,
    Grid,
}

impl Layout {
    pub const ALL: [Layout; 4] = [Layout::Table, Layout::Sphere, Layout::Helix, Layout::Grid];

    pub fn name(self) -> &'static str {
        match self {
            Layout::Table => "table",
            Layout::Sphere => "sphere",
            Layout::Helix => "helix",
            Layout::Grid => "grid",
        }
    }
}

/// Where one panel sits under one layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    /// XYZ Euler angles, radians.
    pub rotation: Vec3,
}

/// Placement of item `index` of `total` under `layout`. `index < total`.
pub fn layout_placement(layout: Layout, index: usize, total: usize) -> Placement {
    match layout {
        Layout::Table => table_placement(index),
        Layout::Sphere => sphere_placement(index, total),
        Layout::Helix => helix_placement(index),
        Layout::Grid => grid_placement(index),
    }
}

/// All four per-layout target vectors for a dataset of `total` items,
/// index-aligned with the panel list. Computed once per scene.
#[derive(Clone, Debug, Default)]
pub struct LayoutTargets {
    pub table: Vec<Placement>,
    pub sphere: Vec<Placement>,
    pub helix: Vec<Placement>,
    pub grid: Vec<Placement>,
}

impl LayoutTargets {
    pub fn compute(total: usize) -> Self {
        let build =
            |layout| (0..total).map(|i| layout_placement(layout, i, total)).collect::<Vec<_>>();
        Self {
            table: build(Layout::Table),
            sphere: build(Layout::Sphere),
            helix: build(Layout::Helix),
            grid: build(Layout::Grid),
        }
    }

    pub fn for_layout(&self, layout: Layout) -> &[Placement] {
        match layout {
            Layout::Table => &self.table,
            Layout::Sphere => &self.sphere,
            Layout::Helix => &self.helix,
            Layout::Grid => &self.grid,
        }
    }
}

fn table_placement(index: usize) -> Placement {
    let column = (index % TABLE_COLUMNS) as f32;
    let row = (index / TABLE_COLUMNS) as f32;
    Placement {
        position: Vec3::new(
            column * TABLE_COLUMN_PITCH + TABLE_ORIGIN_X,
            -row * TABLE_ROW_PITCH + TABLE_ORIGIN_Y,
            0.0,
        ),
        rotation: Vec3::ZERO,
    }
}

fn sphere_placement(index: usize, total: usize) -> Placement {
    // Even vertical spacing with a golden-ish azimuth sweep.
    let phi = (-1.0 + 2.0 * index as f32 / total as f32).acos();
    let theta = (total as f32 * std::f32::consts::PI).sqrt() * phi;
    let position = from_spherical(SPHERE_RADIUS, phi, theta);
    Placement {
        // Face away from the sphere's center.
        rotation: look_at_rotation(position, position * 2.0),
        position,
    }
}

fn helix_placement(index: usize) -> Placement {
    let theta = index as f32 * HELIX_ANGLE_STEP + std::f32::consts::PI;
    let y = -(index as f32) * HELIX_DROP_PER_ITEM + HELIX_TOP_Y;
    let position = from_cylindrical(HELIX_RADIUS, theta, y);
    // Face outward, level: the look target doubles x/z but keeps y.
    let target = Vec3::new(position.x * 2.0, position.y, position.z * 2.0);
    Placement {
        rotation: look_at_rotation(position, target),
        position,
    }
}

fn grid_placement(index: usize) -> Placement {
    let column = (index % GRID_COLUMNS) as f32;
    let row = ((index / GRID_COLUMNS) % GRID_ROWS) as f32;
    let layer = (index / GRID_LAYER_SIZE) as f32;
    Placement {
        position: Vec3::new(
            column * GRID_COLUMN_PITCH + GRID_ORIGIN_X,
            -row * GRID_ROW_PITCH + GRID_ORIGIN_Y,
            layer * GRID_LAYER_PITCH + GRID_ORIGIN_Z,
        ),
        rotation: Vec3::ZERO,
    }
}

// y is the polar axis: phi is measured from +y, theta sweeps around it.
#[inline]
fn from_spherical(radius: f32, phi: f32, theta: f32) -> Vec3 {
    let sin_phi_radius = radius * phi.sin();
    Vec3::new(
        sin_phi_radius * theta.sin(),
        radius * phi.cos(),
        sin_phi_radius * theta.cos(),
    )
}

#[inline]
fn from_cylindrical(radius: f32, theta: f32, y: f32) -> Vec3 {
    Vec3::new(radius * theta.sin(), y, radius * theta.cos())
}

/// Euler angles that orient a panel at `position` so its +z axis points at
/// `target`, with +y kept as close to world-up as the direction allows.
pub fn look_at_rotation(position: Vec3, target: Vec3) -> Vec3 {
    euler_xyz_from_mat3(look_at_basis(position, target))
}

fn look_at_basis(position: Vec3, target: Vec3) -> Mat3 {
    let mut z = target - position;
    if z.length_squared() == 0.0 {
        // position and target coincide
        z.z = 1.0;
    }
    z = z.normalize();
    let mut x = Vec3::Y.cross(z);
    if x.length_squared() == 0.0 {
        // looking straight up or down; nudge off the pole and rebuild
        z.z += 0.0001;
        z = z.normalize();
        x = Vec3::Y.cross(z);
    }
    x = x.normalize();
    let y = z.cross(x);
    Mat3::from_cols(x, y, z)
}

/// XYZ Euler angles of a rotation matrix (columns are the rotated basis).
pub fn euler_xyz_from_mat3(m: Mat3) -> Vec3 {
    let m13 = m.z_axis.x;
    let y = m13.clamp(-1.0, 1.0).asin();
    if m13.abs() < 0.999_999_9 {
        let x = (-m.z_axis.y).atan2(m.z_axis.z);
        let z = (-m.y_axis.x).atan2(m.x_axis.x);
        Vec3::new(x, y, z)
    } else {
        // gimbal lock: fold everything into x
        let x = m.y_axis.z.atan2(m.y_axis.y);
        Vec3::new(x, y, 0.0)
    }
}

/// Rebuild the rotation matrix from XYZ Euler angles.
#[inline]
pub fn rotation_matrix(euler: Vec3) -> Mat3 {
    Mat3::from_rotation_x(euler.x) * Mat3::from_rotation_y(euler.y) * Mat3::from_rotation_z(euler.z)
}
