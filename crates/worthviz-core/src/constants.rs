// Shared layout/visual tuning constants used by both web and native frontends.

// Table layout: 20 columns, rows stacked downward
pub const TABLE_COLUMNS: usize = 20;
pub const TABLE_COLUMN_PITCH: f32 = 160.0; // world units between columns
pub const TABLE_ROW_PITCH: f32 = 190.0; // world units between rows
pub const TABLE_ORIGIN_X: f32 = -1600.0; // x of column 0
pub const TABLE_ORIGIN_Y: f32 = 900.0; // y of row 0

// Sphere layout
pub const SPHERE_RADIUS: f32 = 1000.0;

// Helix layout
pub const HELIX_RADIUS: f32 = 900.0;
pub const HELIX_ANGLE_STEP: f32 = 0.175; // radians of twist per item
pub const HELIX_TOP_Y: f32 = 500.0;
pub const HELIX_DROP_PER_ITEM: f32 = 12.0;

// Grid layout: 5 wide, 4 tall, layers stacked in depth
pub const GRID_COLUMNS: usize = 5;
pub const GRID_ROWS: usize = 4;
pub const GRID_LAYER_SIZE: usize = 20; // items per depth layer
pub const GRID_COLUMN_PITCH: f32 = 400.0;
pub const GRID_ROW_PITCH: f32 = 400.0;
pub const GRID_LAYER_PITCH: f32 = 200.0;
pub const GRID_ORIGIN_X: f32 = -800.0;
pub const GRID_ORIGIN_Y: f32 = 600.0;
pub const GRID_ORIGIN_Z: f32 = -1000.0;

// Panel sizing (world units)
pub const PANEL_WIDTH: f32 = 140.0;
pub const PANEL_HEIGHT: f32 = 180.0;
pub const PANEL_BORDER: f32 = 5.0; // opaque rim width
pub const PANEL_FILL_ALPHA: f32 = 0.333; // interior translucency

// Initial scatter: panels start at random positions in this cube
pub const SCATTER_EXTENT: f32 = 2000.0; // half-extent per axis

// Transitions
pub const TRANSITION_MS: f64 = 2000.0; // tween duration
pub const SETTLE_FACTOR: f64 = 2.0; // keep redrawing this long past the start

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 40.0;
pub const CAMERA_INITIAL_DISTANCE: f32 = 3000.0;
pub const CAMERA_MIN_DISTANCE: f32 = 500.0;
pub const CAMERA_MAX_DISTANCE: f32 = 6000.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 10000.0;
pub const CAMERA_PITCH_LIMIT: f32 = 1.55; // radians, just short of the poles
