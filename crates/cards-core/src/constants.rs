// Shared interaction/animation tuning constants. `Tuning::default()` is built
// from these; front-ends override individual fields rather than the constants.

// Smoothing
pub const SMOOTHING_RATE: f32 = 0.1; // position, scale and hover tilt, per frame
pub const FLIP_RATE: f32 = 0.03; // flip rotation, per frame
pub const HOVER_TILT_FACTOR: f32 = 0.2; // radians per unit of normalized pointer

// Accordion folding
pub const FOLD_RATE: f32 = 0.1;
pub const FOLD_EPSILON: f32 = 0.001;
pub const FOLD_DEPTH_STEP: f32 = 0.002; // z gap between folded faces
pub const FAN_TILT: f32 = 0.12; // alternating y tilt of unfolded faces

// Thick cards
pub const CARD_THICKNESS: f32 = 0.05;
pub const THIN_BACK_OFFSET: f32 = 0.02;

// Stack view
pub const STACK_DEPTH_SPACING: f32 = 0.15;

// Spread view
pub const SPREAD_SPACING: f32 = 3.2;
pub const SPREAD_SCALE: f32 = 0.8;
pub const SPREAD_DEPTH_STEP: f32 = 0.1;
pub const BOB_AMPLITUDE: f32 = 0.08;
pub const BOB_TILT: f32 = 0.04;
pub const BOB_FREQUENCY: f32 = 1.2; // radians per second
pub const BOB_PHASE_STEP: f32 = 0.9; // phase offset between neighbouring cards

// Focus view
pub const FOCUS_DEPTH: f32 = 5.0;
pub const FOCUS_FILL: f32 = 0.8; // fraction of the viewport the focused card may fill
pub const PARKED_Y: f32 = -4.0;
pub const PARKED_Z: f32 = -2.0;
pub const PARKED_DEPTH_STEP: f32 = 0.1;
pub const PARKED_SCALE: f32 = 0.5;

// Swipe / momentum
pub const SWIPE_TO_WORLD: f32 = 0.02; // world units per screen pixel
pub const MOMENTUM_FRICTION: f32 = 0.95;
pub const MOMENTUM_EPSILON: f32 = 0.01; // px per frame
pub const OVERSCROLL_RESISTANCE: f32 = 0.3;
pub const BOUNCE_SNAP_STRENGTH: f32 = 1.0;
pub const BOUNCE_SPRING_BASE: f32 = 0.1;
pub const OVERSCROLL_BUFFER_FRACTION: f32 = 0.6; // of one face width, focus face-scroll only
pub const OVERSCROLL_LIMIT_MULTIPLE: f32 = 4.0;

// Pinch
pub const PINCH_MIN: f32 = 0.5;
pub const PINCH_MAX: f32 = 2.5;
pub const PINCH_SMOOTHING: f32 = 0.15;
pub const PINCH_PAN: f32 = 2.0; // world units per unit of normalized pinch center
pub const PINCH_NEUTRAL_EPSILON: f32 = 0.001;

// Tap detection
pub const TAP_MAX_MS: f64 = 300.0;
pub const TAP_MAX_DISTANCE_PX: f32 = 20.0;

// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
