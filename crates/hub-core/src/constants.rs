// Shared layout/animation tuning constants used by both web and native frontends.

// Ring layout
pub const RING_RADIUS: f32 = 4.0; // distance of each item from the carousel center
pub const MODEL_SCALE: f32 = 1.5; // uniform scale applied to every loaded model

// Carousel motion
pub const RING_SMOOTHING: f32 = 0.08; // per-frame low-pass factor for the whole ring
pub const POSE_SMOOTHING: f32 = 0.1; // per-frame factor for item bob/return motion
pub const FLOAT_SPEED: f32 = 2.0; // bob frequency of the active item (rad/sec)
pub const FLOAT_HEIGHT: f32 = 0.25; // bob amplitude in world units
pub const SPIN_SPEED: f32 = 0.015; // active item spin per frame (radians)

// Input
pub const SWIPE_THRESHOLD_PX: f32 = 50.0; // minimum horizontal travel to count as a swipe

// Viewport framing ("character-select" camera)
pub const NARROW_BREAKPOINT_PX: u32 = 768; // below this width the layout is narrow
pub const CAMERA_DISTANCE_WIDE: f32 = 10.0;
pub const CAMERA_DISTANCE_NARROW: f32 = 13.0;
pub const CAMERA_EYE_HEIGHT: f32 = 6.0;
pub const CAMERA_TARGET_HEIGHT: f32 = 1.0;
pub const CAMERA_FOV_Y_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Rendering
pub const MAX_RING_ITEMS: usize = 8; // uniform-table slots reserved per renderer
pub const HIGHLIGHT_EMISSIVE: f32 = 0.35; // brightness boost on the selected item
pub const OUTLINE_WIDTH: f32 = 0.04; // outline shell thickness in object units
pub const CLEAR_COLOR: [f64; 3] = [0.015, 0.015, 0.018]; // near-black backdrop

/// Base tint per slot, in carousel order.
pub const DEFAULT_ITEM_COLORS: [[f32; 3]; 4] = [
    [0.55, 0.75, 0.95], // software: cool blue
    [0.90, 0.45, 0.45], // game: red
    [0.60, 0.85, 0.55], // art: green
    [0.90, 0.80, 0.45], // editing: amber
];

/// Static description of one carousel slot.
#[derive(Clone, Copy, Debug)]
pub struct SlotDef {
    pub name: &'static str,
    pub label: &'static str,
    pub link: &'static str,
    pub model_path: &'static str,
}

/// The four project categories shown on the hub, in carousel order.
pub const DEFAULT_SLOTS: [SlotDef; 4] = [
    SlotDef {
        name: "software",
        label: "Software Projects",
        link: "/software",
        model_path: "assets/models/terminal.glb",
    },
    SlotDef {
        name: "game",
        label: "Game Projects",
        link: "/games",
        model_path: "assets/models/joystick.glb",
    },
    SlotDef {
        name: "art",
        label: "Art & Design",
        link: "/art",
        model_path: "assets/models/palette.glb",
    },
    SlotDef {
        name: "editing",
        label: "Video Editing",
        link: "/editing",
        model_path: "assets/models/clapper.glb",
    },
];
