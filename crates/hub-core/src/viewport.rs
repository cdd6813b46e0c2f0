//! Window-size state and the camera derived from it.

use crate::constants::{
    CAMERA_DISTANCE_NARROW, CAMERA_DISTANCE_WIDE, CAMERA_EYE_HEIGHT, CAMERA_FOV_Y_DEG,
    CAMERA_TARGET_HEIGHT, CAMERA_ZFAR, CAMERA_ZNEAR, NARROW_BREAKPOINT_PX,
};
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Narrow,
}

/// Current window dimensions; recomputed on every resize, never persisted.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn layout_mode(&self) -> LayoutMode {
        if self.width < NARROW_BREAKPOINT_PX {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    /// Camera pull-back distance: a two-value step function over the
    /// breakpoint, not continuous scaling.
    pub fn camera_distance(&self) -> f32 {
        match self.layout_mode() {
            LayoutMode::Wide => CAMERA_DISTANCE_WIDE,
            LayoutMode::Narrow => CAMERA_DISTANCE_NARROW,
        }
    }
}

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The hub's "character-select" framing: raised eye looking slightly
    /// down at the ring, pulled back further on narrow viewports.
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self {
            eye: Vec3::new(0.0, CAMERA_EYE_HEIGHT, viewport.camera_distance()),
            target: Vec3::new(0.0, CAMERA_TARGET_HEIGHT, 0.0),
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
