// Host-side tests for viewport state and camera derivation.

use hub_core::{
    Camera, LayoutMode, Viewport, CAMERA_DISTANCE_NARROW, CAMERA_DISTANCE_WIDE,
    NARROW_BREAKPOINT_PX,
};

#[test]
fn breakpoint_is_a_step_function() {
    let narrow = Viewport::new(NARROW_BREAKPOINT_PX - 1, 800);
    let wide = Viewport::new(NARROW_BREAKPOINT_PX, 800);
    assert_eq!(narrow.layout_mode(), LayoutMode::Narrow);
    assert_eq!(wide.layout_mode(), LayoutMode::Wide);
    assert_eq!(narrow.camera_distance(), CAMERA_DISTANCE_NARROW);
    assert_eq!(wide.camera_distance(), CAMERA_DISTANCE_WIDE);
}

#[test]
fn aspect_follows_dimensions() {
    let vp = Viewport::new(1920, 1080);
    assert!((vp.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn zero_dimensions_are_clamped() {
    // a collapsed window must not produce a NaN aspect or a zero surface
    let vp = Viewport::new(0, 0);
    assert_eq!(vp.width, 1);
    assert_eq!(vp.height, 1);
    assert!(vp.aspect().is_finite());
}

#[test]
fn camera_pulls_back_on_narrow_viewports() {
    let wide = Camera::for_viewport(&Viewport::new(1280, 720));
    let narrow = Camera::for_viewport(&Viewport::new(480, 800));
    assert!(narrow.eye.z > wide.eye.z);
    assert_eq!(wide.eye.z, CAMERA_DISTANCE_WIDE);
    assert_eq!(narrow.eye.z, CAMERA_DISTANCE_NARROW);
}

#[test]
fn camera_matrices_are_finite() {
    let cam = Camera::for_viewport(&Viewport::new(1024, 768));
    let vp = cam.view_proj();
    for v in vp.to_cols_array() {
        assert!(v.is_finite());
    }
    // projection must change with aspect
    let other = Camera::for_viewport(&Viewport::new(500, 1000));
    assert_ne!(
        cam.projection_matrix().to_cols_array(),
        other.projection_matrix().to_cols_array()
    );
}
