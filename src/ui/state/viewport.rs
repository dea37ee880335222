// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Handles the zoom scale and content offset of the viewer pane.
//!
//! The offset is the position, in scaled content pixels, of the viewport's
//! top-left corner inside the image. On each axis it is kept in
//! `[0, content - viewport]` when the scaled image is larger than the
//! viewport, and pinned to the centering value `(content - viewport) / 2`
//! (negative) when it is smaller. The image therefore never leaves the
//! visible bounds.

use super::zoom::{ZoomMultiple, ZoomRange};
use iced::{Point, Rectangle, Size, Vector};

/// Manages viewport scale and offset for one displayed image.
#[derive(Debug, Clone)]
pub struct ViewportState {
    scale: f32,
    offset: Vector,
    bounds: Option<Size>,
    image_size: Option<Size>,
    range: ZoomRange,
    max_zoom: ZoomMultiple,
    /// Whether the scale still follows fit-to-bounds on resize.
    fitted: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ZoomMultiple::default())
    }
}

impl ViewportState {
    #[must_use]
    pub fn new(max_zoom: ZoomMultiple) -> Self {
        Self {
            scale: 1.0,
            offset: Vector::ZERO,
            bounds: None,
            image_size: None,
            range: ZoomRange::IDENTITY,
            max_zoom,
            fitted: true,
        }
    }

    /// Current zoom scale (1.0 = native resolution).
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current content offset.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn range(&self) -> ZoomRange {
        self.range
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Size> {
        self.bounds
    }

    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    #[must_use]
    pub fn max_zoom(&self) -> ZoomMultiple {
        self.max_zoom
    }

    /// Returns whether the scale follows fit-to-bounds.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Replaces the image and resets to fit-to-bounds, centered.
    pub fn reset(&mut self, image_size: Option<Size>) {
        self.image_size = image_size;
        self.fit();
    }

    /// Returns to fit-to-bounds scale with the image centered.
    pub fn fit(&mut self) {
        self.recompute_range();
        self.scale = self.range.min();
        self.fitted = true;
        self.offset = self.centered_offset();
    }

    /// Changes the maximum zoom multiple, re-clamping the current scale.
    pub fn set_max_zoom(&mut self, max_zoom: ZoomMultiple) {
        self.max_zoom = max_zoom;
        if self.fitted {
            self.fit();
        } else {
            let center = self.viewport_center();
            self.recompute_range();
            self.set_scale_at(self.scale, center);
        }
    }

    /// Updates the viewport size.
    ///
    /// A fitted viewport refits; otherwise the scale is re-clamped to the new
    /// range and the content point at the viewport center stays put.
    /// Degenerate sizes (minimised window) are ignored.
    pub fn set_bounds(&mut self, bounds: Size) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 || self.bounds == Some(bounds) {
            return;
        }

        let center_content = self.bounds.map(|old| {
            Point::new(
                (self.offset.x + old.width / 2.0) / self.scale,
                (self.offset.y + old.height / 2.0) / self.scale,
            )
        });
        self.bounds = Some(bounds);

        if self.fitted {
            self.fit();
            return;
        }

        self.recompute_range();
        self.scale = self.range.clamp(self.scale);
        if let Some(content) = center_content {
            self.offset = Vector::new(
                content.x * self.scale - bounds.width / 2.0,
                content.y * self.scale - bounds.height / 2.0,
            );
        }
        self.clamp_offset();
    }

    /// Moves the content by `delta` screen pixels (content follows the cursor).
    pub fn pan_by(&mut self, delta: Vector) {
        self.set_offset(self.offset - delta);
    }

    /// Sets the offset, clamped to the valid range.
    pub fn set_offset(&mut self, offset: Vector) {
        if offset.x.is_finite() && offset.y.is_finite() {
            self.offset = offset;
        }
        self.clamp_offset();
    }

    /// Multiplies the scale by `factor` keeping the content point under
    /// `anchor` (viewport coordinates) fixed.
    pub fn zoom_at(&mut self, factor: f32, anchor: Point) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.set_scale_at(self.scale * factor, anchor);
    }

    /// Sets the scale keeping the content point under `anchor` fixed.
    pub fn set_scale_at(&mut self, scale: f32, anchor: Point) {
        if self.image_size.is_none() || self.bounds.is_none() {
            return;
        }

        let new_scale = self.range.clamp(scale);
        let content_x = (self.offset.x + anchor.x) / self.scale;
        let content_y = (self.offset.y + anchor.y) / self.scale;

        self.scale = new_scale;
        self.fitted = (new_scale - self.range.min()).abs() <= f32::EPSILON;
        self.offset = Vector::new(
            content_x * new_scale - anchor.x,
            content_y * new_scale - anchor.y,
        );
        self.clamp_offset();
    }

    /// Double-tap behavior: zoom to the maximum around `anchor`, or back to
    /// fit when already zoomed in.
    pub fn toggle_zoom_at(&mut self, anchor: Point) {
        if self.fitted || self.scale <= self.range.min() + f32::EPSILON {
            self.set_scale_at(self.range.max(), anchor);
        } else {
            self.fit();
        }
    }

    /// Rectangle occupied by the scaled image, relative to the viewport origin.
    #[must_use]
    pub fn image_rect(&self) -> Option<Rectangle> {
        let image = self.image_size?;
        Some(Rectangle::new(
            Point::new(-self.offset.x, -self.offset.y),
            Size::new(image.width * self.scale, image.height * self.scale),
        ))
    }

    /// Valid offset interval `(min, max)` for each axis.
    #[must_use]
    pub fn offset_limits(&self) -> (Vector, Vector) {
        match (self.image_size, self.bounds) {
            (Some(image), Some(bounds)) => {
                let (min_x, max_x) = axis_limits(image.width * self.scale, bounds.width);
                let (min_y, max_y) = axis_limits(image.height * self.scale, bounds.height);
                (Vector::new(min_x, min_y), Vector::new(max_x, max_y))
            }
            _ => (Vector::ZERO, Vector::ZERO),
        }
    }

    fn recompute_range(&mut self) {
        self.range = match (self.image_size, self.bounds) {
            (Some(image), Some(bounds)) => ZoomRange::for_image(image, bounds, self.max_zoom),
            _ => ZoomRange::IDENTITY,
        };
    }

    fn centered_offset(&self) -> Vector {
        let (min, max) = self.offset_limits();
        Vector::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0)
    }

    fn viewport_center(&self) -> Point {
        self.bounds
            .map(|b| Point::new(b.width / 2.0, b.height / 2.0))
            .unwrap_or(Point::ORIGIN)
    }

    fn clamp_offset(&mut self) {
        let (min, max) = self.offset_limits();
        self.offset = Vector::new(
            self.offset.x.clamp(min.x, max.x),
            self.offset.y.clamp(min.y, max.y),
        );
    }
}

fn axis_limits(content: f32, viewport: f32) -> (f32, f32) {
    if content >= viewport {
        (0.0, content - viewport)
    } else {
        let centered = (content - viewport) / 2.0;
        (centered, centered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn loaded(image: Size, bounds: Size) -> ViewportState {
        let mut state = ViewportState::new(ZoomMultiple::new(3.0));
        state.set_bounds(bounds);
        state.reset(Some(image));
        state
    }

    fn assert_in_limits(state: &ViewportState) {
        let (min, max) = state.offset_limits();
        let offset = state.offset();
        assert!(offset.x >= min.x - 1e-3 && offset.x <= max.x + 1e-3);
        assert!(offset.y >= min.y - 1e-3 && offset.y <= max.y + 1e-3);
        assert!(state.range().contains(state.scale()));
    }

    #[test]
    fn default_viewport_is_identity() {
        let state = ViewportState::default();
        assert_abs_diff_eq!(state.scale(), 1.0);
        assert_eq!(state.offset(), Vector::ZERO);
        assert!(state.bounds().is_none());
        assert!(state.image_rect().is_none());
    }

    #[test]
    fn reset_fits_and_centers() {
        let state = loaded(Size::new(1600.0, 600.0), Size::new(800.0, 600.0));
        assert_abs_diff_eq!(state.scale(), 0.5);
        assert!(state.is_fitted());

        // Scaled image is 800x300: centered vertically in a 600 high viewport.
        assert_abs_diff_eq!(state.offset().x, 0.0);
        assert_abs_diff_eq!(state.offset().y, -150.0);

        let rect = state.image_rect().unwrap();
        assert_abs_diff_eq!(rect.y, 150.0);
        assert_abs_diff_eq!(rect.height, 300.0);
    }

    #[test]
    fn reset_before_bounds_then_bounds_fits() {
        let mut state = ViewportState::default();
        state.reset(Some(Size::new(400.0, 400.0)));
        assert_abs_diff_eq!(state.scale(), 1.0);

        state.set_bounds(Size::new(200.0, 100.0));
        assert_abs_diff_eq!(state.scale(), 0.25);
        assert_abs_diff_eq!(state.offset().x, -50.0);
    }

    #[test]
    fn pan_is_clamped_to_content() {
        let mut state = loaded(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        state.set_scale_at(1.0, Point::new(250.0, 250.0));
        assert_abs_diff_eq!(state.offset().x, 250.0);

        state.pan_by(Vector::new(-10_000.0, 10_000.0));
        assert_abs_diff_eq!(state.offset().x, 500.0);
        assert_abs_diff_eq!(state.offset().y, 0.0);
    }

    #[test]
    fn pan_at_fit_keeps_image_centered() {
        let mut state = loaded(Size::new(100.0, 50.0), Size::new(400.0, 400.0));
        let before = state.offset();
        state.pan_by(Vector::new(30.0, -40.0));
        assert_eq!(state.offset(), before);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut state = loaded(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        let anchor = Point::new(100.0, 400.0);
        let before = (
            (state.offset().x + anchor.x) / state.scale(),
            (state.offset().y + anchor.y) / state.scale(),
        );

        state.zoom_at(2.0, anchor);
        assert_abs_diff_eq!(state.scale(), 1.0);
        let after = (
            (state.offset().x + anchor.x) / state.scale(),
            (state.offset().y + anchor.y) / state.scale(),
        );
        assert_abs_diff_eq!(before.0, after.0, epsilon = 1e-3);
        assert_abs_diff_eq!(before.1, after.1, epsilon = 1e-3);
        assert!(!state.is_fitted());
    }

    #[test]
    fn zoom_is_clamped_to_range() {
        let mut state = loaded(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        state.zoom_at(1_000.0, Point::ORIGIN);
        assert_abs_diff_eq!(state.scale(), 3.0);
        state.zoom_at(0.0001, Point::ORIGIN);
        assert_abs_diff_eq!(state.scale(), 0.5);
        assert!(state.is_fitted());
        assert_in_limits(&state);
    }

    #[test]
    fn invalid_zoom_factor_is_ignored() {
        let mut state = loaded(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        state.zoom_at(f32::NAN, Point::ORIGIN);
        state.zoom_at(-2.0, Point::ORIGIN);
        assert_abs_diff_eq!(state.scale(), 0.5);
    }

    #[test]
    fn toggle_zoom_alternates_between_fit_and_max() {
        let mut state = loaded(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        state.toggle_zoom_at(Point::new(250.0, 250.0));
        assert_abs_diff_eq!(state.scale(), 3.0);
        state.toggle_zoom_at(Point::new(250.0, 250.0));
        assert_abs_diff_eq!(state.scale(), 0.5);
        assert!(state.is_fitted());
    }

    #[test]
    fn resize_keeps_zoom_and_clamps() {
        let mut state = loaded(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        state.set_scale_at(2.0, Point::new(250.0, 250.0));
        state.set_bounds(Size::new(900.0, 300.0));
        assert_abs_diff_eq!(state.scale(), 2.0);
        assert_in_limits(&state);
    }

    #[test]
    fn resize_refits_when_fitted() {
        let mut state = loaded(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        state.set_bounds(Size::new(250.0, 1000.0));
        assert_abs_diff_eq!(state.scale(), 0.25);
        assert!(state.is_fitted());
    }

    #[test]
    fn degenerate_bounds_are_ignored() {
        let mut state = loaded(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        state.set_bounds(Size::new(0.0, 0.0));
        assert_eq!(state.bounds(), Some(Size::new(500.0, 500.0)));
    }

    /// Small deterministic generator so gesture sequences are reproducible.
    struct Lcg(u64);

    impl Lcg {
        fn unit(&mut self) -> f32 {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (self.0 >> 40) as f32 / (1u64 << 24) as f32
        }

        fn between(&mut self, low: f32, high: f32) -> f32 {
            low + (high - low) * self.unit()
        }
    }

    #[test]
    fn mixed_gesture_sequence_stays_in_limits() {
        let mut rng = Lcg(0x5eed);
        let mut state = loaded(Size::new(1200.0, 800.0), Size::new(640.0, 480.0));

        for step in 0..5_000 {
            let anchor = Point::new(rng.between(-50.0, 700.0), rng.between(-50.0, 530.0));
            match (rng.unit() * 5.0) as u32 {
                0 => state.pan_by(Vector::new(
                    rng.between(-400.0, 400.0),
                    rng.between(-400.0, 400.0),
                )),
                1 => state.zoom_at(rng.between(0.5, 1.8), anchor),
                2 => state.toggle_zoom_at(anchor),
                3 => state.set_bounds(Size::new(
                    rng.between(1.0, 1600.0),
                    rng.between(1.0, 1200.0),
                )),
                _ => state.fit(),
            }
            assert!(state.scale().is_finite(), "step {step}");
            assert_in_limits(&state);
        }
    }

    #[test]
    fn lowering_max_zoom_reclamps_scale() {
        let mut state = loaded(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        state.set_scale_at(3.0, Point::new(250.0, 250.0));
        state.set_max_zoom(ZoomMultiple::new(1.0));
        assert_abs_diff_eq!(state.scale(), 1.0);
        assert_in_limits(&state);
    }
}
