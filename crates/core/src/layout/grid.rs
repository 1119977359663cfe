use crate::{
    hex::HexNum,
    layout::{Camera, HexLayout, HexOrientation, LayoutConfig},
    Hex, Vector2D,
};
use log::{debug, trace};
use serde::Serialize;

/// Where, and how big, to draw an image that should fill one hex on screen.
/// See [HexGrid::hex_image_to_screen].
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ImagePlacement {
    /// Screen position of the hex center
    pub center: Vector2D<f64>,
    /// Uniform scale factor to apply to the image, on both axes
    pub scale: f64,
}

/// A [HexLayout] viewed through a [Camera]. The grid never owns a camera,
/// it's passed into every call that needs one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexGrid {
    pub layout: HexLayout,
}

impl HexGrid {
    /// Create a grid with hex `(0, 0)` at the world origin and no zoom
    pub fn new(orientation: &'static HexOrientation, size: Vector2D<f64>) -> Self {
        Self {
            layout: HexLayout::new(orientation, size, Vector2D::new(0.0, 0.0), 1.0),
        }
    }

    /// Build a grid from config. Returns an error if the config is invalid.
    pub fn from_config(config: &LayoutConfig) -> anyhow::Result<Self> {
        Ok(Self {
            layout: HexLayout::from_config(config)?,
        })
    }

    pub fn world_to_screen(
        &self,
        point: Vector2D<f64>,
        camera: &impl Camera,
    ) -> Vector2D<f64> {
        (point - camera.position()) * camera.zoom() + camera.viewport_size() / 2.0
    }

    pub fn screen_to_world(
        &self,
        point: Vector2D<f64>,
        camera: &impl Camera,
    ) -> Vector2D<f64> {
        (point - camera.viewport_size() / 2.0) / camera.zoom() + camera.position()
    }

    /// Screen position of a hex's center
    pub fn hex_to_screen<N: HexNum>(
        &self,
        hex: Hex<N>,
        camera: &impl Camera,
    ) -> Vector2D<f64> {
        self.world_to_screen(self.layout.hex_to_point(hex), camera)
    }

    /// Get the cell under a screen position. The result is already rounded
    /// (with [Hex::round]), so it always holds whole numbers.
    ///
    /// **This copies the camera's zoom into the layout** before converting,
    /// so it changes the output of every later [HexLayout] projection on
    /// this grid.
    pub fn screen_to_hex(
        &mut self,
        point: Vector2D<f64>,
        camera: &impl Camera,
    ) -> Hex<f64> {
        let world = self.screen_to_world(point, camera);
        let zoom = camera.zoom();
        if self.layout.zoom != zoom {
            debug!("Layout zoom {} -> {}", self.layout.zoom, zoom);
            self.layout.zoom = zoom;
        }
        self.layout.point_to_hex(world).round()
    }

    /// Get every hex whose center is inside the camera viewport.
    ///
    /// Candidates come from an axial `q`/`r` bounding box around the
    /// viewport (padded by one cell), not from a true hex region, so cells
    /// right at the viewport corners can be missed. Results are ordered by
    /// `q`, then `r`.
    pub fn visible_hexes(&self, camera: &impl Camera) -> Vec<Hex<i64>> {
        let top_left = self.screen_to_world(Vector2D::new(0.0, 0.0), camera);
        let bottom_right = self.screen_to_world(camera.viewport_size(), camera);
        let min = Vector2D::new(top_left.x.min(bottom_right.x), top_left.y.min(bottom_right.y));
        let max = Vector2D::new(top_left.x.max(bottom_right.x), top_left.y.max(bottom_right.y));

        let a = self.layout.point_to_hex(top_left).round().to_int();
        let b = self.layout.point_to_hex(bottom_right).round().to_int();
        let (q_min, q_max) = (a.q.min(b.q) - 1, a.q.max(b.q) + 1);
        let (r_min, r_max) = (a.r.min(b.r) - 1, a.r.max(b.r) + 1);

        let mut hexes = Vec::new();
        for q in q_min..=q_max {
            for r in r_min..=r_max {
                let hex = Hex::new(q, r);
                let center = self.layout.hex_to_point(hex);
                if (min.x..=max.x).contains(&center.x) && (min.y..=max.y).contains(&center.y)
                {
                    hexes.push(hex);
                }
            }
        }

        trace!(
            "Visible hexes: {} of {} candidates (q {}..={}, r {}..={})",
            hexes.len(),
            (q_max - q_min + 1) * (r_max - r_min + 1),
            q_min,
            q_max,
            r_min,
            r_max
        );
        hexes
    }

    /// Get the six corners of a hex, in screen space. Same order as
    /// [HexLayout::hex_corners].
    pub fn hex_corners_screen<N: HexNum>(
        &self,
        hex: Hex<N>,
        camera: &impl Camera,
    ) -> [Vector2D<f64>; 6] {
        self.layout
            .hex_corners(hex)
            .map(|corner| self.world_to_screen(corner, camera))
    }

    /// Figure out where to draw an image of size `image_size` so that it sits
    /// in the middle of a hex and fits inside it, without stretching.
    pub fn hex_image_to_screen<N: HexNum>(
        &self,
        hex: Hex<N>,
        image_size: Vector2D<f64>,
        camera: &impl Camera,
    ) -> ImagePlacement {
        let hex_size = self.layout.zoomed_size() * camera.zoom();
        let scale = (hex_size.x / image_size.x).min(hex_size.y / image_size.y);
        ImagePlacement {
            center: self.hex_to_screen(hex, camera),
            scale,
        }
    }
}
