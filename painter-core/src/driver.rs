/// Per-frame orchestration of the shape pipeline
use nalgebra::Vector3;

use crate::config::RenderConfig;
use crate::depth::sort_back_to_front;
use crate::error::Result;
use crate::host::{HostEvent, RenderHost};
use crate::projection::Projector;
use crate::raster::{RasterStats, Rasterizer};
use crate::registry::ShapeRegistry;
use crate::scene::Scene;
use crate::transform::{RotationState, Transform};

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frame_index: u64,
    pub delta_ms: u64,
    /// Shapes that reached the rasterizer
    pub drawn: usize,
    /// Shapes removed because a vertex could not be projected
    pub dropped: usize,
    pub raster: RasterStats,
}

/// Drives populate → transform → sort → project → rasterize → release,
/// once per frame, against a [`RenderHost`].
pub struct FrameDriver {
    config: RenderConfig,
    scene: Scene,
    registry: ShapeRegistry,
    projector: Projector,
    rasterizer: Rasterizer,
    spin: RotationState,
    last_tick: Option<u64>,
    frame_index: u64,
}

impl FrameDriver {
    pub fn new(scene: Scene, config: RenderConfig) -> Self {
        Self {
            projector: Projector::from_config(&config),
            rasterizer: Rasterizer::from_config(&config),
            registry: ShapeRegistry::new(),
            spin: RotationState::zero(),
            last_tick: None,
            frame_index: 0,
            config,
            scene,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Object-space rotation accumulated so far
    pub fn spin(&self) -> RotationState {
        self.spin
    }

    /// Record a clock reading and accumulate spin. Returns the delta used.
    ///
    /// The first reading and any reading earlier than the previous one
    /// count as zero elapsed time.
    pub fn advance(&mut self, now_ms: u64) -> u64 {
        let delta = match self.last_tick {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_tick = Some(now_ms);

        let angle = self.config.spin_rate * delta as f32;
        let axes = self.config.spin_axes;
        self.spin.rotate(angle * axes.x, angle * axes.y, angle * axes.z);
        delta
    }

    /// Render and present one frame.
    ///
    /// Per-shape problems are logged and skipped; only host failures are
    /// returned as errors.
    pub fn render_frame<H: RenderHost + ?Sized>(&mut self, host: &mut H) -> Result<FrameStats> {
        let delta_ms = self.advance(host.elapsed_millis());

        host.clear(self.config.background);
        let (width, height) = host.window_size();

        if let Err(err) = self.scene.populate(&mut self.registry) {
            log::warn!(
                "frame {}: scene only partially registered: {}",
                self.frame_index,
                err
            );
        }

        // Spin about the scene pivot, then push into view.
        let to_origin = -self.scene.pivot().coords;
        Transform::apply(&mut self.registry, Some(&to_origin), Some(&self.spin));

        let placement = Vector3::new(
            width as f32 / 2.0,
            height as f32 / 2.0,
            self.config.world_depth,
        );
        Transform::apply(&mut self.registry, Some(&placement), Some(&RotationState::zero()));

        sort_back_to_front(&mut self.registry);
        let dropped = self.projector.project(&mut self.registry);
        let raster = self.rasterizer.draw(&self.registry, host);

        let stats = FrameStats {
            frame_index: self.frame_index,
            delta_ms,
            drawn: self.registry.len(),
            dropped,
            raster,
        };
        self.registry.clear();
        self.frame_index += 1;

        host.present()?;
        log::trace!("{:?}", stats);
        Ok(stats)
    }

    /// Render frames until the host reports [`HostEvent::Quit`].
    ///
    /// Returns the number of frames rendered.
    pub fn run<H: RenderHost + ?Sized>(&mut self, host: &mut H) -> Result<u64> {
        let first = self.frame_index;
        log::info!("frame loop started");

        loop {
            while let Some(event) = host.poll_event()? {
                match event {
                    HostEvent::Quit => {
                        let frames = self.frame_index - first;
                        log::info!("quit requested after {} frames", frames);
                        return Ok(frames);
                    }
                    HostEvent::Resized { width, height } => {
                        log::debug!("host resized to {}x{}", width, height);
                    }
                }
            }

            self.render_frame(host)?;
        }
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(Scene::default(), RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_has_zero_delta() {
        let mut driver = FrameDriver::default();
        assert_eq!(driver.advance(987_654), 0);
        assert!(driver.spin().is_zero());
    }

    #[test]
    fn test_spin_accumulates_with_elapsed_time() {
        let mut driver = FrameDriver::default();
        driver.advance(1_000);
        assert_eq!(driver.advance(1_500), 500);
        assert!((driver.spin().y - 0.5).abs() < 1e-6);
        assert_eq!(driver.advance(2_000), 500);

        let rotation = driver.spin();
        assert!((rotation.x - 1.0 / 3.0).abs() < 1e-6);
        assert!((rotation.y - 1.0).abs() < 1e-6);
        assert_eq!(rotation.z, 0.0);
    }

    #[test]
    fn test_clock_going_backwards_is_zero_delta() {
        let mut driver = FrameDriver::default();
        driver.advance(500);
        assert_eq!(driver.advance(200), 0);
        assert!(driver.spin().is_zero());
        assert_eq!(driver.advance(300), 100);
    }
}
