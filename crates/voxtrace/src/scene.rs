//! Scene orchestration.
//!
//! [`VolumetricScene`] composes the data pipeline, acceleration build, and
//! filter state around one tracing backend, and owns the lifecycle:
//! initialize once, then trace frames while interactive mutations flow into
//! the shading context between launches.

use glam::Vec3;
use voxtrace_core::{
    CameraBasis, CameraPlacement, FilterState, LightRecord, Result, SceneConfig, SceneState,
    VoxtraceError,
};
use voxtrace_render::{BackendSettings, GeometryGroup, OutputImage, TraceBackend};
use voxtrace_structures::{load_dataset, map_colors, VoxelGrid};

use crate::interaction::Key;

/// Default light rig: two shadow-casting point lights flanking the volume.
fn default_lights() -> [LightRecord; 2] {
    [
        LightRecord::new(
            Vec3::new(-600.0, 100.0, -1200.0),
            Vec3::splat(0.8),
            true,
        ),
        LightRecord::new(Vec3::new(600.0, 0.0, 1200.0), Vec3::splat(0.8), true),
    ]
}

/// The volumetric scene and its render-time state.
pub struct VolumetricScene {
    config: SceneConfig,
    filter: FilterState,
    state: SceneState,
    grid: Option<VoxelGrid>,
    group: Option<GeometryGroup>,
    backend: Box<dyn TraceBackend>,
}

impl VolumetricScene {
    /// Creates an uninitialized scene over the given backend.
    #[must_use]
    pub fn new(config: SceneConfig, backend: Box<dyn TraceBackend>) -> Self {
        let filter = FilterState::new(config.cutoff, config.gradient);
        Self {
            config,
            filter,
            state: SceneState::default(),
            grid: None,
            group: None,
            backend,
        }
    }

    /// Runs the full one-shot initialization sequence.
    ///
    /// Configures the backend context, builds and binds the voxel grid, loads
    /// the dataset and binds the mapped colors, builds and publishes the
    /// acceleration structure, pushes lights and initial filter values, and
    /// validates the assembled scene. Returns the suggested initial camera
    /// placement.
    ///
    /// Nothing is recovered locally: the first failure propagates out, and
    /// the scene stays unusable. See [`Self::initialize_or_exit`].
    pub fn initialize(&mut self) -> Result<CameraPlacement> {
        self.backend.configure(&BackendSettings::default())?;

        let grid = VoxelGrid::build(self.config.dimensions, self.config.shape)?;
        self.backend.bind_voxels(grid.instances(), grid.shape())?;

        let data = load_dataset(&self.config.dataset_path, self.config.dimensions)?;
        // Color the first x*y*z samples only, so the color buffer shares the
        // primitive buffer's index space.
        let colors = map_colors(
            &data[..self.config.dimensions.total()],
            &self.filter.gradient(),
        );
        self.backend.bind_colors(&colors)?;

        let group = GeometryGroup::build(grid.instances(), grid.shape())?;
        group.publish(self.backend.as_mut())?;
        self.state = SceneState::Built;

        self.backend.set_lights(&default_lights());
        self.filter.push_all(&mut *self.backend);

        self.backend.validate()?;
        self.state = SceneState::Ready;

        self.grid = Some(grid);
        self.group = Some(group);
        log::info!("scene initialized: {} voxels", self.config.dimensions.total());

        Ok(CameraPlacement {
            eye: Vec3::new(0.0, 0.0, self.config.dimensions.x as f32 * -2.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            vfov_degrees: 60.0,
        })
    }

    /// Initializes, or reports the error and terminates the process.
    ///
    /// The single exit-on-failure decision point: every error kind surfaces
    /// here, is logged, and exits with status 1.
    #[must_use]
    pub fn initialize_or_exit(&mut self) -> CameraPlacement {
        match self.initialize() {
            Ok(placement) => placement,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    }

    /// Traces one frame with the given camera basis.
    ///
    /// Pushes the camera into the shading context, then issues one
    /// synchronous launch sized to the backend's output image. Returns only
    /// after the launch completes.
    pub fn render_frame(&mut self, camera: &CameraBasis) -> Result<()> {
        if !self.state.can_trace() {
            return Err(VoxtraceError::Config(
                "render_frame called before successful initialization".to_string(),
            ));
        }
        self.state = SceneState::Tracing;
        self.backend.set_camera(camera);
        let (width, height) = self.backend.output_size();
        let result = self.backend.launch(width, height);
        self.state = SceneState::Ready;
        result
    }

    /// The backend-owned output buffer for display.
    #[must_use]
    pub fn output_image(&self) -> &OutputImage {
        self.backend.output_image()
    }

    /// Applies one interaction key; returns whether a redraw-relevant change
    /// occurred.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::DecreaseCutoffFrom => self.filter.decrease_cutoff_from(&mut *self.backend),
            Key::IncreaseCutoffFrom => self.filter.increase_cutoff_from(&mut *self.backend),
            Key::DecreaseCutoffTo => self.filter.decrease_cutoff_to(&mut *self.backend),
            Key::IncreaseCutoffTo => self.filter.increase_cutoff_to(&mut *self.backend),
            Key::ToggleShadows => {
                self.filter.toggle_shadows(&mut *self.backend);
            }
        }
        true
    }

    /// Applies a raw character through the default bindings.
    pub fn handle_char(&mut self, c: char) -> bool {
        Key::from_char(c).is_some_and(|key| self.handle_key(key))
    }

    /// Sets the cutoff window programmatically (unclamped passthrough).
    pub fn set_cutoff(&mut self, from: f32, to: f32) {
        self.filter.set_cutoff(&mut *self.backend, from, to);
    }

    /// Sets the gradient endpoints for the next scene rebuild.
    pub fn set_gradient(&mut self, begin: Vec3, end: Vec3) {
        self.filter.set_gradient(begin, end);
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Current filter state.
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The built voxel grid, once initialized.
    #[must_use]
    pub fn grid(&self) -> Option<&VoxelGrid> {
        self.grid.as_ref()
    }

    /// The built geometry group, once initialized.
    #[must_use]
    pub fn geometry_group(&self) -> Option<&GeometryGroup> {
        self.group.as_ref()
    }
}
