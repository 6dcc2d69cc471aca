//! The cubemap renderer: drives six face passes and assembles the results.

use std::sync::atomic::{AtomicBool, Ordering};

use cubemap_faces::{CubeFace, FaceBasisTable};

use crate::error::{BoxError, CubemapError};
use crate::face_set::{CubemapFaceSet, PartialFaceSet};
use crate::params::{FaceParams, RenderSettings};
use crate::raster::{FaceRaster, orientation_correction};

/// Where a [`CubemapRenderer`] is in its run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererState {
    /// No run in progress. Also the state after a failed or cancelled run.
    Idle,
    /// Rendering the given face.
    Rendering(CubeFace),
    /// The last run produced a complete face set.
    Done,
}

/// A render step split into one-time setup and per-face drawing.
///
/// `initialize` runs once per cubemap (e.g. to build a shader program or a
/// noise generator). `render` then runs for each face and draws into a
/// target owned by the renderer, which is blank at the start of every face.
pub trait FaceRenderer<I> {
    /// Data produced by `initialize` and shared read-only across faces.
    type Shared;
    /// Error returned by either phase.
    type Error: Into<BoxError>;

    fn initialize(&mut self, settings: &RenderSettings) -> Result<Self::Shared, Self::Error>;

    fn render(
        &mut self,
        params: &FaceParams<'_>,
        shared: &Self::Shared,
        target: &mut I,
    ) -> Result<(), Self::Error>;
}

/// Renders the six faces of a cubemap through a caller-supplied render step.
#[derive(Debug)]
pub struct CubemapRenderer {
    settings: RenderSettings,
    table: FaceBasisTable,
    state: RendererState,
}

impl CubemapRenderer {
    /// Create a renderer producing `resolution × resolution` faces.
    pub fn new(resolution: u32) -> Result<Self, CubemapError> {
        Ok(Self {
            settings: RenderSettings::new(resolution)?,
            table: FaceBasisTable::new(),
            state: RendererState::Idle,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn table(&self) -> &FaceBasisTable {
        &self.table
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    /// Render all six faces with `step`, which returns one image per face.
    ///
    /// Faces are rendered in [`CubeFace::RENDER_ORDER`]. The first failing
    /// face aborts the run.
    pub fn render_all<I, E, F>(&mut self, mut step: F) -> Result<CubemapFaceSet<I>, CubemapError>
    where
        I: FaceRaster,
        E: Into<BoxError>,
        F: FnMut(&FaceParams<'_>) -> Result<I, E>,
    {
        self.run(None, |params| {
            step(params).map_err(|e| CubemapError::render_step(params.face, e))
        })?
        .into_complete()
    }

    /// Like [`render_all`](Self::render_all), passing `shared` to every face.
    pub fn render_all_with<S, I, E, F>(
        &mut self,
        shared: &S,
        mut step: F,
    ) -> Result<CubemapFaceSet<I>, CubemapError>
    where
        I: FaceRaster,
        E: Into<BoxError>,
        F: FnMut(&FaceParams<'_>, &S) -> Result<I, E>,
    {
        self.run(None, |params| {
            step(params, shared).map_err(|e| CubemapError::render_step(params.face, e))
        })?
        .into_complete()
    }

    /// Render with a two-phase [`FaceRenderer`].
    pub fn render<I, R>(&mut self, renderer: &mut R) -> Result<CubemapFaceSet<I>, CubemapError>
    where
        I: FaceRaster,
        R: FaceRenderer<I>,
    {
        let shared = renderer
            .initialize(&self.settings)
            .map_err(|e| CubemapError::Initialize { source: e.into() })?;

        let resolution = self.settings.resolution();
        let mut target = I::blank(resolution);
        self.run(None, |params| {
            renderer
                .render(params, &shared, &mut target)
                .map_err(|e| CubemapError::render_step(params.face, e))?;
            Ok(std::mem::replace(&mut target, I::blank(resolution)))
        })?
        .into_complete()
    }

    /// Render faces until `cancel` is set.
    ///
    /// The flag is checked before each face. A cancelled run returns the
    /// faces finished so far; the result reports itself as incomplete.
    pub fn render_until<I, E, F>(
        &mut self,
        cancel: &AtomicBool,
        mut step: F,
    ) -> Result<PartialFaceSet<I>, CubemapError>
    where
        I: FaceRaster,
        E: Into<BoxError>,
        F: FnMut(&FaceParams<'_>) -> Result<I, E>,
    {
        self.run(Some(cancel), |params| {
            step(params).map_err(|e| CubemapError::render_step(params.face, e))
        })
    }

    /// Render all six faces concurrently, one scoped thread per face.
    ///
    /// Every face renders into its own image; `shared` is only read. All
    /// workers are joined before the set is assembled. If several faces
    /// fail, the error of the earliest face in render order is returned.
    pub fn render_all_parallel<S, I, E, F>(
        &mut self,
        shared: &S,
        step: F,
    ) -> Result<CubemapFaceSet<I>, CubemapError>
    where
        S: Sync,
        I: FaceRaster + Send,
        E: Into<BoxError>,
        F: Fn(&FaceParams<'_>, &S) -> Result<I, E> + Sync,
    {
        let resolution = self.settings.resolution();
        let table = &self.table;
        let settings = &self.settings;
        let step = &step;

        self.state = RendererState::Rendering(CubeFace::RENDER_ORDER[0]);
        let results: Vec<(CubeFace, Result<I, CubemapError>)> = std::thread::scope(|scope| {
            let handles: Vec<_> = CubeFace::RENDER_ORDER
                .into_iter()
                .map(|face| {
                    let handle = std::thread::Builder::new()
                        .name(format!("cubemap-{}", face.short_name()))
                        .spawn_scoped(scope, move || {
                            let params = FaceParams::new(table.get(face), settings);
                            step(&params, shared)
                                .map_err(|e| CubemapError::render_step(face, e))
                                .and_then(|image| finish_face(face, image, resolution))
                        });
                    (face, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(face, handle)| {
                    let result = match handle {
                        Ok(handle) => handle
                            .join()
                            .unwrap_or(Err(CubemapError::WorkerPanicked { face })),
                        Err(source) => Err(CubemapError::WorkerSpawn { face, source }),
                    };
                    (face, result)
                })
                .collect()
        });

        let mut faces = PartialFaceSet::new(resolution);
        for (face, result) in results {
            match result {
                Ok(image) => faces.insert(face, image),
                Err(e) => {
                    log::warn!("Cubemap face {face} failed: {e}");
                    self.state = RendererState::Idle;
                    return Err(e);
                }
            }
        }

        self.state = RendererState::Done;
        log::info!("Rendered cubemap at {resolution}x{resolution} on 6 workers");
        faces.into_complete()
    }

    /// Sequential driver shared by every single-threaded entry point.
    fn run<I, F>(
        &mut self,
        cancel: Option<&AtomicBool>,
        mut produce: F,
    ) -> Result<PartialFaceSet<I>, CubemapError>
    where
        I: FaceRaster,
        F: FnMut(&FaceParams<'_>) -> Result<I, CubemapError>,
    {
        let resolution = self.settings.resolution();
        let mut faces = PartialFaceSet::new(resolution);

        for face in CubeFace::RENDER_ORDER {
            if cancel.is_some_and(|flag| flag.load(Ordering::Acquire)) {
                log::warn!(
                    "Cubemap render cancelled before face {face}, {} of 6 faces done",
                    faces.len()
                );
                break;
            }

            self.state = RendererState::Rendering(face);
            let params = FaceParams::new(self.table.get(face), &self.settings);
            let produced =
                produce(&params).and_then(|image| finish_face(face, image, resolution));
            let image = match produced {
                Ok(image) => image,
                Err(e) => {
                    log::warn!("Cubemap face {face} failed: {e}");
                    self.state = RendererState::Idle;
                    return Err(e);
                }
            };
            faces.insert(face, image);
        }

        if faces.is_complete() {
            self.state = RendererState::Done;
            log::info!("Rendered cubemap at {resolution}x{resolution}");
        } else {
            self.state = RendererState::Idle;
        }
        Ok(faces)
    }
}

/// Check a face image's size and apply the orientation correction.
fn finish_face<I: FaceRaster>(
    face: CubeFace,
    mut image: I,
    resolution: u32,
) -> Result<I, CubemapError> {
    let (width, height) = image.dimensions();
    if width != resolution || height != resolution {
        return Err(CubemapError::FaceSizeMismatch {
            face,
            width,
            height,
            expected: resolution,
        });
    }

    let correction = orientation_correction(face.axis());
    correction.apply(&mut image);
    log::debug!("Rendered face {face} ({correction:?})");
    Ok(image)
}
