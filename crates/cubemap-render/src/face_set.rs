//! Face-keyed collections of rendered cubemap images.

use std::ops::Index;

use cubemap_faces::CubeFace;

use crate::error::CubemapError;

/// Six corrected face images, all `resolution × resolution`.
#[derive(Clone, Debug, PartialEq)]
pub struct CubemapFaceSet<I> {
    resolution: u32,
    // Indexed by `CubeFace::index()`.
    faces: [I; 6],
}

impl<I> CubemapFaceSet<I> {
    /// Side length of every face image.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Image for `face`.
    pub fn get(&self, face: CubeFace) -> &I {
        &self.faces[face.index()]
    }

    /// Faces in upload order (+X, −X, +Y, −Y, +Z, −Z).
    pub fn iter(&self) -> impl Iterator<Item = (CubeFace, &I)> {
        CubeFace::ALL.into_iter().zip(self.faces.iter())
    }

    /// Consume the set, returning images in upload order, one per texture
    /// layer.
    pub fn into_layers(self) -> [I; 6] {
        self.faces
    }
}

impl<I> Index<CubeFace> for CubemapFaceSet<I> {
    type Output = I;

    fn index(&self, face: CubeFace) -> &I {
        self.get(face)
    }
}

/// Faces collected by a run that may have stopped early.
///
/// Unlike [`CubemapFaceSet`], this type makes no promise that every face is
/// present. Use [`PartialFaceSet::into_complete`] before treating it as a
/// cubemap.
#[derive(Clone, Debug)]
pub struct PartialFaceSet<I> {
    resolution: u32,
    faces: [Option<I>; 6],
}

impl<I> PartialFaceSet<I> {
    pub(crate) fn new(resolution: u32) -> Self {
        Self {
            resolution,
            faces: [None, None, None, None, None, None],
        }
    }

    pub(crate) fn insert(&mut self, face: CubeFace, image: I) {
        self.faces[face.index()] = Some(image);
    }

    /// Side length of every face image.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Image for `face`, if it was rendered.
    pub fn get(&self, face: CubeFace) -> Option<&I> {
        self.faces[face.index()].as_ref()
    }

    /// Number of faces present.
    pub fn len(&self) -> usize {
        self.faces.iter().filter(|f| f.is_some()).count()
    }

    /// Returns `true` if no face was rendered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if all six faces are present.
    pub fn is_complete(&self) -> bool {
        self.faces.iter().all(Option::is_some)
    }

    /// Missing faces, in render order.
    pub fn missing(&self) -> Vec<CubeFace> {
        CubeFace::RENDER_ORDER
            .into_iter()
            .filter(|face| self.faces[face.index()].is_none())
            .collect()
    }

    /// Convert into a complete set, or fail with [`CubemapError::Incomplete`].
    pub fn into_complete(self) -> Result<CubemapFaceSet<I>, CubemapError> {
        let missing = self.missing();
        match self.faces {
            [Some(px), Some(nx), Some(py), Some(ny), Some(pz), Some(nz)] => Ok(CubemapFaceSet {
                resolution: self.resolution,
                faces: [px, nx, py, ny, pz, nz],
            }),
            _ => Err(CubemapError::Incomplete { missing }),
        }
    }
}
