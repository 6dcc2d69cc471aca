//! The six faces of a cubemap, identified by a signed coordinate axis.

use std::fmt;

use glam::Vec3;

/// Direction along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Positive,
    Negative,
}

/// A coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Sign {
    /// `1.0` for positive, `-1.0` for negative.
    #[must_use]
    pub fn factor(self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

impl Axis {
    /// Unit vector along the positive direction of this axis.
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// One face of a cubemap.
///
/// Discriminants follow the layer order graphics APIs expect when a cubemap
/// texture is uploaded: +X, −X, +Y, −Y, +Z, −Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in texture upload order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// All six faces in the order render steps are invoked: positive faces
    /// first, then negative, each as x, y, z.
    pub const RENDER_ORDER: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::PosY,
        CubeFace::PosZ,
        CubeFace::NegX,
        CubeFace::NegY,
        CubeFace::NegZ,
    ];

    /// Build a face from its sign and axis.
    #[must_use]
    pub fn from_parts(sign: Sign, axis: Axis) -> CubeFace {
        match (sign, axis) {
            (Sign::Positive, Axis::X) => CubeFace::PosX,
            (Sign::Negative, Axis::X) => CubeFace::NegX,
            (Sign::Positive, Axis::Y) => CubeFace::PosY,
            (Sign::Negative, Axis::Y) => CubeFace::NegY,
            (Sign::Positive, Axis::Z) => CubeFace::PosZ,
            (Sign::Negative, Axis::Z) => CubeFace::NegZ,
        }
    }

    #[must_use]
    pub fn sign(self) -> Sign {
        match self {
            CubeFace::PosX | CubeFace::PosY | CubeFace::PosZ => Sign::Positive,
            CubeFace::NegX | CubeFace::NegY | CubeFace::NegZ => Sign::Negative,
        }
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            CubeFace::PosX | CubeFace::NegX => Axis::X,
            CubeFace::PosY | CubeFace::NegY => Axis::Y,
            CubeFace::PosZ | CubeFace::NegZ => Axis::Z,
        }
    }

    /// Layer index of this face in upload order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Outward-pointing unit normal, which is also the camera's view
    /// direction when rendering this face from the cube's center.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        self.axis().unit() * self.sign().factor()
    }

    /// Short file-friendly name such as `px` or `nz`.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            CubeFace::PosX => "px",
            CubeFace::NegX => "nx",
            CubeFace::PosY => "py",
            CubeFace::NegY => "ny",
            CubeFace::PosZ => "pz",
            CubeFace::NegZ => "nz",
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.sign() {
            Sign::Positive => '+',
            Sign::Negative => '-',
        };
        let axis = match self.axis() {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        };
        write!(f, "{sign}{axis}")
    }
}
