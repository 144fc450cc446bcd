use core::fmt;
use crate::*;

/// Outward unit normals of the faces of the dodecahedron in sensor space, index `i` belongs to
/// face `i + 1`.
///
/// These are the face normals of a regular dodecahedron (the vertices of an icosahedron, scaled
/// to unit length) rotated so face 1 points up along +z, with the sensor mounted slightly tilted
/// (about 2.83°) around the x axis.
///
pub static FACE_NORMALS: [Vector; FACE_COUNT] = [
    /*  1 */ Vector::new( 0.0000000, -0.0493718,  0.9987805),
    /*  2 */ Vector::new(-0.5257311,  0.7006446,  0.4823940),
    /*  3 */ Vector::new( 0.5257311,  0.7006446,  0.4823940),
    /*  4 */ Vector::new( 0.8506508, -0.2981359,  0.4330222),
    /*  5 */ Vector::new( 0.0000000, -0.9154162,  0.4025087),
    /*  6 */ Vector::new(-0.8506508, -0.2981359,  0.4330222),
    /*  7 */ Vector::new(-0.8506508,  0.2981359, -0.4330222),
    /*  8 */ Vector::new( 0.0000000,  0.9154162, -0.4025087),
    /*  9 */ Vector::new( 0.8506508,  0.2981359, -0.4330222),
    /* 10 */ Vector::new( 0.5257311, -0.7006446, -0.4823940),
    /* 11 */ Vector::new(-0.5257311, -0.7006446, -0.4823940),
    /* 12 */ Vector::new( 0.0000000,  0.0493718, -0.9987805),
];

/// A face of the dodecahedron, numbered 1 to 12.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face(u8);

impl Face {
    /// Returns `None` for numbers outside of `1..=12`.
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= FACE_COUNT {
            Some(Face(number))
        } else {
            None
        }
    }

    /// The 1-based face number.
    #[inline]
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Unit vector pointing out of this face.
    #[inline]
    pub fn normal(&self) -> &'static Vector {
        &FACE_NORMALS[self.0 as usize - 1]
    }

    /// The face on the other side of the dodecahedron, the one facing down while this one is up.
    pub fn opposite(&self) -> Self {
        closest_face(&-*self.normal()).unwrap_or(*self)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finds the face whose normal is closest (smallest angle) to the measured acceleration. Since
/// gravity is measured as an upward acceleration while resting, this is the face pointing up.
///
/// Ties go to the lowest face number. Returns `None` when the vector has no direction, i.e. its
/// magnitude is zero (free fall) or not finite.
///
pub fn closest_face(accel: &Vector) -> Option<Face> {
    let magnitude = accel.magnitude();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return None;
    }

    let mut closest = 0;
    let mut closest_cos = -10.0;
    for (i, normal) in FACE_NORMALS.iter().enumerate() {
        // Cosine of the angle between the two, the normals are all unit length.
        let cos = normal.dot(accel) / magnitude;
        if cos > closest_cos {
            closest = i;
            closest_cos = cos;
        }
    }
    Face::new(closest as u8 + 1)
}

/// Keeps track of the face that is up between samples.
///
/// Samples without a direction (see [`closest_face`]) do not change the face, the last known face
/// is reported instead.
///
#[derive(Debug, Clone, Default)]
pub struct FaceDetection
{
    face: Option<Face>,
}

impl FaceDetection
{
    #[inline]
    pub const fn new() -> Self {
        FaceDetection { face: None }
    }

    /// The last known face, `None` until the first usable sample.
    #[inline]
    pub fn face(&self) -> Option<Face> {
        self.face
    }

    /// Classifies one accelerometer sample and returns the face that is up.
    ///
    pub fn update(&mut self, accel: &Vector) -> Option<Face> {
        match closest_face(accel) {
            Some(face) => {
                if self.face != Some(face) {
                    log::debug!("Face changed: {:?} -> {}", self.face.map(|f| f.index()), face);
                }
                self.face = Some(face);
            }
            None => {
                log::warn!("Acceleration without direction, keeping face {:?}", self.face.map(|f| f.index()));
            }
        }
        self.face
    }

    pub fn reset(&mut self) {
        self.face = None;
    }
}
