use crate::float_types::Real;
use crate::traits::Vector3d;
use crate::vector::Vec3;
use crate::wasm::transform_js::TransformJs;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Vector3dJs {
    pub(crate) inner: Vec3,
}

#[wasm_bindgen]
impl Vector3dJs {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> Vector3dJs {
        Vector3dJs {
            inner: Vec3::xyz(x as Real, y as Real, z as Real),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.inner.z() as f64
    }

    pub fn plus(&self, other: &Vector3dJs) -> Vector3dJs {
        self.inner.plus(&other.inner).into()
    }

    pub fn minus(&self, other: &Vector3dJs) -> Vector3dJs {
        self.inner.minus(&other.inner).into()
    }

    pub fn times(&self, a: f64) -> Vector3dJs {
        self.inner.times(a as Real).into()
    }

    pub fn divided(&self, a: f64) -> Vector3dJs {
        self.inner.divided(a as Real).into()
    }

    pub fn dot(&self, other: &Vector3dJs) -> f64 {
        self.inner.dot(&other.inner) as f64
    }

    pub fn crossed(&self, other: &Vector3dJs) -> Vector3dJs {
        self.inner.crossed(&other.inner).into()
    }

    pub fn magnitude(&self) -> f64 {
        self.inner.magnitude() as f64
    }

    pub fn normalized(&self) -> Vector3dJs {
        self.inner.normalized().into()
    }

    pub fn negated(&self) -> Vector3dJs {
        self.inner.negated().into()
    }

    pub fn orthogonal(&self) -> Vector3dJs {
        self.inner.orthogonal().into()
    }

    /// Angle in degrees.
    pub fn angle(&self, other: &Vector3dJs) -> f64 {
        self.inner.angle(&other.inner) as f64
    }

    pub fn distance(&self, other: &Vector3dJs) -> f64 {
        self.inner.distance(&other.inner) as f64
    }

    pub fn lerp(&self, other: &Vector3dJs, t: f64) -> Vector3dJs {
        self.inner.lerp(&other.inner, t as Real).into()
    }

    pub fn project(&self, v: &Vector3dJs) -> Vector3dJs {
        self.inner.project(&v.inner).into()
    }

    pub fn collinear(&self, p2: &Vector3dJs, p3: &Vector3dJs) -> bool {
        self.inner.collinear(&p2.inner, &p3.inner)
    }

    pub fn transformed(&self, transform: &TransformJs) -> Vector3dJs {
        self.inner.transformed(&transform.inner).into()
    }

    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f64> {
        self.inner.to_array().to_vec()
    }

    #[wasm_bindgen(js_name = toStlString)]
    pub fn to_stl_string(&self) -> String {
        self.inner.to_stl_string()
    }

    #[wasm_bindgen(js_name = toObjString)]
    pub fn to_obj_string(&self) -> String {
        self.inner.to_obj_string()
    }
}

// Rust-only conversions
impl From<Vec3> for Vector3dJs {
    fn from(v: Vec3) -> Self {
        Vector3dJs { inner: v }
    }
}

impl From<&Vector3dJs> for Vec3 {
    fn from(v: &Vector3dJs) -> Self {
        v.inner
    }
}
