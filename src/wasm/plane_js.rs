use crate::plane::Plane;
use crate::wasm::vector_js::Vector3dJs;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct PlaneJs {
    pub(crate) inner: Plane,
}

#[wasm_bindgen]
impl PlaneJs {
    // Constructor: plane through three points, anchored at their centroid
    #[wasm_bindgen(constructor)]
    pub fn new_from_points(a: &Vector3dJs, b: &Vector3dJs, c: &Vector3dJs) -> Self {
        Self {
            inner: Plane::from_points(&a.inner, &b.inner, &c.inner),
        }
    }

    #[wasm_bindgen(js_name = fromPointAndNormal)]
    pub fn from_point_and_normal(point: &Vector3dJs, normal: &Vector3dJs) -> Self {
        Self {
            inner: Plane::from_point_and_normal(&point.inner, &normal.inner),
        }
    }

    #[wasm_bindgen(js_name = xyPlane)]
    pub fn xy_plane() -> Self {
        Self {
            inner: Plane::XY_PLANE,
        }
    }

    #[wasm_bindgen(js_name = xzPlane)]
    pub fn xz_plane() -> Self {
        Self {
            inner: Plane::XZ_PLANE,
        }
    }

    #[wasm_bindgen(js_name = yzPlane)]
    pub fn yz_plane() -> Self {
        Self {
            inner: Plane::YZ_PLANE,
        }
    }

    pub fn normal(&self) -> Vector3dJs {
        self.inner.normal().into()
    }

    pub fn anchor(&self) -> Vector3dJs {
        self.inner.anchor().into()
    }

    pub fn dist(&self) -> f64 {
        self.inner.dist()
    }

    // Which side of the plane a point lies on (1 front, 0 on, -1 back)
    pub fn compare(&self, p: &Vector3dJs) -> i8 {
        self.inner.compare(&p.inner).into()
    }

    pub fn project(&self, p: &Vector3dJs) -> Vector3dJs {
        self.inner.project(&p.inner).into()
    }

    pub fn distance(&self, p: &Vector3dJs) -> f64 {
        self.inner.distance(&p.inner)
    }

    pub fn flipped(&self) -> PlaneJs {
        PlaneJs {
            inner: self.inner.flipped(),
        }
    }
}
