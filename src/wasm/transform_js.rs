use crate::float_types::Real;
use crate::transform::Transform;
use crate::wasm::plane_js::PlaneJs;
use crate::wasm::to_js_error;
use crate::wasm::vector_js::Vector3dJs;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct TransformJs {
    pub(crate) inner: Transform,
}

#[wasm_bindgen]
impl TransformJs {
    /// The identity transform.
    #[wasm_bindgen(constructor)]
    pub fn new() -> TransformJs {
        TransformJs {
            inner: Transform::unity(),
        }
    }

    /// From 16 row-major values.
    #[wasm_bindgen(js_name = fromValues)]
    pub fn from_values(values: Vec<f64>) -> Result<TransformJs, JsValue> {
        let inner = Transform::from_values(&values).map_err(to_js_error)?;
        Ok(TransformJs { inner })
    }

    #[wasm_bindgen(js_name = rotX)]
    pub fn rot_x(&mut self, degrees: f64) {
        self.inner.rot_x(degrees as Real);
    }

    #[wasm_bindgen(js_name = rotY)]
    pub fn rot_y(&mut self, degrees: f64) {
        self.inner.rot_y(degrees as Real);
    }

    #[wasm_bindgen(js_name = rotZ)]
    pub fn rot_z(&mut self, degrees: f64) {
        self.inner.rot_z(degrees as Real);
    }

    pub fn rot(&mut self, x: f64, y: f64, z: f64) {
        self.inner.rot(x as Real, y as Real, z as Real);
    }

    #[wasm_bindgen(js_name = rotAxis)]
    pub fn rot_axis(&mut self, axis_pos: &Vector3dJs, axis_dir: &Vector3dJs, degrees: f64) {
        self.inner
            .rot_axis(&axis_pos.inner, &axis_dir.inner, degrees as Real);
    }

    #[wasm_bindgen(js_name = rotFromTo)]
    pub fn rot_from_to(&mut self, from: &Vector3dJs, to: &Vector3dJs) {
        self.inner.rot_from_to(&from.inner, &to.inner);
    }

    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        self.inner.translate(x as Real, y as Real, z as Real);
    }

    pub fn scale(&mut self, x: f64, y: f64, z: f64) -> Result<(), JsValue> {
        self.inner
            .scale(x as Real, y as Real, z as Real)
            .map_err(to_js_error)?;
        Ok(())
    }

    pub fn mirror(&mut self, plane: &PlaneJs) {
        self.inner.mirror(&plane.inner);
    }

    pub fn apply(&mut self, other: &TransformJs) {
        self.inner.apply(&other.inner);
    }

    #[wasm_bindgen(js_name = isMirror)]
    pub fn is_mirror(&self) -> bool {
        self.inner.is_mirror()
    }

    pub fn transform(&self, v: &Vector3dJs) -> Vector3dJs {
        self.inner.transform(&v.inner).into()
    }

    #[wasm_bindgen(js_name = transformAmount)]
    pub fn transform_amount(&self, v: &Vector3dJs, amount: f64) -> Vector3dJs {
        self.inner.transform_amount(&v.inner, amount as Real).into()
    }

    /// The 16 row-major matrix values.
    #[wasm_bindgen(js_name = toValues)]
    pub fn to_values(&self) -> Vec<f64> {
        self.inner.to_values().to_vec()
    }
}

impl Default for TransformJs {
    fn default() -> Self {
        Self::new()
    }
}
