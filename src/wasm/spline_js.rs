use crate::float_types::Real;
use crate::spline::Spline3d;
use crate::wasm::to_js_error;
use crate::wasm::vector_js::Vector3dJs;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Spline3dJs {
    pub(crate) inner: Spline3d,
}

#[wasm_bindgen]
impl Spline3dJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Spline3dJs {
        Spline3dJs {
            inner: Spline3d::new(),
        }
    }

    #[wasm_bindgen(js_name = addPoint)]
    pub fn add_point(&mut self, p: &Vector3dJs) {
        self.inner.add_point(&p.inner);
    }

    #[wasm_bindgen(js_name = calcSpline)]
    pub fn calc_spline(&mut self) -> Result<(), JsValue> {
        self.inner.calc_spline().map_err(to_js_error)?;
        Ok(())
    }

    pub fn point(&self, t: f64) -> Result<Vector3dJs, JsValue> {
        self.inner
            .point(t as Real)
            .map(Vector3dJs::from)
            .map_err(to_js_error)
    }

    /// `n` samples flattened to `[x0, y0, z0, x1, ...]`.
    pub fn sample(&self, n: usize) -> Result<Vec<f64>, JsValue> {
        let points = self.inner.sample(n).map_err(to_js_error)?;
        Ok(points
            .iter()
            .flat_map(|p| <[Real; 3]>::from(*p))
            .collect())
    }
}

impl Default for Spline3dJs {
    fn default() -> Self {
        Self::new()
    }
}
