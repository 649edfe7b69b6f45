use std::future::Future;
use std::time::Duration;

use js_sys::{Math, Promise};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use vizij_sort_core::{
    sequence, Rect, Settings, Sleeper, SortAlgorithm, Surface, SurfaceError, Visualizer,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// `Surface` over a canvas 2D context.
struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, JsError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| JsError::new(&format!("canvas context error: {:?}", e)))?
            .ok_or_else(|| JsError::new("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsError::new("2d context is not a CanvasRenderingContext2d"))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    fn draw_rect(
        &mut self,
        rect: Rect,
        outline: &str,
        fill: &str,
        line_thickness: f64,
    ) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx.set_line_width(line_thickness);
        self.ctx.set_stroke_style_str(outline);
        self.ctx.set_fill_style_str(fill);
        self.ctx.rect(rect.x, rect.y, rect.width, rect.height);
        self.ctx.fill();
        self.ctx.stroke();
        Ok(())
    }
}

/// Sleeper that resolves a promise from `setTimeout`, yielding to the event loop.
struct TimeoutSleeper;

impl Sleeper for TimeoutSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let ms = duration.as_millis().min(i32::MAX as u128) as i32;
        let promise = Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                    .ok()
            });
            if scheduled.is_none() {
                // No window (e.g. a worker): resolve on the next microtask.
                let _ = resolve.call0(&JsValue::UNDEFINED);
            }
        });
        async move {
            let _ = JsFuture::from(promise).await;
        }
    }
}

fn parse_settings(settings: JsValue) -> Result<Settings, JsError> {
    if jsvalue_is_undefined_or_null(&settings) {
        Ok(Settings::default())
    } else {
        swb::from_value(settings).map_err(|e| JsError::new(&format!("settings error: {e}")))
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64((Math::random() * u64::MAX as f64) as u64)
}

/// Sort `values` (or a shuffled ramp when undefined/null) on `canvas`, animating each step.
///
/// `settings` is a camelCase settings object or undefined/null for defaults.
/// `algorithm` is `"bubble"` or `"selection"`. Resolves to `{ values, summary }`.
#[wasm_bindgen(js_name = runVisualization)]
pub async fn run_visualization(
    canvas: HtmlCanvasElement,
    settings: JsValue,
    algorithm: String,
    values: JsValue,
) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();

    let settings = parse_settings(settings)?;
    let algorithm: SortAlgorithm = algorithm
        .parse()
        .map_err(|e| JsError::new(&format!("{e}")))?;
    let surface = CanvasSurface::new(canvas)?;
    let config = settings
        .finalize(surface.height())
        .map_err(|e| JsError::new(&format!("{e}")))?;

    let values: Vec<f64> = if jsvalue_is_undefined_or_null(&values) {
        sequence::shuffled_ramp(config.count, &mut seeded_rng())
    } else {
        swb::from_value(values).map_err(|e| JsError::new(&format!("values error: {e}")))?
    };
    log::debug!("runVisualization: {} over {} values", algorithm, values.len());

    let mut viz = Visualizer::new(config, surface, TimeoutSleeper);
    let outcome = viz
        .run(values, algorithm)
        .await
        .map_err(|e| JsError::new(&format!("{e}")))?;
    swb::to_value(&outcome).map_err(|e| JsError::new(&format!("outcome error: {e}")))
}

/// Default settings as a plain JS object, for hosts that want to tweak a few fields.
#[wasm_bindgen(js_name = defaultSettings)]
pub fn default_settings() -> Result<JsValue, JsError> {
    swb::to_value(&Settings::default()).map_err(|e| JsError::new(&format!("settings error: {e}")))
}

/// Validate a settings JSON string. Returns the normalized settings object.
#[wasm_bindgen(js_name = parseSettingsJson)]
pub fn parse_settings_json(text: &str) -> Result<JsValue, JsError> {
    let settings = Settings::from_json(text).map_err(|e| JsError::new(&format!("{e}")))?;
    swb::to_value(&settings).map_err(|e| JsError::new(&format!("settings error: {e}")))
}

/// Names accepted by `runVisualization`.
#[wasm_bindgen]
pub fn algorithms() -> Vec<JsValue> {
    SortAlgorithm::ALL
        .iter()
        .map(|a| JsValue::from_str(a.name()))
        .collect()
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
