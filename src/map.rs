//! Map-widget plumbing: coordinate resolution, environment configuration,
//! and wasm-bindgen bindings to the global `mapboxgl` namespace.
//!
//! A missing access token is a recognized, handled condition; the view
//! layer renders a placeholder instead of a live map.

use js_sys::{Array, Object, Reflect};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Chandigarh; used whenever no usable center is supplied.
pub const DEFAULT_CENTER: MapCenter = MapCenter { latitude: 30.7333, longitude: 76.7794 };

const DEFAULT_ZOOM: f64 = 14.0;
const DEFAULT_STYLE: &str = "mapbox://styles/mapbox/streets-v12";

pub fn access_token() -> Option<&'static str> {
    option_env!("STAYNEST_MAPBOX_TOKEN")
}

pub fn map_style() -> &'static str {
    option_env!("STAYNEST_MAPBOX_STYLE").unwrap_or(DEFAULT_STYLE)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

/// Loosely-typed center as it arrives from data records, accepting both
/// the `lat`/`long` and `latitude`/`longitude` spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct CenterInput {
    #[serde(default, alias = "lat")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "long", alias = "lng")]
    pub longitude: Option<f64>,
}

impl CenterInput {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        CenterInput { latitude: Some(latitude), longitude: Some(longitude) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedCenter {
    Valid(MapCenter),
    /// Coordinates were supplied but are not usable numbers. Outranks every
    /// other fallback state.
    Invalid,
}

/// Absent coordinates fall back to [`DEFAULT_CENTER`]; present but
/// non-finite coordinates are invalid rather than silently defaulted.
pub fn resolve_center(input: Option<&CenterInput>) -> ResolvedCenter {
    let Some(input) = input else {
        return ResolvedCenter::Valid(DEFAULT_CENTER);
    };
    match (input.latitude, input.longitude) {
        (None, None) => ResolvedCenter::Valid(DEFAULT_CENTER),
        (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
            ResolvedCenter::Valid(MapCenter { latitude, longitude })
        }
        _ => ResolvedCenter::Invalid,
    }
}

/// A marker rendered as a price pill at a listing's coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
    pub title: String,
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map container is not available")]
    NoContainer,
    #[error("map widget failed: {0}")]
    Widget(String),
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    type MapboxMap;

    #[cfg(target_family = "wasm")]
    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map", catch)]
    fn new_map(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method, js_name = setCenter)]
    fn set_center(this: &MapboxMap, center: &JsValue);

    #[wasm_bindgen(method)]
    fn remove(this: &MapboxMap);

    #[wasm_bindgen(method)]
    fn on(this: &MapboxMap, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Marker)]
    type MapboxMarker;

    #[cfg(target_family = "wasm")]
    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Marker", catch)]
    fn new_marker(options: &JsValue) -> Result<MapboxMarker, JsValue>;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &MapboxMarker, lng_lat: &JsValue) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &MapboxMarker, map: &MapboxMap) -> MapboxMarker;
}

#[cfg(not(target_family = "wasm"))]
fn new_map(_options: &JsValue) -> Result<MapboxMap, JsValue> {
    unreachable!("mapboxgl is only available on the wasm target")
}

#[cfg(not(target_family = "wasm"))]
fn new_marker(_options: &JsValue) -> Result<MapboxMarker, JsValue> {
    unreachable!("mapboxgl is only available on the wasm target")
}

/// An attached map widget. Dropping the handle without calling
/// [`MapHandle::destroy`] leaks the widget, so the owning component removes
/// it on cleanup.
pub struct MapHandle {
    map: MapboxMap,
    _on_error: Closure<dyn FnMut(JsValue)>,
}

impl MapHandle {
    /// Builds the live widget inside `container`. `on_error` fires for
    /// runtime errors raised by the widget after construction.
    pub fn attach(
        container: &web_sys::HtmlElement,
        token: &str,
        center: MapCenter,
        markers: &[MarkerSpec],
        on_error: impl Fn(String) + 'static,
    ) -> Result<MapHandle, MapError> {
        let options = Object::new();
        set(&options, "container", container.as_ref())?;
        set(&options, "style", &JsValue::from_str(map_style()))?;
        set(&options, "accessToken", &JsValue::from_str(token))?;
        set(&options, "center", &lng_lat(center))?;
        set(&options, "zoom", &JsValue::from_f64(DEFAULT_ZOOM))?;

        let map = new_map(&options).map_err(|e| MapError::Widget(format!("{e:?}")))?;

        let on_error = Closure::wrap(Box::new(move |event: JsValue| {
            on_error(format!("{event:?}"));
        }) as Box<dyn FnMut(JsValue)>);
        map.on("error", on_error.as_ref().unchecked_ref());

        for marker in markers {
            if let Err(error) = add_marker(&map, marker) {
                log::warn!("marker for {} not added: {error}", marker.title);
            }
        }

        Ok(MapHandle { map, _on_error: on_error })
    }

    /// Re-centers the already-rendered widget; never recreates it.
    pub fn recenter(&self, center: MapCenter) {
        self.map.set_center(&lng_lat(center));
    }

    pub fn destroy(self) {
        self.map.remove();
    }
}

fn add_marker(map: &MapboxMap, marker: &MarkerSpec) -> Result<(), MapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MapError::NoContainer)?;
    let element: web_sys::HtmlElement = document
        .create_element("button")
        .map_err(|e| MapError::Widget(format!("{e:?}")))?
        .dyn_into()
        .map_err(|_| MapError::NoContainer)?;
    element.set_class_name(
        "px-3 py-1 font-bold bg-white rounded-full shadow-md cursor-pointer duration-300 focus:scale-90",
    );
    element.set_text_content(Some(&marker.label));
    let _ = element.set_attribute("title", &marker.title);

    let options = Object::new();
    set(&options, "element", element.as_ref())?;
    let pill = new_marker(&options).map_err(|e| MapError::Widget(format!("{e:?}")))?;
    pill.set_lng_lat(&lng_lat(MapCenter { latitude: marker.latitude, longitude: marker.longitude }))
        .add_to(map);
    Ok(())
}

fn lng_lat(center: MapCenter) -> JsValue {
    Array::of2(&JsValue::from_f64(center.longitude), &JsValue::from_f64(center.latitude)).into()
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), MapError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| MapError::Widget(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_spellings_resolve_to_the_same_center() {
        let short: CenterInput = serde_json::from_str(r#"{"lat":30.7,"long":76.8}"#).unwrap();
        let long: CenterInput =
            serde_json::from_str(r#"{"latitude":30.7,"longitude":76.8}"#).unwrap();
        assert_eq!(resolve_center(Some(&short)), resolve_center(Some(&long)));
        assert_eq!(
            resolve_center(Some(&short)),
            ResolvedCenter::Valid(MapCenter { latitude: 30.7, longitude: 76.8 })
        );
    }

    #[test]
    fn absent_coordinates_fall_back_to_default() {
        assert_eq!(resolve_center(None), ResolvedCenter::Valid(DEFAULT_CENTER));
        let empty: CenterInput = serde_json::from_str("{}").unwrap();
        assert_eq!(resolve_center(Some(&empty)), ResolvedCenter::Valid(DEFAULT_CENTER));
    }

    #[test]
    fn non_finite_coordinates_are_invalid_not_defaulted() {
        let input = CenterInput { latitude: Some(f64::NAN), longitude: Some(76.8) };
        assert_eq!(resolve_center(Some(&input)), ResolvedCenter::Invalid);
        let input = CenterInput { latitude: Some(30.7), longitude: Some(f64::INFINITY) };
        assert_eq!(resolve_center(Some(&input)), ResolvedCenter::Invalid);
    }

    #[test]
    fn half_specified_coordinates_are_invalid() {
        let input = CenterInput { latitude: Some(30.7), longitude: None };
        assert_eq!(resolve_center(Some(&input)), ResolvedCenter::Invalid);
    }
}
