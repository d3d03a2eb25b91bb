//! Browser glue for the views: downloads, picked files, and geolocation.
//!
//! Hydrate-only. Each helper reports failure as a message the calling view
//! can show, since there is nothing to retry.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::pages::export::ExportFile;

/// Offer `file` as a download through a temporary object URL.
///
/// # Errors
///
/// Returns a message if the document or blob APIs are unavailable.
pub fn download(file: &ExportFile) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&file.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(file.mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "could not create file")?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "could not create file")?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "could not start download")?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Name and bytes of every file picked in `input`.
///
/// # Errors
///
/// Returns a message if a file cannot be read.
pub async fn read_files(input: &web_sys::HtmlInputElement) -> Result<Vec<(String, Vec<u8>)>, String> {
    let Some(list) = input.files() else {
        return Ok(Vec::new());
    };
    let mut files = Vec::new();
    for index in 0..list.length() {
        let Some(file) = list.get(index) else {
            continue;
        };
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|_| format!("could not read {}", file.name()))?;
        files.push((file.name(), js_sys::Uint8Array::new(&buffer).to_vec()));
    }
    Ok(files)
}

/// One geolocation fix as `(lat, lon)`.
///
/// # Errors
///
/// Returns a message if geolocation is unavailable or the user denies it.
pub async fn current_position() -> Result<(f64, f64), String> {
    let geolocation = web_sys::window()
        .ok_or("no window")?
        .navigator()
        .geolocation()
        .map_err(|_| "geolocation unavailable")?;

    let (tx, rx) = futures::channel::oneshot::channel::<Result<(f64, f64), String>>();
    let tx = std::rc::Rc::new(std::cell::RefCell::new(Some(tx)));

    let ok_tx = tx.clone();
    let on_fix = Closure::once(move |position: web_sys::GeolocationPosition| {
        let coords = position.coords();
        if let Some(tx) = ok_tx.borrow_mut().take() {
            let _ = tx.send(Ok((coords.latitude(), coords.longitude())));
        }
    });
    let on_error = Closure::once(move |error: web_sys::GeolocationPositionError| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(Err(error.message()));
        }
    });

    geolocation
        .get_current_position_with_error_callback(on_fix.as_ref().unchecked_ref(), Some(on_error.as_ref().unchecked_ref()))
        .map_err(|_| "geolocation unavailable")?;
    let fix = rx.await.map_err(|_| "geolocation cancelled".to_owned())?;
    drop((on_fix, on_error));
    fix
}
