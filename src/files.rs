//! File Picker
//!
//! Reads the file chosen in an `<input type="file">` into memory.

use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use kamashka_core::Attachment;

/// First file of a change event on a file input, if any was chosen
pub fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

pub async fn read_attachment(file: &web_sys::File) -> Result<Attachment, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(Attachment::new(file.name(), file.type_(), bytes))
}
