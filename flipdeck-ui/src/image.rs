//! Reading picked files into data URLs

use flipdeck::editor::{data_url, ImageError, ImageLoader};
use wasm_bindgen_futures::JsFuture;

/// Reads `File`s from `<input type="file">`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserImageLoader;

impl ImageLoader for BrowserImageLoader {
    type Handle = web_sys::File;

    async fn load_data_url(&self, file: web_sys::File) -> Result<String, ImageError> {
        let name = file.name();
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| ImageError::Read {
                name: name.clone(),
                reason: format!("{:?}", e),
            })?;

        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        if bytes.is_empty() {
            return Err(ImageError::Empty(name));
        }

        Ok(data_url(&file.type_(), &bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn file(bytes: &[u8], name: &str, mime: &str) -> web_sys::File {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime);
        web_sys::File::new_with_u8_array_sequence_and_options(&parts, name, &options).unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_file_to_data_url() {
        let url = BrowserImageLoader
            .load_data_url(file(b"GIF89a", "pic.gif", "image/gif"))
            .await
            .unwrap();
        assert_eq!(url, "data:image/gif;base64,R0lGODlh");
    }

    #[wasm_bindgen_test]
    async fn test_empty_file_fails() {
        let err = BrowserImageLoader
            .load_data_url(file(b"", "empty.png", "image/png"))
            .await
            .unwrap_err();
        assert_eq!(err, ImageError::Empty("empty.png".to_string()));
    }
}
