//! Browser playback for pronunciation audio.
//!
//! Wraps the fetched payload in a `Blob`, points an `<audio>` element at an
//! object URL for it, and starts playback. The URL is revoked once playback
//! ends or the element reports an error, or right away if `play()` throws.
//! Requires a browser environment; SSR paths report that playback is
//! unavailable.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::actions::AudioPlayer;

/// MIME type the backend serves pronunciation clips with.
pub const AUDIO_MIME: &str = "audio/mpeg";

/// Object URL shared by every release path; only the first `take` gets it.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Default)]
pub(crate) struct UrlLease(Rc<Cell<Option<String>>>);

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl UrlLease {
    pub(crate) fn new(url: String) -> Self {
        Self(Rc::new(Cell::new(Some(url))))
    }

    /// URL to revoke, or `None` if another path already released it.
    pub(crate) fn take(&self) -> Option<String> {
        self.0.take()
    }
}

/// `AudioPlayer` backed by `HtmlAudioElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAudio;

impl AudioPlayer for BrowserAudio {
    fn play(&self, bytes: Vec<u8>) -> Result<(), String> {
        if bytes.is_empty() {
            return Err("empty audio payload".to_owned());
        }
        #[cfg(feature = "hydrate")]
        {
            let array = js_sys::Uint8Array::from(bytes.as_slice());
            let parts = js_sys::Array::of1(&array);
            let options = web_sys::BlobPropertyBag::new();
            options.set_type(AUDIO_MIME);
            let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                .map_err(|e| js_message(&e))?;
            let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| js_message(&e))?;
            let lease = UrlLease::new(url.clone());
            let audio = match web_sys::HtmlAudioElement::new_with_src(&url) {
                Ok(audio) => audio,
                Err(e) => {
                    revoke(&lease);
                    return Err(js_message(&e));
                }
            };
            attach_release(&audio, &lease);
            if let Err(e) = audio.play() {
                revoke(&lease);
                return Err(js_message(&e));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err("audio playback requires a browser".to_owned())
        }
    }
}

#[cfg(feature = "hydrate")]
fn revoke(lease: &UrlLease) {
    if let Some(url) = lease.take() {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}

#[cfg(feature = "hydrate")]
fn attach_release(audio: &web_sys::HtmlAudioElement, lease: &UrlLease) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let on_ended_lease = lease.clone();
    let on_ended = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        revoke(&on_ended_lease);
    }) as Box<dyn FnMut(_)>);
    audio.set_onended(Some(on_ended.as_ref().unchecked_ref()));
    on_ended.forget();

    let on_error_lease = lease.clone();
    let on_error = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        revoke(&on_error_lease);
    }) as Box<dyn FnMut(_)>);
    audio.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();
}

#[cfg(feature = "hydrate")]
fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
