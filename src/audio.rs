use map_core::{AudioCue, AudioError, SoundKind};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Plays cues through a throwaway `<audio>` element per request.
#[derive(Clone, Copy, Debug)]
pub struct HtmlAudioCue {
    volume: f64,
}

impl HtmlAudioCue {
    pub fn new(volume: f64) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

impl AudioCue for HtmlAudioCue {
    fn play(&self, kind: SoundKind) -> Result<(), AudioError> {
        let audio = web::HtmlAudioElement::new_with_src(kind.source())
            .map_err(|e| AudioError::Unavailable(format!("{:?}", e)))?;
        audio.set_volume(self.volume);
        let promise = audio
            .play()
            .map_err(|e| AudioError::Rejected(format!("{:?}", e)))?;
        // autoplay policies reject asynchronously
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[sound] audio playback not essential ({}): {:?}", kind.name(), e);
            }
        });
        Ok(())
    }
}
