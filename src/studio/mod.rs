//! Client-side generation state: the gallery list, its persisted history and
//! the full-screen preview.

pub mod form;
pub mod store;

pub use form::GenerationForm;
pub use store::{FileHistoryStore, HistoryStore, MemoryHistoryStore};

use crate::{
    config::Config,
    error::{GenerateError, Result},
    generation::{ImageGenerator, ImageService},
    models::GeneratedImage,
};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

pub const HISTORY_KEY: &str = "ai-generated-images";
pub const HISTORY_LIMIT: usize = 50;

#[derive(Default)]
struct StudioState {
    /// Most recent first.
    images: Vec<GeneratedImage>,
    full_screen: Option<GeneratedImage>,
}

pub struct Studio {
    generator: Arc<dyn ImageGenerator>,
    store: Arc<dyn HistoryStore>,
    http: Client,
    state: Mutex<StudioState>,
    /// Serializes read-modify-write cycles on the persisted history.
    history: tokio::sync::Mutex<()>,
    generating: AtomicBool,
    downloading: AtomicBool,
}

/// Clears an in-flight flag when the operation ends, however it ends.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool, operation: &'static str) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GenerateError::Busy(operation))?;
        Ok(BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Studio {
    pub fn new(generator: Arc<dyn ImageGenerator>, store: Arc<dyn HistoryStore>) -> Self {
        Self {
            generator,
            store,
            http: Client::new(),
            state: Mutex::new(StudioState::default()),
            history: tokio::sync::Mutex::new(()),
            generating: AtomicBool::new(false),
            downloading: AtomicBool::new(false),
        }
    }

    /// Client used for image downloads.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// In-process studio: talks to the image API directly and keeps history under
    /// `HISTORY_DIR` when configured, in memory otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        let generator = Arc::new(ImageService::from_config(config.backend.clone())?);
        let store: Arc<dyn HistoryStore> = match &config.history_dir {
            Some(dir) => Arc::new(FileHistoryStore::new(dir.clone())),
            None => Arc::new(MemoryHistoryStore::new()),
        };
        let http = Client::builder()
            .timeout(config.backend.timeout)
            .build()
            .map_err(|e| GenerateError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::new(generator, store).with_http_client(http))
    }

    fn state(&self) -> MutexGuard<'_, StudioState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin_generation(&self) -> Result<BusyGuard<'_>> {
        BusyGuard::acquire(&self.generating, "generation")
    }

    fn begin_download(&self) -> Result<BusyGuard<'_>> {
        BusyGuard::acquire(&self.downloading, "download")
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    pub fn is_downloading(&self) -> bool {
        self.downloading.load(Ordering::Acquire)
    }

    /// Submits the form. On success the new image is recorded and the prompt cleared;
    /// on failure the form is left untouched.
    pub async fn generate(&self, form: &mut GenerationForm) -> Result<GeneratedImage> {
        let prompt = form.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(GenerateError::Validation(
                "Please enter a prompt to generate an image".into(),
            ));
        }

        let _busy = self.begin_generation()?;

        let response = self.generator.generate(form.to_request()).await.map_err(|e| {
            log::error!("Generation error: {}", e);
            e
        })?;

        let shown_prompt = if response.original_prompt.is_empty() {
            prompt
        } else {
            response.original_prompt
        };
        let image = GeneratedImage::new(response.image_url, shown_prompt, form.settings());
        self.record(image.clone()).await?;

        form.prompt.clear();
        Ok(image)
    }

    /// Adds an image to the front of the gallery and the persisted history.
    pub async fn record(&self, image: GeneratedImage) -> Result<()> {
        let _history = self.history.lock().await;
        self.state().images.insert(0, image.clone());

        let mut persisted = match self.read_persisted().await {
            Ok(images) => images,
            Err(GenerateError::Serialization(e)) => {
                log::warn!("Discarding unreadable history: {}", e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        persisted.insert(0, image);
        persisted.truncate(HISTORY_LIMIT);

        self.store
            .set(HISTORY_KEY, serde_json::to_string(&persisted)?)
            .await
    }

    async fn read_persisted(&self) -> Result<Vec<GeneratedImage>> {
        match self.store.get(HISTORY_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the gallery with the persisted history.
    pub async fn load_history(&self) -> Result<Vec<GeneratedImage>> {
        let persisted = self.read_persisted().await?;
        self.state().images = persisted.clone();
        Ok(persisted)
    }

    pub async fn clear_history(&self) -> Result<()> {
        let _history = self.history.lock().await;
        self.store.remove(HISTORY_KEY).await?;
        self.state().images.clear();
        log::info!("Generation history cleared");
        Ok(())
    }

    pub fn images(&self) -> Vec<GeneratedImage> {
        self.state().images.clone()
    }

    pub fn open_full_screen(&self, id: &str) -> Option<GeneratedImage> {
        let mut state = self.state();
        let image = state.images.iter().find(|img| img.id == id).cloned()?;
        state.full_screen = Some(image.clone());
        Some(image)
    }

    pub fn close_full_screen(&self) {
        self.state().full_screen = None;
    }

    pub fn full_screen_image(&self) -> Option<GeneratedImage> {
        self.state().full_screen.clone()
    }

    /// Saves a gallery image as `ai-generated-<id>.png` under `dir` and returns the
    /// written path. Only one download runs at a time.
    pub async fn download_image(&self, id: &str, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let image = self
            .find_image(id)
            .ok_or_else(|| GenerateError::Validation(format!("No image with id {}", id)))?;
        if image.url.is_empty() {
            return Err(GenerateError::Validation(format!("Image {} has no URL", id)));
        }
        let file_name = download_file_name(&image.id)?;

        let _busy = self.begin_download()?;

        let response = self.http.get(&image.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::error!("Download failed: {} returned {}", image.url, status.as_u16());
            return Err(GenerateError::Upstream {
                status: status.as_u16(),
                body: "Failed to fetch image".into(),
            });
        }
        let bytes = response.bytes().await?;

        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(file_name);
        tokio::fs::write(&path, &bytes).await?;

        log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    fn find_image(&self, id: &str) -> Option<GeneratedImage> {
        let state = self.state();
        state
            .images
            .iter()
            .chain(state.full_screen.iter())
            .find(|img| img.id == id)
            .cloned()
    }

    /// Navigation arrows only make sense with more than one image.
    pub fn show_navigation(&self) -> bool {
        self.state().images.len() > 1
    }

    /// Moves the preview one image towards older entries; stays put on the last one.
    pub fn next_image(&self) -> Option<GeneratedImage> {
        let mut state = self.state();
        let current = state.full_screen.as_ref()?.id.clone();
        if state.images.is_empty() {
            return state.full_screen.clone();
        }
        // A preview that is no longer in the list restarts from the newest image.
        let next = match state.images.iter().position(|img| img.id == current) {
            Some(i) if i + 1 < state.images.len() => Some(i + 1),
            Some(_) => None,
            None => Some(0),
        };
        if let Some(i) = next {
            state.full_screen = Some(state.images[i].clone());
        }
        state.full_screen.clone()
    }

    /// Moves the preview one image towards newer entries; stays put on the first one.
    pub fn previous_image(&self) -> Option<GeneratedImage> {
        let mut state = self.state();
        let current = state.full_screen.as_ref()?.id.clone();
        if let Some(i) = state.images.iter().position(|img| img.id == current) {
            if i > 0 {
                state.full_screen = Some(state.images[i - 1].clone());
            }
        }
        state.full_screen.clone()
    }
}

fn download_file_name(id: &str) -> Result<String> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(GenerateError::Validation(format!("Invalid image id: {:?}", id)));
    }
    Ok(format!("ai-generated-{}.png", id))
}
