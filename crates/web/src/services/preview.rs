//! In-memory store for uploaded kitchen photo previews.
//!
//! A locally selected photo is uploaded, held here, and served back to the
//! page as the active preview. The store owns the bytes for at most one
//! live upload per page: when a new upload names the id it supersedes, the
//! prior entry is invalidated before the new one is inserted, so replaced
//! previews are released instead of accumulating. A TTL and a byte-count
//! weigher bound whatever abandoned pages leave behind.

use bytes::Bytes;
use moka::future::Cache;
use uuid::Uuid;

/// How long an unreplaced preview survives.
const PREVIEW_TTL: std::time::Duration = std::time::Duration::from_secs(30 * 60);

/// Total bytes of preview data the store will hold.
const MAX_PREVIEW_BYTES: u64 = 64 * 1024 * 1024;

/// A stored preview image.
#[derive(Debug, Clone)]
pub struct StoredPreview {
    /// Content type as reported by the upload, served back verbatim.
    pub content_type: String,
    /// Raw image bytes.
    pub bytes: Bytes,
}

/// Store for uploaded preview images.
#[derive(Clone)]
pub struct PreviewStore {
    cache: Cache<Uuid, StoredPreview>,
}

impl PreviewStore {
    /// Create an empty preview store.
    #[must_use]
    pub fn new() -> Self {
        let cache = Cache::builder()
            .time_to_live(PREVIEW_TTL)
            .max_capacity(MAX_PREVIEW_BYTES)
            .weigher(|_, preview: &StoredPreview| {
                u32::try_from(preview.bytes.len()).unwrap_or(u32::MAX)
            })
            .build();

        Self { cache }
    }

    /// Store a preview, releasing the one it supersedes.
    ///
    /// Returns the id of the new entry.
    pub async fn store(
        &self,
        content_type: String,
        bytes: Bytes,
        supersedes: Option<Uuid>,
    ) -> Uuid {
        if let Some(prior) = supersedes {
            self.cache.invalidate(&prior).await;
        }

        let id = Uuid::new_v4();
        self.cache
            .insert(
                id,
                StoredPreview {
                    content_type,
                    bytes,
                },
            )
            .await;
        id
    }

    /// Fetch a stored preview.
    pub async fn get(&self, id: Uuid) -> Option<StoredPreview> {
        self.cache.get(&id).await
    }
}

impl Default for PreviewStore {
    fn default() -> Self {
        Self::new()
    }
}
