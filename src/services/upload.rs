//! Upload client: replaces a stored object with a local file's contents.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::services::storage::{ObjectStore, Storage};

/// Upload `local_path` as `object_name` and return its public URL.
///
/// Any existing object with the same name is removed first. Removal is best
/// effort: a failure there is logged and the upload is still attempted.
pub async fn upload_file<S: ObjectStore + ?Sized>(
    store: &S,
    local_path: &Path,
    object_name: &str,
) -> AppResult<String> {
    if object_name.is_empty() || object_name.contains('/') {
        return Err(AppError::InvalidInput(format!(
            "Invalid object name: '{}'",
            object_name
        )));
    }

    if let Err(e) = store.remove(object_name).await {
        warn!("Could not remove existing '{}': {}", object_name, e);
    } else {
        debug!("Removed previous copy of '{}' (if any)", object_name);
    }

    let data = tokio::fs::read(local_path).await.map_err(|e| {
        AppError::Io(format!("Failed to read {}: {}", local_path.display(), e))
    })?;

    let content_type = local_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(Storage::content_type_for_extension);

    store.put(object_name, data, content_type).await?;

    Ok(store.public_url(object_name))
}
