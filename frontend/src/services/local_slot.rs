use common::error::OverlayError;
use common::overlay::SlotStorage;
use web_sys::Storage;

/// `window.localStorage` as the overlay's backing slot.
///
/// Storage can be missing (private browsing, disabled cookies); reads then see
/// an empty slot and writes fail with `OverlayError::Storage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSlot;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SlotStorage for LocalStorageSlot {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), OverlayError> {
        let storage = local_storage().ok_or_else(|| OverlayError::Storage {
            key: key.to_string(),
            message: "localStorage is unavailable".to_string(),
        })?;
        storage.set_item(key, value).map_err(|e| OverlayError::Storage {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}
