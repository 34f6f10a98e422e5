use std::cell::RefCell;
use std::collections::HashMap;
use serde::{Serialize, de::DeserializeOwned};

/// Almacenamiento clave/valor persistente (localStorage en el navegador)
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// Almacenamiento en memoria, se pierde al recargar
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorage del navegador (vía gloo-storage)
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| "Error leyendo localStorage".to_string())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

pub fn save_to_storage<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
}

/// Devuelve None si la clave no existe o el contenido no se puede leer
pub fn load_from_storage<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Contenido inválido en '{}': {}", key, e);
            None
        }
    }
}

pub fn remove_from_storage(storage: &dyn KeyValueStorage, key: &str) -> Result<(), String> {
    storage.remove_item(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_helpers_round_through_memory_storage() {
        let storage = MemoryStorage::new();
        save_to_storage(&storage, "k", &vec![1, 2, 3]).unwrap();
        assert_eq!(load_from_storage::<Vec<i32>>(&storage, "k"), Some(vec![1, 2, 3]));

        remove_from_storage(&storage, "k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn corrupt_content_loads_as_none() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "{no es json").unwrap();
        assert_eq!(load_from_storage::<Vec<i32>>(&storage, "k"), None);
    }
}
