// ============================================================================
// REACTIVITY - Celdas de estado con notificación a suscriptores
// ============================================================================
// Los view models guardan sus listas aquí; las vistas se suscriben y
// re-renderizan la tabla afectada cuando cambian.
// ============================================================================

use std::cell::{Ref, RefCell};
use std::rc::Rc;

type Callback = Box<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: RefCell<Vec<Callback>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Préstamo de solo lectura. No mantenerlo a través de un `.await`.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F, R>(&self, updater: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = updater(&mut *self.value.borrow_mut());
        self.notify();
        result
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: Default> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
