// ============================================================================
// VIEWS - Una función `mount` por página HTML (sin lógica de negocio)
// ============================================================================
// Cada vista conecta los elementos fijos de su página con el view model y se
// suscribe a sus listas para re-renderizar solo la tabla que cambió.
// ============================================================================

pub mod shared;
pub mod auth;
pub mod client;
pub mod courier;
pub mod admin;
