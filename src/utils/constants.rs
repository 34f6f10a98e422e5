/// Clave de localStorage con el usuario autenticado
pub const AUTH_STORAGE_KEY: &str = "auth";

/// Clave de localStorage con la preferencia de tema
pub const THEME_STORAGE_KEY: &str = "theme";
