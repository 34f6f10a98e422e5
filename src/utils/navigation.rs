use crate::models::Role;

/// Páginas de la aplicación (una por rol + la de entrada)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Index,
    Cliente,
    Transportista,
    Admin,
}

impl Page {
    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Cliente => "cliente.html",
            Page::Transportista => "transportista.html",
            Page::Admin => "admin.html",
        }
    }

    /// Página de inicio de un rol. Cualquier rol que no sea cliente ni transportista va a admin.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Cliente => Page::Cliente,
            Role::Transportista => Page::Transportista,
            _ => Page::Admin,
        }
    }

    /// Resuelve la página a partir de `location.pathname`
    pub fn from_path(path: &str) -> Self {
        let file = path.rsplit('/').next().unwrap_or("");
        match file {
            "cliente.html" => Page::Cliente,
            "transportista.html" => Page::Transportista,
            "admin.html" => Page::Admin,
            _ => Page::Index,
        }
    }
}

/// Redirección entre páginas
pub trait Navigator {
    fn redirect(&self, page: Page);
}
