// File: ./src/route.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Admin,
}

impl Route {
    /// Resolves a hash-router style path. Anything unknown lands on the dashboard.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        match path.trim_end_matches('/') {
            "/admin" | "admin" => Route::Admin,
            _ => Route::Dashboard,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Admin => "/admin",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/admin"), Route::Admin);
        assert_eq!(Route::from_path("#/admin/"), Route::Admin);
        assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
        assert_eq!(Route::Admin.to_string(), "/admin");
    }
}
