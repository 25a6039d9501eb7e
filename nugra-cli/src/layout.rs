//! Monorepo layout shared by `create`, `generate`, `install` and `run`

/// NestJS backend application
pub const APPS_BACKEND: &str = "apps/backend";

/// Frontend application
pub const APPS_FRONTEND: &str = "apps/frontend";

/// Shared UI components package
pub const PACKAGES_UI: &str = "packages/ui";

/// Shared models package
pub const PACKAGES_MODELS: &str = "packages/models";

/// Where generated backend entity modules live
pub const BACKEND_MODULES_DIR: &str = "apps/backend/src/modules";

/// Where generated frontend entity modules live
pub const FRONTEND_MODULES_DIR: &str = "apps/frontend/src/modules";

/// Backend root module that entity modules are registered in
pub const REGISTRATION_FILE: &str = "apps/backend/src/app.module.ts";

/// Project README carrying the legacy `Frontend: <Flavor>` marker
pub const README: &str = "README.md";

/// Directories created for every new project
pub const PROJECT_DIRS: [&str; 4] = [APPS_BACKEND, APPS_FRONTEND, PACKAGES_UI, PACKAGES_MODELS];
