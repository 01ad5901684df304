use userdir_application::UserDirectoryService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_directory_service: UserDirectoryService,
}
