mod config;
mod repos;

pub use config::Config;
pub use repos::DeleteResult;
pub use repos::Repos;
pub use repos::{IAccountRepo, IUserRepo};

#[derive(Clone)]
pub struct BankaContext {
    pub repos: Repos,
    pub config: Config,
}

impl BankaContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> BankaContext {
    BankaContext::create_inmemory()
}
