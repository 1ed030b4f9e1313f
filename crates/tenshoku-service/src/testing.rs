//! Service wiring over a seeded store, shared by unit tests.

use std::sync::Arc;

use tenshoku_auth::{PasswordHasher, SessionStore, TokenGenerator};
use tenshoku_core::config::AppConfig;
use tenshoku_database::DatabasePool;
use tenshoku_database::repositories::{
    ApplicationRepository, FavoriteRepository, JobRepository, NotificationRepository,
    UserRepository,
};
use tenshoku_database::seed;

use crate::{
    ApplicationService, AuthService, FavoriteService, JobService, NotificationService,
    RequestContext, UserService,
};

pub(crate) struct TestServices {
    pub auth: AuthService,
    pub users: UserService,
    pub jobs: JobService,
    pub applications: ApplicationService,
    pub favorites: FavoriteService,
    pub notifications: NotificationService,
    pub job_repo: Arc<JobRepository>,
}

impl TestServices {
    pub async fn seeded() -> Self {
        let config = AppConfig::default();
        let pool = DatabasePool::in_memory();
        let hasher = Arc::new(PasswordHasher::new());
        let hash = hasher
            .hash_password(seed::fixtures::DEMO_PASSWORD)
            .expect("hash demo password");
        seed::load(&pool, &config.seed, hash).await.expect("seed");

        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let job_repo = Arc::new(JobRepository::new(pool.clone()));
        let app_repo = Arc::new(ApplicationRepository::new(pool.clone()));
        let fav_repo = Arc::new(FavoriteRepository::new(pool.clone()));
        let notif_repo = Arc::new(NotificationRepository::new(pool));
        let sessions = Arc::new(SessionStore::new(
            &config.session,
            TokenGenerator::new(&config.auth),
        ));

        Self {
            auth: AuthService::new(user_repo.clone(), hasher, sessions),
            users: UserService::new(user_repo),
            jobs: JobService::new(job_repo.clone(), config.jobs.clone()),
            applications: ApplicationService::new(job_repo.clone(), app_repo, config.jobs),
            favorites: FavoriteService::new(fav_repo, job_repo.clone()),
            notifications: NotificationService::new(notif_repo),
            job_repo,
        }
    }

    /// Log in as the demo user.
    pub async fn login(&self) -> RequestContext {
        let result = self
            .auth
            .login(seed::fixtures::DEMO_EMAIL, seed::fixtures::DEMO_PASSWORD)
            .await
            .expect("demo login");
        self.auth
            .authenticate(&result.token)
            .await
            .expect("fresh token resolves")
    }
}
