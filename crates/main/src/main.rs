//! 主应用程序入口
//!
//! 启动 Axum Web API 服务。

use std::sync::Arc;

use application::services::{
    ForumService, ForumServiceDependencies, MessageService, MessageServiceDependencies,
    UserService, UserServiceDependencies,
};
use application::SystemClock;
use config::AppConfig;
use infrastructure::{
    BcryptPasswordHasher, Db, PgDiscussionRepository, PgMainTopicRepository, PgMessageRepository,
    PgPostRepository, PgUserRepository,
};
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env_with_defaults();

    tracing::info!(
        "connecting to database: {}",
        config.database.url.split('@').last().unwrap_or("unknown")
    );

    let pool = Arc::new(
        Db::create_pool(&config.database.url, config.database.max_connections).await?,
    );

    // 运行迁移
    sqlx::migrate!("../../migrations").run(&*pool).await?;

    // 仓储实例共享同一个连接池
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let topic_repository = Arc::new(PgMainTopicRepository::new(pool.clone()));
    let discussion_repository = Arc::new(PgDiscussionRepository::new(pool.clone()));
    let post_repository = Arc::new(PgPostRepository::new(pool.clone()));
    let message_repository = Arc::new(PgMessageRepository::new(pool));

    let password_hasher: Arc<dyn application::PasswordHasher> =
        Arc::new(BcryptPasswordHasher::new(config.server.bcrypt_cost));
    let clock: Arc<dyn application::Clock> = Arc::new(SystemClock);

    // 创建应用层服务
    let user_service = Arc::new(UserService::new(UserServiceDependencies {
        user_repository,
        password_hasher,
    }));
    let forum_service = Arc::new(ForumService::new(ForumServiceDependencies {
        topic_repository,
        discussion_repository,
        post_repository,
        clock: clock.clone(),
    }));
    let message_service = Arc::new(MessageService::new(MessageServiceDependencies {
        message_repository,
        clock,
    }));

    // 创建 JWT 服务
    let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));

    let state = AppState::new(user_service, forum_service, message_service, jwt_service);

    // 启动 Web 服务器
    let app = router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("forum server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
