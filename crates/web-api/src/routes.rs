use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use application::services::{
    AuthenticateUserRequest, CreateDiscussionRequest, CreatePostRequest, CreateTopicRequest,
    RegisterUserRequest, SendMessageRequest,
};
use application::{ApplicationError, DiscussionWithAnswers};
use domain::{Discussion, MainTopic, Message, Post, TopicWithDiscussionCount, User};

use crate::{
    auth::{AuthUser, LoginData, TokenError},
    envelope::Envelope,
    state::AppState,
    validation,
};

#[derive(Debug, Deserialize)]
struct RegisterPayload {
    username: String,
    password1: String,
    password2: String,
    role: String,
}

#[derive(Debug, Deserialize)]
struct LoginPayload {
    username: String,
    password1: String,
}

#[derive(Debug, Deserialize)]
struct AutoLoginPayload {
    token: String,
}

#[derive(Debug, Deserialize)]
struct UpdateImagePayload {
    image: String,
    username: String,
}

#[derive(Debug, Deserialize)]
struct CreateTopicPayload {
    username: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct CreateDiscussionPayload {
    username: String,
    title: String,
    description: String,
    /// 所属主题的标题（对外字段名即如此）。
    #[serde(rename = "discussionTitle")]
    discussion_title: String,
}

#[derive(Debug, Deserialize)]
struct CreatePostPayload {
    username: String,
    comment: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    video: String,
    #[serde(rename = "discussionId")]
    discussion_id: String,
}

#[derive(Debug, Deserialize)]
struct SendMessagePayload {
    #[serde(rename = "usernameWhoSends")]
    username_who_sends: String,
    #[serde(rename = "usernameWhoGets")]
    username_who_gets: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct ConversationPayload {
    #[serde(rename = "loggedInUser")]
    logged_in_user: String,
}

#[derive(Debug, Serialize)]
struct ProfileData {
    username: String,
    image: String,
    role: String,
}

#[derive(Debug, Serialize)]
struct ImageData {
    username: String,
    image: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/autoLogin", post(auto_login))
        .route("/updateImage", post(update_image))
        .route("/createTopic", post(create_topic))
        .route("/createDiscussion", post(create_discussion))
        .route("/createPost", post(create_post))
        .route("/sendMessage", post(send_message))
        .route("/messages/{username}", post(conversation))
        .route("/getTopics", get(get_topics))
        .route("/getDiscussions/{discussionTitle}", get(get_discussions))
        .route("/getSingleDiscussion/{discussionId}", get(get_single_discussion))
        .route("/getAllUsers", get(get_all_users))
        .route("/getAllDiscussions", get(get_all_discussions))
        .route("/getAllAnswers", get(get_all_answers))
        .route("/getAllMessages", get(get_all_messages))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 运维类故障统一折叠：原因只进日志，客户端拿到端点各自的笼统文案。
fn internal_error<T>(err: impl std::fmt::Display, message: &'static str) -> Json<Envelope<T>> {
    tracing::error!(error = %err, "request failed");
    Json(Envelope::fail(message))
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Json<Envelope<()>> {
    if let Err(err) = validation::run([
        validation::valid_username(&payload.username),
        validation::valid_password(&payload.password1, &payload.password2),
    ]) {
        return Json(Envelope::fail(err.message()));
    }

    match state
        .user_service
        .register(RegisterUserRequest {
            username: payload.username,
            password: payload.password1,
            role: payload.role,
        })
        .await
    {
        Ok(()) => Json(Envelope::ok_empty("Registration is successful")),
        Err(ApplicationError::UsernameTaken) => {
            Json(Envelope::fail("Username is already taken."))
        }
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Json<Envelope<LoginData>> {
    let user = match state
        .user_service
        .authenticate(AuthenticateUserRequest {
            username: payload.username,
            password: payload.password1,
        })
        .await
    {
        Ok(user) => user,
        Err(ApplicationError::Authentication) => {
            return Json(Envelope::fail("Wrong username or password."))
        }
        Err(err) => return internal_error(err, "Error occured during login."),
    };

    match state.jwt_service.generate_token(&user.username) {
        Ok(token) => Json(Envelope::ok(
            LoginData {
                token,
                username: user.username,
                image: user.image,
                role: user.role,
            },
            "Login is successful.",
        )),
        Err(err) => internal_error(err, "Error occured during login."),
    }
}

/// 路由链先用 Authorization 头做令牌校验，处理器再核对请求体里的
/// 令牌并确认用户仍然存在，头和体各校验一次。
async fn auto_login(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<AutoLoginPayload>,
) -> Json<Envelope<ProfileData>> {
    let claims = match state.jwt_service.verify_token(&payload.token) {
        Ok(claims) => claims,
        Err(TokenError::Expired) => return Json(Envelope::fail("Token expired")),
        Err(TokenError::Invalid) => return Json(Envelope::fail("Invalid token")),
    };

    match state.user_service.profile(&claims.username).await {
        Ok(user) => Json(Envelope::ok(
            ProfileData {
                username: user.username,
                image: user.image,
                role: user.role,
            },
            "Successfully authenticated.",
        )),
        Err(ApplicationError::UserNotFound) => Json(Envelope::fail("User not found")),
        Err(err) => internal_error(err, "Internal server error"),
    }
}

async fn update_image(
    State(state): State<AppState>,
    Json(payload): Json<UpdateImagePayload>,
) -> Json<Envelope<ImageData>> {
    if let Err(err) = validation::run([validation::valid_image_url(&payload.image)]) {
        return Json(Envelope::fail(err.message()));
    }

    match state
        .user_service
        .update_image(&payload.username, &payload.image)
        .await
    {
        Ok(user) => Json(Envelope::ok(
            ImageData {
                username: user.username,
                image: user.image,
            },
            "Image has been updated",
        )),
        Err(ApplicationError::UserNotFound) => Json(Envelope::fail("User not found")),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn create_topic(
    State(state): State<AppState>,
    Json(payload): Json<CreateTopicPayload>,
) -> Json<Envelope<MainTopic>> {
    match state
        .forum_service
        .create_topic(CreateTopicRequest {
            username: payload.username,
            title: payload.title,
        })
        .await
    {
        Ok(topic) => Json(Envelope::ok(topic, "New topic has been created")),
        Err(ApplicationError::TopicAlreadyExists) => {
            Json(Envelope::fail("This topic already exists."))
        }
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn get_topics(
    State(state): State<AppState>,
) -> Json<Envelope<Vec<TopicWithDiscussionCount>>> {
    match state.forum_service.topics_with_counts().await {
        Ok(topics) => Json(Envelope::ok(topics, "Topics have been fetched")),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn create_discussion(
    State(state): State<AppState>,
    Json(payload): Json<CreateDiscussionPayload>,
) -> Json<Envelope<Discussion>> {
    match state
        .forum_service
        .create_discussion(CreateDiscussionRequest {
            main_topic: payload.discussion_title,
            username: payload.username,
            title: payload.title,
            description: payload.description,
        })
        .await
    {
        Ok(discussion) => Json(Envelope::ok(discussion, "New discussion has been created")),
        Err(ApplicationError::DiscussionAlreadyExists) => {
            Json(Envelope::fail("This discussion already exists."))
        }
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn get_discussions(
    State(state): State<AppState>,
    Path(discussion_title): Path<String>,
) -> Json<Envelope<Vec<DiscussionWithAnswers>>> {
    match state
        .forum_service
        .discussions_with_answers(&discussion_title)
        .await
    {
        Ok(discussions) => Json(Envelope::ok(
            discussions,
            "Discussions with answers have been fetched.",
        )),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostPayload>,
) -> Json<Envelope<Post>> {
    if let Err(err) = validation::run([
        validation::valid_optional_image_url(&payload.image),
        validation::valid_optional_video_url(&payload.video),
    ]) {
        return Json(Envelope::fail(err.message()));
    }

    // 非法的讨论 id 与存储故障同样折叠为笼统失败
    let discussion_id = match payload.discussion_id.parse::<Uuid>() {
        Ok(id) => id,
        Err(err) => return internal_error(err, "Internal server error."),
    };

    let image = (!payload.image.is_empty()).then_some(payload.image);
    let video = (!payload.video.is_empty()).then_some(payload.video);

    match state
        .forum_service
        .create_post(CreatePostRequest {
            discussion_id,
            username: payload.username,
            comment: payload.comment,
            image,
            video,
        })
        .await
    {
        Ok(post) => Json(Envelope::ok(post, "New post has been created.")),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn get_single_discussion(
    State(state): State<AppState>,
    Path(discussion_id): Path<String>,
) -> Json<Envelope<Vec<Post>>> {
    let discussion_id = match discussion_id.parse::<Uuid>() {
        Ok(id) => id,
        Err(err) => return internal_error(err, "Internal server error."),
    };

    match state.forum_service.posts_for_discussion(discussion_id).await {
        Ok(posts) => Json(Envelope::ok(posts, "Posts have been fetched.")),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn get_all_users(State(state): State<AppState>) -> Json<Envelope<Vec<User>>> {
    match state.user_service.list_all().await {
        Ok(users) => Json(Envelope::ok(users, "All users have been fetched.")),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn get_all_discussions(
    State(state): State<AppState>,
) -> Json<Envelope<Vec<Discussion>>> {
    match state.forum_service.list_all_discussions().await {
        Ok(discussions) => Json(Envelope::ok(
            discussions,
            "All discussions have been fetched.",
        )),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn get_all_answers(State(state): State<AppState>) -> Json<Envelope<Vec<Post>>> {
    match state.forum_service.list_all_posts().await {
        Ok(posts) => Json(Envelope::ok(posts, "All answers have been fetched.")),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessagePayload>,
) -> Json<Envelope<Message>> {
    match state
        .message_service
        .send(SendMessageRequest {
            username_who_sends: payload.username_who_sends,
            username_who_gets: payload.username_who_gets,
            message: payload.message,
        })
        .await
    {
        Ok(message) => Json(Envelope::ok(message, "New message has been sent.")),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

async fn get_all_messages(State(state): State<AppState>) -> Json<Envelope<Vec<Message>>> {
    match state.message_service.list_all().await {
        Ok(messages) => Json(Envelope::ok(messages, "All messages have been fetched.")),
        Err(err) => internal_error(err, "Internal server error."),
    }
}

/// 拉取与 {username} 的会话；请求体里的 loggedInUser 是读取方，
/// 对方发来的未读在返回前被置为已读。
async fn conversation(
    State(state): State<AppState>,
    Path(other_username): Path<String>,
    Json(payload): Json<ConversationPayload>,
) -> Json<Envelope<Vec<Message>>> {
    match state
        .message_service
        .conversation(&other_username, &payload.logged_in_user)
        .await
    {
        Ok(chat) => Json(Envelope::ok(chat, "All chat have been fetched.")),
        Err(err) => internal_error(err, "Internal server error."),
    }
}
