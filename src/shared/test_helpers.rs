#[cfg(test)]
use crate::features::accounts::models::Role;

#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied.
///
/// A single pooled connection keeps every query on the same `:memory:`
/// database for the life of the test.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect to in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("apply migrations");

    pool
}

#[cfg(test)]
pub fn test_user(username: &str, role: Role) -> AuthenticatedUser {
    AuthenticatedUser {
        username: username.to_string(),
        role,
    }
}

/// Wrap a router so every request carries the given authenticated user,
/// bypassing the bearer-token middleware in handler tests.
#[cfg(test)]
pub fn with_auth(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}
