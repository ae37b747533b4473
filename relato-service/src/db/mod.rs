/// Database access layer
///
/// Repositories are free async functions over `sqlx::PgPool`. They return
/// `sqlx::Error`; domain error mapping happens in the service layer.
pub mod comentario_repo;
pub mod postagem_repo;
pub mod usuario_repo;
