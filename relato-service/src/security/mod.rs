/// Security module for authentication
/// Provides password hashing and bearer-token management

pub mod jwt;
pub mod password;

pub use jwt::{gerar_token, inicializar_segredo, validar_token, Claims};
pub use password::{hash_password, verify_password};
