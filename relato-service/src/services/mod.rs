/// Business logic layer
pub mod comentarios;
pub mod ibge;
pub mod postagens;

pub use comentarios::ComentarioService;
pub use ibge::{Cidade, Estado, IbgeClient};
pub use postagens::PostagemService;
