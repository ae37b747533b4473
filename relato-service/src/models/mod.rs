/// Data models for relato-service
///
/// - `usuario`: user rows and auth request DTOs
/// - `postagem`: citizen reports and their geography-enriched views
/// - `comentario`: short replies attached to a report
pub mod comentario;
pub mod postagem;
pub mod usuario;

pub use comentario::{Comentario, ComentarioComAutor, NovoComentarioRequest};
pub use postagem::{
    AtualizaPostagemRequest, NovaPostagemRequest, Postagem, PostagemComNomes, PostagemDetalhe,
    PostagemFiltro,
};
pub use usuario::{LoginRequest, RegistroRequest, Usuario, UsuarioPublico};
