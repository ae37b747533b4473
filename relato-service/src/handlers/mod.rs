/// HTTP request handlers, one module per resource
pub mod comentarios;
pub mod estados;
pub mod postagens;
pub mod usuarios;
