pub mod categorias;
pub mod productos;
pub mod usuarios;

pub use categorias::Entity as Categorias;
pub use productos::Entity as Productos;
pub use usuarios::Entity as Usuarios;
