use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "productos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    pub precio_uni: f64,
    pub descripcion: Option<String>,
    pub disponible: bool,
    pub categoria_id: Uuid,
    pub usuario_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usuarios::Entity",
        from = "Column::UsuarioId",
        to = "super::usuarios::Column::Id"
    )]
    Usuarios,
    #[sea_orm(
        belongs_to = "super::categorias::Entity",
        from = "Column::CategoriaId",
        to = "super::categorias::Column::Id"
    )]
    Categorias,
}

impl Related<super::usuarios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuarios.def()
    }
}

impl Related<super::categorias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categorias.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
