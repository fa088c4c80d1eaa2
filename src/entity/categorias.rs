use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categorias")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub descripcion: String,
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
    #[sea_orm(has_many = "super::productos::Entity")]
    Productos,
}

impl Related<super::usuarios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuarios.def()
    }
}

impl Related<super::productos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Productos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
