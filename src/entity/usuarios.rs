use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::productos::Entity")]
    Productos,
    #[sea_orm(has_many = "super::categorias::Entity")]
    Categorias,
}

impl Related<super::productos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Productos.def()
    }
}

impl Related<super::categorias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categorias.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
