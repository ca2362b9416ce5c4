use crate::domain::menu::entities::MenuItem;
use crate::entity::menu_items::Model as MenuItemModel;

impl From<MenuItemModel> for MenuItem {
    fn from(model: MenuItemModel) -> Self {
        MenuItem {
            id: model.id,
            name: model.name,
            category: model.category,
            is_active: model.is_active,
            created_at: model.created_at.and_utc(),
        }
    }
}
