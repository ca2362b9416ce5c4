use crate::domain::asset::entities::Asset;
use crate::entity::assets::Model as AssetModel;

impl From<AssetModel> for Asset {
    fn from(model: AssetModel) -> Self {
        Asset {
            id: model.id,
            name: model.name,
            asset_type: model.asset_type,
            location_id: model.location_id,
            created_at: model.created_at.and_utc(),
        }
    }
}
