mod error;
mod place;
mod place_catalog;
mod place_category;
mod place_id;
mod place_record;

pub use error::PlaceIdError;
pub use place::Place;
pub use place_catalog::PlaceCatalog;
pub use place_category::PlaceCategory;
pub use place_id::PlaceId;
pub use place_record::PlaceRecord;
