//! JSON configuration consumed by the binaries.
pub mod places;
pub mod run;

pub use self::places::{load_places, PlaceList, PlaceQuery};
pub use self::run::{load_config, OutputConfig, PlacesSource, RunConfig};
