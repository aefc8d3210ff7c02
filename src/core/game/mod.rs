pub mod catalog;
pub mod model;

pub use catalog::GameCatalog;
pub use model::{Game, LoaderFlavor, ModLoader};
