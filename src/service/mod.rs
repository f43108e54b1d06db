pub mod characters;
pub mod favorites;
pub mod planets;
pub mod ships;
pub mod users;

pub use characters::CharacterService;
pub use favorites::FavoriteService;
pub use planets::PlanetService;
pub use ships::ShipService;
pub use users::UserService;
