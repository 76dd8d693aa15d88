pub mod forecast;
pub mod hours;
pub mod sightings;
pub mod zones;

pub use forecast::forecast;
pub use hours::hours;
pub use sightings::sightings;
pub use zones::zones;
