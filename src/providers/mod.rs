pub mod client;
pub mod ndvi;
pub mod soil;
pub mod types;
pub mod weather;

pub use client::create_client;
pub use ndvi::estimate_ndvi;
pub use soil::fetch_soil;
pub use types::{ApiStatus, DataSource, DataSources, NdviReading, SoilReading, WeatherReading};
pub use weather::fetch_weather;
