/// External data source clients.
///
/// Submodules:
/// - `nws` — api.weather.gov point forecast client.
/// - `firms` — NASA FIRMS live satellite fire detections.

pub mod firms;
pub mod nws;
