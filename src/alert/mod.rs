/// Risk evaluation and alert decision logic.
///
/// Submodules:
/// - `risk` — threshold classification of weather samples.
/// - `advisory` — alert decision and advisory message composition.

pub mod advisory;
pub mod risk;
