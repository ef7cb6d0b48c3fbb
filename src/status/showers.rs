use super::snapshot::ShowerLevel;

/// Maximum number of concurrent showers at delivered temperature `temp`:
/// the largest `drop` among levels whose temperature does not exceed `temp`,
/// or 0 when none qualifies. Level order is irrelevant.
pub fn available_showers(levels: &[ShowerLevel], temp: f64) -> u32 {
    levels
        .iter()
        .filter(|level| level.temp <= temp)
        .map(|level| level.drop)
        .max()
        .unwrap_or(0)
}
