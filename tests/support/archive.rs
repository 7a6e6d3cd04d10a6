use std::sync::Arc;

use prevdays::testkit::domain::utc_midnight;
use prevdays::testkit::{MemoryLookup, MemorySource};

/// Binding the fixture archive is registered under.
pub const BINDING: &str = "weewxd_binding";

/// Three weeks of noon readings, 2024-01-01 through 2024-01-21 (UTC).
///
/// `outTemp` on day `d` is `d` degrees; `rain` is 1 mm every day.
pub fn three_week_archive() -> Arc<MemoryLookup> {
    let mut source = MemorySource::new()
        .with_unit("outTemp", "degree_C")
        .with_unit("rain", "mm");
    for day in 1..=21u32 {
        let noon = utc_midnight(2024, 1, day) + 12 * 3600;
        source = source
            .with_record(noon, "outTemp", f64::from(day))
            .with_record(noon, "rain", 1.0);
    }
    Arc::new(MemoryLookup::new().with_source(BINDING, source))
}
