/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Deserialize a field that distinguishes "absent" from "null"
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// a missing key gives `None`, `null` gives `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_fits_js_number() {
        const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
        for _ in 0..100 {
            let id = snowflake_id();
            assert!(id > 0);
            assert!(id <= MAX_SAFE_INTEGER);
        }
    }

    #[test]
    fn test_snowflake_is_time_ordered() {
        let a = snowflake_id() >> 12;
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = snowflake_id() >> 12;
        assert!(b > a);
    }

    #[test]
    fn test_double_option_separates_null_from_absent() {
        #[derive(serde::Deserialize)]
        struct Patch {
            #[serde(default, deserialize_with = "double_option")]
            value: Option<Option<f64>>,
        }

        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.value, None);
        let null: Patch = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(null.value, Some(None));
        let set: Patch = serde_json::from_str(r#"{"value":1.5}"#).unwrap();
        assert_eq!(set.value, Some(Some(1.5)));
    }
}
