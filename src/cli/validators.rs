//! CLI argument validators.

/// Parse and validate a clip count (at least 1).
pub fn parse_clip_count(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid whole number"))?;

    if value == 0 {
        return Err("clip count must be at least 1".to_string());
    }

    Ok(value)
}

/// Parse and validate a clip duration in seconds (finite and positive).
pub fn parse_clip_duration(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!(
            "clip duration must be a positive number of seconds, got {value}"
        ));
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clip_count_valid() {
        assert_eq!(parse_clip_count("1").ok(), Some(1));
        assert_eq!(parse_clip_count("12").ok(), Some(12));
    }

    #[test]
    fn test_parse_clip_count_invalid() {
        assert!(parse_clip_count("0").unwrap_err().contains("at least 1"));
        assert!(parse_clip_count("-2").is_err());
        assert!(parse_clip_count("2.5").is_err());
        assert!(parse_clip_count("abc").is_err());
    }

    #[test]
    fn test_parse_clip_duration_valid() {
        assert_eq!(parse_clip_duration("30").ok(), Some(30.0));
        assert_eq!(parse_clip_duration("0.5").ok(), Some(0.5));
    }

    #[test]
    fn test_parse_clip_duration_invalid() {
        assert!(parse_clip_duration("0").is_err());
        assert!(parse_clip_duration("-1").is_err());
        assert!(parse_clip_duration("inf").is_err());
        assert!(parse_clip_duration("NaN").is_err());
        assert!(
            parse_clip_duration("abc")
                .unwrap_err()
                .contains("not a valid number")
        );
    }
}
