use serde::Deserialize;

/// A duration given as a whitespace separated list of `<number><unit>`
/// components, e.g. `"2h 30m"` or `"10s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

fn parse_duration(s: &str) -> Result<std::time::Duration, String> {
    if s.split_whitespace().next().is_none() {
        return Err("Empty duration".into());
    }

    let mut seconds = 0u64;
    for component in s.split_whitespace() {
        if !component.is_ascii() || component.len() < 2 {
            return Err(format!("Invalid duration component {component:?}"));
        }
        let (number, unit) = component.split_at(component.len() - 1);
        let number = number
            .parse::<u64>()
            .map_err(|_| format!("Invalid duration component {component:?}"))?;
        let factor = match unit {
            "s" => 1,
            "m" => 60,
            "h" => 3600,
            "d" => 86400,
            _ => return Err(format!("Invalid duration unit {unit:?}")),
        };
        seconds = number
            .checked_mul(factor)
            .and_then(|component_seconds| seconds.checked_add(component_seconds))
            .ok_or_else(|| format!("Duration {s:?} is out of range"))?;
    }
    Ok(std::time::Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(parse_duration("10s"), Ok(std::time::Duration::from_secs(10)));
        assert_eq!(
            parse_duration("2h 30m"),
            Ok(std::time::Duration::from_secs(2 * 3600 + 30 * 60))
        );
        assert_eq!(
            parse_duration("1d 1h 1m 1s"),
            Ok(std::time::Duration::from_secs(86400 + 3600 + 60 + 1))
        );
    }

    #[test]
    fn parse_invalid() {
        assert!(parse_duration("10").is_err());
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("s").is_err());
    }

    #[test]
    fn parse_empty() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("   ").is_err());
    }

    #[test]
    fn parse_out_of_range() {
        assert!(parse_duration(&format!("{}d", u64::MAX)).is_err());
        assert!(parse_duration(&format!("{}s 1s", u64::MAX)).is_err());
        assert_eq!(
            parse_duration(&format!("{}s", u64::MAX)),
            Ok(std::time::Duration::from_secs(u64::MAX))
        );
    }
}
