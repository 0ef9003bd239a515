use super::error::AliasError;
use std::{fmt, str::FromStr};

pub const SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub subscription_id: String,
    pub alias: String,
}

impl AliasEntry {
    /// Parses one stored line. Anything other than exactly two fields is rejected.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut parts = line.split(SEPARATOR);
        let (Some(subscription_id), Some(alias), None) = (parts.next(), parts.next(), parts.next())
        else {
            return None;
        };

        Some(Self {
            subscription_id: subscription_id.to_owned(),
            alias: alias.to_owned(),
        })
    }
}

/// Parses the `<subscriptionId>:<alias>` command-line form.
impl FromStr for AliasEntry {
    type Err = AliasError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (subscription_id, alias) = value
            .split_once(SEPARATOR)
            .ok_or(AliasError::InvalidFormat)?;

        // An empty alias is allowed and clears the previous one on load.
        // A second separator would produce a line the store cannot read back.
        if subscription_id.is_empty() || alias.contains(SEPARATOR) {
            return Err(AliasError::InvalidFormat);
        }

        Ok(Self {
            subscription_id: subscription_id.to_owned(),
            alias: alias.to_owned(),
        })
    }
}

impl fmt::Display for AliasEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.subscription_id, self.alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc-123:dev", "abc-123", "dev")]
    #[case("abc-123:my dev", "abc-123", "my dev")]
    #[case("abc-123:", "abc-123", "")]
    fn parses_flag_value(#[case] value: &str, #[case] id: &str, #[case] alias: &str) {
        let entry: AliasEntry = value.parse().unwrap();

        assert_eq!(entry.subscription_id, id);
        assert_eq!(entry.alias, alias);
    }

    #[rstest]
    #[case("abc-123")]
    #[case(":dev")]
    #[case("abc-123:dev:extra")]
    fn rejects_malformed_flag_value(#[case] value: &str) {
        assert!(matches!(
            value.parse::<AliasEntry>(),
            Err(AliasError::InvalidFormat)
        ));
    }

    #[rstest]
    #[case("abc-123:dev", Some(("abc-123", "dev")))]
    #[case("abc-123:", Some(("abc-123", "")))]
    #[case("no separator", None)]
    #[case("a:b:c", None)]
    #[case("", None)]
    fn parses_stored_line(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
        let parsed = AliasEntry::from_line(line);

        assert_eq!(
            parsed
                .as_ref()
                .map(|e| (e.subscription_id.as_str(), e.alias.as_str())),
            expected
        );
    }

    #[test]
    fn displays_as_stored_line() {
        let entry = AliasEntry {
            subscription_id: "abc-123".into(),
            alias: "dev".into(),
        };

        assert_eq!(entry.to_string(), "abc-123:dev");
    }
}
