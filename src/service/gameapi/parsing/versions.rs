use json::JsonValue;

use super::ParsingError;

/// The versions endpoint lists patches newest first.
pub fn parse_latest_version(json: &JsonValue) -> Result<String, ParsingError> {
    if !json.is_array() {
        return Err(ParsingError::InvalidType("root".into()));
    }

    let latest = json.members().next().ok_or(ParsingError::Empty("versions".into()))?;
    let version = latest
        .as_str()
        .ok_or(ParsingError::InvalidType("versions[0]".into()))?;

    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_entry() {
        let json = json::parse(r#"["15.16.1", "15.15.1", "lolpatch_3.7"]"#).unwrap();
        assert_eq!(parse_latest_version(&json).unwrap(), "15.16.1");
    }

    #[test]
    fn rejects_empty_list() {
        let json = json::parse("[]").unwrap();
        assert!(matches!(parse_latest_version(&json), Err(ParsingError::Empty(_))));
    }

    #[test]
    fn rejects_non_array_root() {
        let json = json::parse(r#"{"latest": "15.16.1"}"#).unwrap();
        assert!(matches!(parse_latest_version(&json), Err(ParsingError::InvalidType(_))));
    }

    #[test]
    fn rejects_non_string_entry() {
        let json = json::parse("[15]").unwrap();
        assert!(matches!(parse_latest_version(&json), Err(ParsingError::InvalidType(_))));
    }
}
