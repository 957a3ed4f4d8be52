use log::debug;

use crate::error::ParseError;

/// Parses a list of integers.
///
/// Text starting with `[` is read as a JSON array. Anything else is split on
/// whitespace and commas; empty tokens are skipped. Blank text gives an empty
/// list.
pub fn parse_values(text: &str) -> Result<Vec<i64>, ParseError> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        let values: Vec<i64> = serde_json::from_str(trimmed)?;
        debug!("Parsed {} values from JSON array", values.len());
        return Ok(values);
    }

    let values = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidInteger { token: token.to_string(), position: i + 1 })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Parsed {} values from delimited text", values.len());
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_and_commas() {
        assert_eq!(parse_values("3 2,1\n5,\t6  4").unwrap(), vec![3, 2, 1, 5, 6, 4]);
        assert_eq!(parse_values("-1,,-2").unwrap(), vec![-1, -2]);
    }

    #[test]
    fn json_array() {
        assert_eq!(parse_values("  [5, 5, 3]\n").unwrap(), vec![5, 5, 3]);
        assert_eq!(parse_values("[]").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn blank_text_is_empty() {
        assert!(parse_values(" \n ").unwrap().is_empty());
    }

    #[test]
    fn reports_bad_token_position() {
        match parse_values("1 2 x3 4") {
            Err(ParseError::InvalidInteger { token, position }) => {
                assert_eq!(token, "x3");
                assert_eq!(position, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_values("[1, 2.5]"), Err(ParseError::Json(_))));
        assert!(matches!(parse_values("[1, 2"), Err(ParseError::Json(_))));
    }
}
