//! Token stream listing

use super::registry::FormatError;
use crate::simplecc::token::TokenInfo;

/// One token per line (`line:column KIND text`), or a JSON array.
pub fn format_tokens(tokens: &[TokenInfo], as_json: bool) -> Result<String, FormatError> {
    if as_json {
        return Ok(serde_json::to_string_pretty(tokens)?);
    }
    let mut out = String::new();
    for token in tokens {
        let line = format!(
            "{:<8}{:<12}{}",
            token.location.to_string(),
            token.kind.name(),
            token.text
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplecc::lexing;

    #[test]
    fn test_text_listing() {
        let tokens = lexing::tokenize("int x;");
        assert_eq!(
            format_tokens(&tokens, false).expect("format"),
            "1:0     NAME        int\n1:4     NAME        x\n1:5     OP          ;\n1:0     ENDMARKER\n"
        );
    }

    #[test]
    fn test_json_listing() {
        let tokens = lexing::tokenize("x");
        let value: serde_json::Value =
            serde_json::from_str(&format_tokens(&tokens, true).expect("format")).expect("json");
        assert_eq!(value[0]["kind"], "NAME");
        assert_eq!(value[0]["text"], "x");
        assert_eq!(value[0]["location"]["column"], 0);
        assert_eq!(value[1]["kind"], "ENDMARKER");
    }
}
