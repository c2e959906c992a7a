/// Splits raw multi-line input into an ordered list of probe-ready domains:
/// one domain per line, trimmed, blank lines discarded, order preserved.
pub fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn sanitize(domains: Vec<String>) -> Vec<String> {
    domains
        .into_iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_and_drops_blanks() {
        let raw = "example.com\n\n  google.com  \n\t\ngithub.com\n";
        assert_eq!(
            parse_domain_list(raw),
            vec!["example.com", "google.com", "github.com"]
        );
    }

    #[test]
    fn handles_crlf_input() {
        let raw = "example.com\r\nold.example.com\r\n\r\n";
        assert_eq!(
            parse_domain_list(raw),
            vec!["example.com", "old.example.com"]
        );
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(parse_domain_list("").is_empty());
        assert!(parse_domain_list("\n \n\t\n").is_empty());
    }

    #[test]
    fn sanitize_preserves_order() {
        let list = vec![
            "  a.com ".to_string(),
            String::new(),
            "b.com".to_string(),
        ];
        assert_eq!(sanitize(list), vec!["a.com", "b.com"]);
    }
}
