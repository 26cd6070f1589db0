//! Source paper identifiers as accepted by the Graph API paper endpoints.

use std::fmt;

use crate::error::{ClientError, ClientResult};

/// External ID prefixes the Graph API understands, in canonical spelling.
const PREFIXES: &[&str] = &["ARXIV", "DOI", "CorpusId", "MAG", "ACL", "PMID", "PMCID", "URL"];

/// Identifier of the paper whose citations are analyzed.
///
/// Bare identifiers are treated as arXiv IDs (`1706.03762` becomes
/// `ARXIV:1706.03762`). Prefixed identifiers and 40-character Semantic
/// Scholar IDs are used as given, with the prefix normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaperId(String);

impl PaperId {
    /// Parse a user-supplied identifier.
    ///
    /// Only emptiness is checked here; the API rejects malformed IDs.
    pub fn parse(input: &str) -> ClientResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ClientError::invalid_id(input));
        }

        if is_s2_id(input) {
            return Ok(Self(input.to_string()));
        }

        if let Some((prefix, rest)) = input.split_once(':') {
            if let Some(canonical) = PREFIXES.iter().find(|p| p.eq_ignore_ascii_case(prefix)) {
                if rest.is_empty() {
                    return Err(ClientError::invalid_id(input));
                }
                return Ok(Self(format!("{canonical}:{rest}")));
            }
        }

        Ok(Self(format!("ARXIV:{input}")))
    }

    /// The identifier as placed in the request path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PaperId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_s2_id(input: &str) -> bool {
    input.len() == 40 && input.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id_is_arxiv() {
        assert_eq!(PaperId::parse("1706.03762").unwrap().as_str(), "ARXIV:1706.03762");
        assert_eq!(PaperId::parse("  2106.09685 ").unwrap().as_str(), "ARXIV:2106.09685");
    }

    #[test]
    fn test_old_style_arxiv_id() {
        assert_eq!(PaperId::parse("hep-th/9711200").unwrap().as_str(), "ARXIV:hep-th/9711200");
    }

    #[test]
    fn test_prefix_normalized() {
        assert_eq!(PaperId::parse("arxiv:1706.03762").unwrap().as_str(), "ARXIV:1706.03762");
        assert_eq!(PaperId::parse("doi:10.1145/3292500").unwrap().as_str(), "DOI:10.1145/3292500");
        assert_eq!(PaperId::parse("corpusid:13756489").unwrap().as_str(), "CorpusId:13756489");
    }

    #[test]
    fn test_s2_id_passthrough() {
        let id = "204e3073870fae3d05bcbc2f6a8e263d9b72e776";
        assert_eq!(PaperId::parse(id).unwrap().as_str(), id);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(PaperId::parse(""), Err(ClientError::InvalidId(_))));
        assert!(matches!(PaperId::parse("   "), Err(ClientError::InvalidId(_))));
        assert!(matches!(PaperId::parse("DOI:"), Err(ClientError::InvalidId(_))));
    }

    #[test]
    fn test_display_matches_path_form() {
        let id: PaperId = "1706.03762".parse().unwrap();
        assert_eq!(id.to_string(), "ARXIV:1706.03762");
    }
}
