//! Extraction method names and strategy resolution.
//!
//! The `auto` decision tree is expressed as an ordered resolution table
//! rather than nested conditionals: the resolver emits the list of
//! strategies to try, and the pipeline walks it until one yields content.

use crate::classify::Classification;
use crate::error::{Error, Result};
use crate::strategy::StrategyKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Requested extraction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Tables first, then text, then OCR for scanned input, then the
    /// unstructured fallback
    Auto,
    /// Plain text only
    Txt,
    /// Tables as per-table CSV files
    Csv,
    /// Tables as one combined JSON file
    Json,
    /// Tables as per-table Excel files
    Excel,
    /// Generic structure parsing
    Unstructured,
}

impl Method {
    /// All supported method names, in documentation order.
    pub const ALL: [Method; 6] = [
        Method::Auto,
        Method::Txt,
        Method::Csv,
        Method::Json,
        Method::Excel,
        Method::Unstructured,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Auto => "auto",
            Method::Txt => "txt",
            Method::Csv => "csv",
            Method::Json => "json",
            Method::Excel => "excel",
            Method::Unstructured => "unstructured",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parse a method name. Unrecognized names fail with
    /// [`Error::UnsupportedMethod`] before any extraction work begins.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Method::Auto),
            "txt" | "text" => Ok(Method::Txt),
            "csv" => Ok(Method::Csv),
            "json" => Ok(Method::Json),
            "excel" | "xlsx" => Ok(Method::Excel),
            "unstructured" => Ok(Method::Unstructured),
            other => Err(Error::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Resolve a method and classification into the ordered strategies to try.
///
/// Explicit methods map to exactly one strategy and never fall back. For
/// `auto`, the order is tables, text, OCR (scanned documents only), then the
/// unstructured fallback; the first strategy yielding content wins.
pub fn resolve(method: Method, classification: Classification) -> Vec<StrategyKind> {
    match method {
        Method::Txt => vec![StrategyKind::Text],
        Method::Csv | Method::Json | Method::Excel => vec![StrategyKind::Tables],
        Method::Unstructured => vec![StrategyKind::Unstructured],
        Method::Auto => {
            let mut plan = vec![StrategyKind::Tables, StrategyKind::Text];
            if classification == Classification::Scanned {
                plan.push(StrategyKind::Ocr);
            }
            plan.push(StrategyKind::Unstructured);
            plan
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        assert_eq!(Method::from_str("auto").unwrap(), Method::Auto);
        assert_eq!(Method::from_str("TXT").unwrap(), Method::Txt);
        assert_eq!(Method::from_str("xlsx").unwrap(), Method::Excel);
        assert_eq!(
            Method::from_str("unstructured").unwrap(),
            Method::Unstructured
        );
    }

    #[test]
    fn test_parse_unknown_method() {
        let err = Method::from_str("docx").unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(ref s) if s == "docx"));
    }

    #[test]
    fn test_explicit_methods_resolve_to_single_strategy() {
        for (method, expected) in [
            (Method::Txt, StrategyKind::Text),
            (Method::Csv, StrategyKind::Tables),
            (Method::Json, StrategyKind::Tables),
            (Method::Excel, StrategyKind::Tables),
            (Method::Unstructured, StrategyKind::Unstructured),
        ] {
            for classification in [
                Classification::TextBased,
                Classification::Scanned,
                Classification::Mixed,
            ] {
                let plan = resolve(method, classification);
                assert_eq!(plan, vec![expected], "{method} / {classification}");
            }
        }
    }

    #[test]
    fn test_auto_order_text_based() {
        let plan = resolve(Method::Auto, Classification::TextBased);
        assert_eq!(
            plan,
            vec![
                StrategyKind::Tables,
                StrategyKind::Text,
                StrategyKind::Unstructured
            ]
        );
    }

    #[test]
    fn test_auto_order_scanned_includes_ocr() {
        let plan = resolve(Method::Auto, Classification::Scanned);
        assert_eq!(
            plan,
            vec![
                StrategyKind::Tables,
                StrategyKind::Text,
                StrategyKind::Ocr,
                StrategyKind::Unstructured
            ]
        );
    }

    #[test]
    fn test_auto_order_mixed_skips_ocr() {
        let plan = resolve(Method::Auto, Classification::Mixed);
        assert!(!plan.contains(&StrategyKind::Ocr));
    }
}
