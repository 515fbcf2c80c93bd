use super::*;

#[test]
fn test_every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::get(code).is_some(), "{code} has no documentation");
    }
    assert_eq!(DOCS.len(), ErrorCode::ALL.len());
}

#[test]
fn test_doc_heading_names_its_code() {
    for code in ErrorCode::ALL {
        let Some(doc) = ErrorDocs::get(code) else {
            panic!("{code} has no documentation");
        };
        let heading = format!("# {code}:");
        assert!(doc.starts_with(&heading), "{code} doc should start with {heading:?}");
    }
}

#[test]
fn test_division_doc_mentions_logical_operators() {
    let doc = ErrorDocs::get(ErrorCode::E2002).unwrap_or_default();
    assert!(doc.contains("Division by Zero"));
    assert!(doc.contains("&&"));
}
