//! Unit tests for the keyword table

use super::*;
use crate::error::TracemsgError;

fn lookup_name<'a>(table: &'a KeywordTable, text: &str) -> Option<&'a str> {
    table.lookup(text, 0).map(|d| d.name.as_str())
}

#[test]
fn test_builtin_table_has_every_family() {
    let table = KeywordTable::builtin();

    // 6 frame families x (5 numbered + bare) + 3 callstack + 7 singles
    assert_eq!(table.len(), 6 * 6 + 3 + 7);

    for name in [
        "ADDRESS", "CALLER", "CALLERMODULE", "CALLEROFFSET", "CALLERTOKEN", "FUNCTION",
    ] {
        let bare = table.get(name).unwrap();
        assert_eq!(bare.numeric_argument, Some(1), "bare {name}");
        for frame in 1..=5 {
            let numbered = table.get(&format!("{name}{frame}")).unwrap();
            assert_eq!(numbered.kind, bare.kind);
            assert_eq!(numbered.numeric_argument, Some(frame));
        }
    }
}

#[test]
fn test_builtin_callstack_defaults() {
    let table = KeywordTable::builtin();

    assert_eq!(
        table.get("CALLSTACK").unwrap().numeric_argument,
        Some(DEFAULT_CALLSTACK_FRAMES)
    );
    assert_eq!(DEFAULT_CALLSTACK_FRAMES, 20);
    assert_eq!(table.get("CALLSTACK5").unwrap().numeric_argument, Some(5));
    assert_eq!(table.get("CALLSTACK10").unwrap().numeric_argument, Some(10));
}

#[test]
fn test_builtin_singles_take_no_argument() {
    let table = KeywordTable::builtin();

    for (name, kind) in [
        ("ADID", KeywordKind::WriteAppDomainId),
        ("BPADDR", KeywordKind::WriteBreakpointAddress),
        ("MID", KeywordKind::WriteManagedId),
        ("PID", KeywordKind::WriteProcessId),
        ("PNAME", KeywordKind::WriteProcessName),
        ("TID", KeywordKind::WriteThreadId),
        ("TNAME", KeywordKind::WriteThreadName),
    ] {
        let definition = table.get(name).unwrap();
        assert_eq!(definition.kind, kind);
        assert_eq!(definition.numeric_argument, None);
    }
}

#[test]
fn test_builtin_match_order_never_shadows() {
    let table = KeywordTable::builtin();
    let ordered: Vec<&str> = table.iter_match_order().map(|d| d.name.as_str()).collect();

    for (i, earlier) in ordered.iter().enumerate() {
        for later in &ordered[i + 1..] {
            assert!(
                !(later.len() > earlier.len() && later.starts_with(earlier)),
                "'{earlier}' would shadow '{later}'"
            );
        }
    }
}

#[test]
fn test_builtin_authored_order_lists_prefixes_last() {
    let authored: Vec<&str> = KeywordTable::builtin()
        .definitions()
        .iter()
        .map(|d| d.name.as_str())
        .collect();

    for (i, earlier) in authored.iter().enumerate() {
        for later in &authored[i + 1..] {
            assert!(
                !(later.len() > earlier.len() && later.starts_with(earlier)),
                "'{earlier}' is authored before longer '{later}'"
            );
        }
    }

    let position = |name: &str| authored.iter().position(|n| *n == name).unwrap();
    assert!(position("CALLER") > position("CALLERTOKEN"));
    assert!(position("CALLER") > position("CALLERMODULE5"));
}

#[test]
fn test_lookup_prefers_longest_name() {
    let table = KeywordTable::builtin();

    assert_eq!(lookup_name(table, "CALLER1"), Some("CALLER1"));
    assert_eq!(lookup_name(table, "CALLERMODULE3 rest"), Some("CALLERMODULE3"));
    assert_eq!(lookup_name(table, "CALLERMODULE"), Some("CALLERMODULE"));
    assert_eq!(lookup_name(table, "CALLER"), Some("CALLER"));
    assert_eq!(lookup_name(table, "CALLSTACK10"), Some("CALLSTACK10"));
    assert_eq!(lookup_name(table, "CALLSTACK5"), Some("CALLSTACK5"));
    assert_eq!(lookup_name(table, "CALLSTACK7"), Some("CALLSTACK"));
    assert_eq!(lookup_name(table, "ADDRESS12"), Some("ADDRESS1"));
}

#[test]
fn test_lookup_at_position() {
    let table = KeywordTable::builtin();
    let text = "id=$TID;";

    let definition = table.lookup(text, 4).unwrap();
    assert_eq!(definition.kind, KeywordKind::WriteThreadId);
    assert!(table.lookup(text, 3).is_none());
}

#[test]
fn test_lookup_is_case_sensitive() {
    let table = KeywordTable::builtin();
    assert!(table.lookup("tid", 0).is_none());
    assert!(table.lookup("Caller", 0).is_none());
}

#[test]
fn test_lookup_never_runs_past_end() {
    let table = KeywordTable::builtin();

    assert!(table.lookup("CALLE", 0).is_none());
    assert!(table.lookup("TI", 0).is_none());
    assert!(table.lookup("", 0).is_none());
    assert!(table.lookup("PID", 3).is_none());
    assert!(table.lookup("PID", 10).is_none());
}

#[test]
fn test_lookup_off_char_boundary() {
    let table = KeywordTable::builtin();
    // 'é' is two bytes; position 1 splits it
    assert!(table.lookup("éPID", 1).is_none());
    assert!(table.lookup("éPID", 2).is_some());
}

#[test]
fn test_custom_table_sorts_prefixes_last() {
    let table = KeywordTable::new(vec![
        KeywordDefinition::new("T", KeywordKind::WriteThreadId, None, "short"),
        KeywordDefinition::new("TNAME", KeywordKind::WriteThreadName, None, "long"),
    ])
    .unwrap();

    assert_eq!(lookup_name(&table, "TNAME"), Some("TNAME"));
    assert_eq!(lookup_name(&table, "TX"), Some("T"));

    // Authored order is untouched
    let authored: Vec<&str> = table.definitions().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(authored, vec!["T", "TNAME"]);
}

#[test]
fn test_equal_length_names_keep_authored_order() {
    let table = KeywordTable::new(vec![
        KeywordDefinition::new("AB", KeywordKind::WriteProcessId, None, ""),
        KeywordDefinition::new("CD", KeywordKind::WriteThreadId, None, ""),
    ])
    .unwrap();

    let ordered: Vec<&str> = table.iter_match_order().map(|d| d.name.as_str()).collect();
    assert_eq!(ordered, vec!["AB", "CD"]);
}

#[test]
fn test_new_rejects_empty_name() {
    let err = KeywordTable::new(vec![KeywordDefinition::new(
        "",
        KeywordKind::WriteProcessId,
        None,
        "",
    )])
    .unwrap_err();

    assert!(matches!(err, TracemsgError::KeywordNameEmpty { .. }));
    assert!(err.to_string().starts_with("KEYWORD_NAME_EMPTY"));
}

#[test]
fn test_new_rejects_duplicates() {
    let err = KeywordTable::new(vec![
        KeywordDefinition::new("PID", KeywordKind::WriteProcessId, None, ""),
        KeywordDefinition::new("PID", KeywordKind::WriteThreadId, None, ""),
    ])
    .unwrap_err();

    match err {
        TracemsgError::KeywordDuplicate(name) => assert_eq!(name, "PID"),
        other => panic!("Expected KeywordDuplicate, got {other:?}"),
    }
}

#[test]
fn test_new_rejects_argument_mismatch() {
    let missing = KeywordTable::new(vec![KeywordDefinition::new(
        "CALLER",
        KeywordKind::WriteCaller,
        None,
        "",
    )]);
    assert!(matches!(
        missing,
        Err(TracemsgError::KeywordArgumentMismatch { .. })
    ));

    let unexpected = KeywordTable::new(vec![KeywordDefinition::new(
        "PID2",
        KeywordKind::WriteProcessId,
        Some(2),
        "",
    )]);
    assert!(matches!(
        unexpected,
        Err(TracemsgError::KeywordArgumentMismatch { .. })
    ));

    let text = KeywordTable::new(vec![KeywordDefinition::new(
        "TEXT",
        KeywordKind::WriteText,
        None,
        "",
    )]);
    assert!(matches!(
        text,
        Err(TracemsgError::KeywordArgumentMismatch { .. })
    ));
}

#[test]
fn test_legend_follows_authored_order() {
    let legend = KeywordTable::builtin().legend();

    assert_eq!(legend.len(), KeywordTable::builtin().len());
    assert_eq!(legend[0].keyword, "$ADDRESS1");
    assert_eq!(legend[5].keyword, "$ADDRESS");
    assert_eq!(legend[5].argument, Some(1));

    let tid = legend.iter().find(|e| e.keyword == "$TID").unwrap();
    assert_eq!(tid.kind, KeywordKind::WriteThreadId);
    assert_eq!(tid.argument, None);
    assert_eq!(tid.description, "Thread id");
}

#[test]
fn test_kind_display() {
    assert_eq!(KeywordKind::WriteCallStack.to_string(), "WriteCallStack");
    assert!(KeywordKind::WriteCallStack.takes_argument());
    assert!(!KeywordKind::WriteProcessId.takes_argument());
    assert!(!KeywordKind::WriteEvaluatedExpression.is_keyword());
}
