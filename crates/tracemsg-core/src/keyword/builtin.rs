//! Built-in keyword definitions

use super::{KeywordDefinition, KeywordKind};

/// Frames written by a bare `$CALLSTACK`
pub const DEFAULT_CALLSTACK_FRAMES: u32 = 20;

/// Frame indices spelled out as `NAME1` ..= `NAME5`
const NUMBERED_FRAMES: std::ops::RangeInclusive<u32> = 1..=5;

/// Keyword families whose name suffix selects a stack frame.
/// The bare name denotes frame 1. `CALLER` follows the longer `CALLER*`
/// families so that authored order already lists prefixes last.
const FRAME_FAMILIES: &[(&str, KeywordKind, &str)] = &[
    ("ADDRESS", KeywordKind::WriteAddress, "Instruction address of frame"),
    (
        "CALLERMODULE",
        KeywordKind::WriteCallerModule,
        "Module of the calling function at depth",
    ),
    (
        "CALLEROFFSET",
        KeywordKind::WriteCallerOffset,
        "IL offset in the calling function at depth",
    ),
    (
        "CALLERTOKEN",
        KeywordKind::WriteCallerToken,
        "Metadata token of the calling function at depth",
    ),
    ("CALLER", KeywordKind::WriteCaller, "Name of the calling function at depth"),
    ("FUNCTION", KeywordKind::WriteFunction, "Name of the function in frame"),
];

/// `CALLSTACK` variants with an explicit frame count
const CALLSTACK_COUNTS: &[u32] = &[5, 10];

const SINGLES: &[(&str, KeywordKind, &str)] = &[
    ("ADID", KeywordKind::WriteAppDomainId, "AppDomain id"),
    ("BPADDR", KeywordKind::WriteBreakpointAddress, "Breakpoint address"),
    ("MID", KeywordKind::WriteManagedId, "Managed thread id"),
    ("PID", KeywordKind::WriteProcessId, "Process id"),
    ("PNAME", KeywordKind::WriteProcessName, "Process name"),
    ("TID", KeywordKind::WriteThreadId, "Thread id"),
    ("TNAME", KeywordKind::WriteThreadName, "Thread name"),
];

/// Built-in definitions in authored order: each family lists its numbered
/// names before the bare name.
pub(super) fn definitions() -> Vec<KeywordDefinition> {
    let mut definitions = Vec::new();

    for &(name, kind, description) in FRAME_FAMILIES {
        for frame in NUMBERED_FRAMES {
            definitions.push(KeywordDefinition::new(
                format!("{name}{frame}"),
                kind,
                Some(frame),
                format!("{description} {frame}"),
            ));
        }
        definitions.push(KeywordDefinition::new(
            name,
            kind,
            Some(1),
            format!("{description} 1 (same as ${name}1)"),
        ));
    }

    for &count in CALLSTACK_COUNTS {
        definitions.push(KeywordDefinition::new(
            format!("CALLSTACK{count}"),
            KeywordKind::WriteCallStack,
            Some(count),
            format!("Call stack, at most {count} frames"),
        ));
    }
    definitions.push(KeywordDefinition::new(
        "CALLSTACK",
        KeywordKind::WriteCallStack,
        Some(DEFAULT_CALLSTACK_FRAMES),
        format!("Call stack, at most {DEFAULT_CALLSTACK_FRAMES} frames"),
    ));

    for &(name, kind, description) in SINGLES {
        definitions.push(KeywordDefinition::new(name, kind, None, description));
    }

    definitions
}
