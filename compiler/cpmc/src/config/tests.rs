use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_segments_with_base_grammar() {
    let config = DriverConfig::default();
    assert_eq!(config.command, Command::Segment);
    assert_eq!(config.scan, ScanOptions::default());
    assert_eq!(config.segment, SegmentOptions::default());
}

#[test]
fn new_keeps_default_options() {
    let config = DriverConfig::new(Command::Lex);
    assert_eq!(config.command, Command::Lex);
    assert_eq!(config.scan, ScanOptions::default());
}

#[test]
fn each_flag_sets_one_option() {
    let mut config = DriverConfig::default();
    assert!(config.apply_flag("--nested-calls"));
    assert!(config.segment.track_paren_depth);
    assert!(!config.segment.keep_lookahead);

    assert!(config.apply_flag("--keep-lookahead"));
    assert!(config.segment.keep_lookahead);

    assert!(config.apply_flag("--extended-symbols"));
    assert!(config.scan.extended_symbols);
    assert!(!config.scan.block_comments);

    assert!(config.apply_flag("--block-comments"));
    assert_eq!(config.scan, ScanOptions::all());
}

#[test]
fn unknown_flag_is_rejected_without_change() {
    let mut config = DriverConfig::default();
    assert!(!config.apply_flag("--nested"));
    assert!(!config.apply_flag("-x"));
    assert!(!config.apply_flag("main.c"));
    assert_eq!(config, DriverConfig::default());
}

#[test]
fn every_listed_flag_is_accepted() {
    for (flag, _) in DriverConfig::FLAGS {
        let mut config = DriverConfig::default();
        assert!(config.apply_flag(flag), "{flag} should be accepted");
        assert_ne!(config, DriverConfig::default());
    }
}

#[test]
fn flag_help_lists_every_flag() {
    let mut out = Vec::new();
    DriverConfig::write_flags(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Flags:"));
    for (flag, description) in DriverConfig::FLAGS {
        let line = lines.next().unwrap();
        assert!(line.starts_with(&format!("  {flag} ")), "{line}");
        assert!(line.ends_with(description), "{line}");
    }
    assert_eq!(lines.next(), None);
}
