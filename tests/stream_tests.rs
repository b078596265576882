use czml_stream::{CzmlOptions, CzmlStream, Result, Sink};

#[test]
fn test_compact_object_with_mixed_values() {
    let mut out = CzmlStream::new(String::new());
    out.start_object().unwrap();
    out.write_property_name("a").unwrap();
    out.write_i32(1).unwrap();
    out.write_property_name("b").unwrap();
    out.start_sequence().unwrap();
    out.write_bool(true).unwrap();
    out.write_str("x").unwrap();
    out.end_sequence().unwrap();
    out.end_object().unwrap();

    assert_eq!(out.into_inner(), r#"{"a":1,"b":[true,"x"]}"#);
}

#[test]
fn test_pretty_object_with_mixed_values() {
    let mut out = CzmlStream::with_options(String::new(), CzmlOptions::pretty());
    out.start_object().unwrap();
    out.write_property_name("a").unwrap();
    out.write_i32(1).unwrap();
    out.write_property_name("b").unwrap();
    out.start_sequence().unwrap();
    out.write_bool(true).unwrap();
    out.write_str("x").unwrap();
    out.end_sequence().unwrap();
    out.end_object().unwrap();

    let expected = "{\n  \"a\":1,\n  \"b\":[\n    true,\"x\"\n  ]\n}";
    assert_eq!(out.into_inner(), expected);
}

#[test]
fn test_pretty_and_compact_agree_semantically() {
    fn emit<S: Sink>(out: &mut CzmlStream<S>) -> Result<()> {
        out.start_object()?;
        out.write_property_name("name")?;
        out.write_str("vehicle")?;
        out.write_property_name("samples")?;
        out.start_sequence()?;
        for i in 0..4 {
            out.write_f64(f64::from(i) * 0.5)?;
        }
        out.end_sequence()?;
        out.end_object()?;
        Ok(())
    }

    let mut compact = CzmlStream::new(String::new());
    emit(&mut compact).unwrap();
    let mut pretty = CzmlStream::with_options(String::new(), CzmlOptions::pretty());
    emit(&mut pretty).unwrap();

    let compact: serde_json::Value = serde_json::from_str(&compact.into_inner()).unwrap();
    let pretty: serde_json::Value = serde_json::from_str(&pretty.into_inner()).unwrap();
    assert_eq!(compact, pretty);
}

#[test]
fn test_commas_separate_siblings_only() {
    let mut out = CzmlStream::new(String::new());
    out.start_sequence().unwrap();
    for i in 0..5 {
        out.write_i32(i).unwrap();
    }
    out.end_sequence().unwrap();

    let text = out.into_inner();
    assert_eq!(text, "[0,1,2,3,4]");
    assert_eq!(text.matches(',').count(), 4);
}

#[test]
fn test_no_comma_in_single_element_containers() {
    let mut out = CzmlStream::new(String::new());
    out.start_object().unwrap();
    out.write_property_name("only").unwrap();
    out.start_sequence().unwrap();
    out.write_null().unwrap();
    out.end_sequence().unwrap();
    out.end_object().unwrap();

    assert_eq!(out.into_inner(), r#"{"only":[null]}"#);
}

#[test]
fn test_indentation_tracks_nesting_depth() {
    let mut out = CzmlStream::with_options(String::new(), CzmlOptions::pretty());
    out.start_object().unwrap();
    out.write_property_name("a").unwrap();
    out.start_object().unwrap();
    out.write_property_name("b").unwrap();
    out.start_object().unwrap();
    out.write_property_name("c").unwrap();
    out.write_i32(1).unwrap();
    out.end_object().unwrap();
    out.end_object().unwrap();
    out.end_object().unwrap();

    let text = out.into_inner();
    // each closing brace sits at 2 * (depth of the container it closes)
    let closing_indents: Vec<usize> = text
        .lines()
        .filter(|line| line.trim_start() == "}")
        .map(|line| line.len() - line.trim_start().len())
        .collect();
    assert_eq!(closing_indents, vec![4, 2, 0]);
    // property names at depth 1..=3 are indented 2, 4, 6
    for (name, indent) in [("\"a\"", 2), ("\"b\"", 4), ("\"c\"", 6)] {
        let line = text.lines().find(|l| l.contains(name)).unwrap();
        assert_eq!(line.len() - line.trim_start().len(), indent);
    }
}

#[test]
fn test_line_break_hint_in_pretty_mode() {
    let mut out = CzmlStream::with_options(String::new(), CzmlOptions::pretty());
    out.start_sequence().unwrap();
    out.write_f64(1.0).unwrap();
    out.write_line_break();
    out.write_f64(2.0).unwrap();
    out.end_sequence().unwrap();

    assert_eq!(out.into_inner(), "[\n  1,\n  2\n]");
}

#[test]
fn test_line_break_hint_ignored_when_compact() {
    let mut out = CzmlStream::new(String::new());
    out.start_sequence().unwrap();
    out.write_f64(1.0).unwrap();
    out.write_line_break();
    out.write_f64(2.0).unwrap();
    out.end_sequence().unwrap();

    assert_eq!(out.into_inner(), "[1,2]");
}

#[test]
fn test_values_do_not_break_line_without_hint() {
    let mut out = CzmlStream::with_options(String::new(), CzmlOptions::pretty());
    out.start_sequence().unwrap();
    out.write_f64(1.0).unwrap();
    out.write_f64(2.0).unwrap();
    out.write_f64(3.0).unwrap();
    out.end_sequence().unwrap();

    // only the first value after '[' takes the implicit break
    assert_eq!(out.into_inner(), "[\n  1,2,3\n]");
}

#[test]
fn test_string_values_are_escaped() {
    let mut out = CzmlStream::new(String::new());
    out.start_sequence().unwrap();
    out.write_str("tab\there").unwrap();
    out.write_str("quote\"backslash\\").unwrap();
    out.write_str("line\u{2028}sep").unwrap();
    out.end_sequence().unwrap();

    assert_eq!(
        out.into_inner(),
        r#"["tab\there","quote\"backslash\\","line\u2028sep"]"#
    );
}

#[test]
fn test_escaped_strings_decode_back() {
    let originals = [
        "plain",
        "tab\tnewline\ncr\rff\u{c}bs\u{8}",
        "nel\u{0085}ls\u{2028}ps\u{2029}",
        "ctl\u{1}\u{1f}end",
        "quote\" and \\ mix",
    ];
    for original in originals {
        let mut out = CzmlStream::new(String::new());
        out.write_str(original).unwrap();
        let decoded: String = serde_json::from_str(&out.into_inner()).unwrap();
        assert_eq!(decoded, original);
    }
}

#[test]
fn test_property_names_are_escaped() {
    let mut out = CzmlStream::new(String::new());
    out.start_object().unwrap();
    out.write_property_name("weird\"name").unwrap();
    out.write_i32(1).unwrap();
    out.end_object().unwrap();

    assert_eq!(out.into_inner(), r#"{"weird\"name":1}"#);
}

#[test]
fn test_opt_str_writes_null_when_absent() {
    let mut out = CzmlStream::new(String::new());
    out.start_sequence().unwrap();
    out.write_opt_str(Some("present")).unwrap();
    out.write_opt_str(None).unwrap();
    out.end_sequence().unwrap();

    assert_eq!(out.into_inner(), r#"["present",null]"#);
}

#[test]
fn test_integer_values() {
    let mut out = CzmlStream::new(String::new());
    out.start_sequence().unwrap();
    out.write_i32(i32::MIN).unwrap();
    out.write_i64(i64::MAX).unwrap();
    out.end_sequence().unwrap();

    assert_eq!(out.into_inner(), "[-2147483648,9223372036854775807]");
}

#[test]
fn test_double_values() {
    let mut out = CzmlStream::new(String::new());
    out.start_sequence().unwrap();
    out.write_f64(0.1).unwrap();
    out.write_f64(-0.0).unwrap();
    out.write_f64(1e21).unwrap();
    out.write_f64(100.0).unwrap();
    out.end_sequence().unwrap();

    assert_eq!(out.into_inner(), "[0.1,-0,1e21,100]");
}

#[test]
fn test_date_value() {
    use chrono::TimeZone;
    let date = chrono::Utc.with_ymd_and_hms(2012, 8, 4, 16, 0, 0).unwrap();
    let mut out = CzmlStream::new(String::new());
    out.write_date(&date).unwrap();
    assert_eq!(out.into_inner(), "\"2012-08-04T16:00:00Z\"");
}

#[test]
fn test_pretty_toggle_mid_stream() {
    let mut out = CzmlStream::new(String::new());
    assert!(!out.pretty_formatting());
    out.start_sequence().unwrap();
    out.write_i32(1).unwrap();
    out.set_pretty_formatting(true);
    assert!(out.pretty_formatting());
    out.write_line_break();
    out.write_i32(2).unwrap();
    out.end_sequence().unwrap();

    assert_eq!(out.into_inner(), "[1,\n  2\n]");
}

/// Records the granularity of sink writes so tests can observe copying.
#[derive(Default)]
struct RecordingSink {
    writes: Vec<String>,
}

impl Sink for RecordingSink {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.writes.push(s.to_string());
        Ok(())
    }
}

#[test]
fn test_clean_string_is_forwarded_as_one_slice() {
    let text = "no escaping needed at all, even with ünïcode";
    let mut out = CzmlStream::new(RecordingSink::default());
    out.write_str(text).unwrap();

    let sink = out.into_inner();
    // opening quote, the original slice untouched, closing quote
    assert_eq!(sink.writes, vec!["\"", text, "\""]);
}

#[test]
fn test_escaped_string_flushes_runs() {
    let mut out = CzmlStream::new(RecordingSink::default());
    out.write_str("ab\tcd").unwrap();

    let sink = out.into_inner();
    assert_eq!(sink.writes, vec!["\"", "ab", "\\t", "cd", "\""]);
}
