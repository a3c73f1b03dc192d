use chrono::{DateTime, FixedOffset};

use markspan_core::{
    Attr, ConvertOptions, LongDateTime, MarkupEntity, MarkupKind, NodeContent, TimeFormatter,
    convert, convert_with, emit_html, parse_timestamp,
};

fn time_entity(text: &str, raw: &str) -> MarkupEntity {
    let close = text.chars().count() - 1;
    MarkupEntity {
        open_len: 1,
        close_len: 1,
        time: Some(raw.to_string()),
        ..MarkupEntity::new(MarkupKind::Time, 0, close)
    }
}

#[test]
fn parses_compact_and_rfc3339_offsets() -> Result<(), Box<dyn std::error::Error>> {
    let with_compact = parse_timestamp("2000-01-02T10:15:00.000000-0700")?;
    assert_eq!(with_compact.offset().local_minus_utc(), -7 * 3600);

    let with_zulu = parse_timestamp("2020-11-12T13:00:45.795000Z")?;
    assert_eq!(with_zulu.offset().local_minus_utc(), 0);

    let with_colon = parse_timestamp("2000-01-02T10:15:00+05:00")?;
    assert_eq!(with_colon.offset().local_minus_utc(), 5 * 3600);

    let without_fraction = parse_timestamp("2000-01-02T10:15:00-0700")?;
    assert_eq!(without_fraction, with_compact);

    assert!(parse_timestamp("next tuesday").is_err());
    Ok(())
}

#[test]
fn default_rendering_keeps_the_timestamps_own_offset() {
    let text = "<2000-01-02T10:15:00.000000-0700>";
    let tree = convert(text, &[time_entity(text, "2000-01-02T10:15:00.000000-0700")]);
    assert_eq!(
        emit_html(&tree),
        "<div><time datetime=\"2000-01-02T10:15:00.000000-0700\">1/2/2000, 10:15:00 AM</time></div>"
    );
}

#[test]
fn zone_override_shifts_the_display_text() {
    let text = "<2000-01-02T10:15:00.000000-0700>";
    let formatter = LongDateTime {
        zone: FixedOffset::east_opt(3 * 3600),
    };
    let options = ConvertOptions { time: &formatter };
    let tree = convert_with(
        text,
        &[time_entity(text, "2000-01-02T10:15:00.000000-0700")],
        &options,
    );
    // 10:15 at -07:00 is 20:15 at +03:00; the datetime attribute is
    // untouched by the zone change.
    assert_eq!(
        emit_html(&tree),
        "<div><time datetime=\"2000-01-02T10:15:00.000000-0700\">1/2/2000, 8:15:00 PM</time></div>"
    );
}

#[test]
fn custom_formatter_controls_the_display_text() {
    struct DateOnly;

    impl TimeFormatter for DateOnly {
        fn format(&self, instant: DateTime<FixedOffset>) -> String {
            instant.format("%Y-%m-%d").to_string()
        }
    }

    let text = "<2020-11-12T13:00:45.795000Z>";
    let options = ConvertOptions { time: &DateOnly };
    let tree = convert_with(
        text,
        &[time_entity(text, "2020-11-12T13:00:45.795000Z")],
        &options,
    );
    assert_eq!(
        emit_html(&tree),
        "<div><time datetime=\"2020-11-12T13:00:45.795000Z\">2020-11-12</time></div>"
    );
}

#[test]
fn unparseable_time_falls_back_to_the_raw_string() {
    let text = "<next tuesday>";
    let tree = convert(text, &[time_entity(text, "next tuesday")]);
    assert_eq!(
        emit_html(&tree),
        "<div><time datetime=\"next tuesday\">next tuesday</time></div>"
    );
}

#[test]
fn datetime_attribute_carries_the_original_string() {
    let raw = "2020-11-12T13:00:45.795000Z";
    let text = "<2020-11-12T13:00:45.795000Z>";
    let tree = convert(text, &[time_entity(text, raw)]);
    let NodeContent::Children(children) = &tree.content else {
        panic!("root must hold children");
    };
    assert_eq!(
        children[0].attrs,
        vec![Attr {
            name: "datetime",
            value: raw.to_string(),
        }]
    );
}
