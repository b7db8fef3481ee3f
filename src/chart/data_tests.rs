use super::*;

fn parse(json: &str) -> ChartData {
    serde_json::from_str(json).unwrap()
}

#[test]
fn untagged_representations() {
    assert_eq!(parse(r#""some data""#), ChartData::Text("some data".to_string()));
    assert_eq!(
        parse("[0, 10, null, 27]"),
        ChartData::Series(vec![Some(0.0), Some(10.0), None, Some(27.0)])
    );
    assert!(matches!(parse("[[1, 2], [3]]"), ChartData::Sets(ref s) if s.len() == 2));
    assert!(matches!(parse(r#"{"CA": 81, "US": 49}"#), ChartData::Mapping(_)));
}

#[test]
fn mixed_sets() {
    let data = parse(r#"[[2, 1, 3], {"values": [1, 6, 4], "label": "b", "color": "225522"}]"#);
    assert_eq!(
        data.series(),
        vec![
            vec![Some(2.0), Some(1.0), Some(3.0)],
            vec![Some(1.0), Some(6.0), Some(4.0)]
        ]
    );
    let styled: Vec<_> = data.styled().collect();
    assert_eq!(styled.len(), 1);
    assert_eq!(styled[0].label.as_deref(), Some("b"));
}

#[test]
fn mapping_series_keeps_order() {
    let data = ChartData::from([("CA", 81.0), ("US", 49.0), ("AU", 96.0)]);
    assert_eq!(data.series(), vec![vec![Some(81.0), Some(49.0), Some(96.0)]]);
}

#[test]
fn text_has_no_series() {
    assert!(ChartData::from("abc").series().is_empty());
    assert!(!ChartData::from("abc").is_sequence());
}

#[test]
fn per_point_colors() {
    let color: SeriesColor = serde_json::from_str(r#"["ff0000", "00ff00"]"#).unwrap();
    assert_eq!(color.render(), "ff0000|00ff00");
    assert_eq!(SeriesColor::Single("abcdef".to_string()).colors(), ["abcdef"]);
}

#[test]
fn styled_series_rejects_unknown_keys() {
    assert!(serde_json::from_str::<DataSeries>(r#"{"values": [1], "colour": "fff"}"#).is_err());
}

#[test]
fn builder() {
    let series = DataSeries::new([1.0, 2.0])
        .with_label("a")
        .with_color("552255")
        .with_style(LineStyle::named("dashed"))
        .with_thickness(2.0);
    assert_eq!(series.values, vec![Some(1.0), Some(2.0)]);
    assert_eq!(series.thickness, Some(2.0));
    let sets: Vec<DataSet> = vec![series.into()];
    assert_eq!(ChartData::from(sets).kind(), "an array");
}
