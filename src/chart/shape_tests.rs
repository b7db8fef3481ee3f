use serde_json::json;

use super::*;

fn chart(shape: Shape, value: serde_json::Value) -> Chart {
    let serde_json::Value::Object(map) = value else {
        panic!("expected an object");
    };
    Chart::from_map(shape, map).unwrap()
}

#[test]
fn keys_and_names() {
    for shape in Shape::ALL {
        assert_eq!(Shape::from_key(shape.key()), Some(*shape));
    }
    assert_eq!(Shape::QrCode.to_string(), "QRCode");
    assert_eq!(Shape::from_key("QRCode"), None);
}

#[test]
fn type_codes() {
    assert_eq!(chart(Shape::Line, json!({})).type_code(), "lc");
    assert_eq!(chart(Shape::Line, json!({"axis": {"sides": []}})).type_code(), "ls");
    assert_eq!(chart(Shape::Scatter, json!({})).type_code(), "s");
    assert_eq!(chart(Shape::Bar, json!({})).type_code(), "bvg");
    assert_eq!(
        chart(Shape::Bar, json!({"orientation": "horizontal", "style": "stacked"})).type_code(),
        "bhs"
    );
    assert_eq!(chart(Shape::Radar, json!({"style": "filled"})).type_code(), "rs");
    assert_eq!(chart(Shape::Pie, json!({})).type_code(), "p");
    assert_eq!(chart(Shape::Pie, json!({"style": "3d"})).type_code(), "p3");
    assert_eq!(chart(Shape::Pie, json!({"style": "concentric"})).type_code(), "pc");
    assert_eq!(chart(Shape::Map, json!({})).type_code(), "t");
    assert_eq!(chart(Shape::QrCode, json!({})).type_code(), "qr");
}

#[test]
fn overrides_keep_base_order() {
    let params: Vec<Param> = Shape::Pie.spec().params().map(|(p, _)| p).collect();
    let color = params.iter().position(|p| *p == Param::Color).unwrap();
    let labels = params.iter().position(|p| *p == Param::Labels).unwrap();
    assert!(color < labels);
    assert_eq!(params.len(), BASE_PARAMS.len());
}

#[test]
fn shape_params_take_their_base_slot() {
    for shape in [Shape::Line, Shape::Scatter, Shape::Bar, Shape::Radar] {
        let params: Vec<Param> = shape.spec().params().map(|(p, _)| p).collect();
        assert_eq!(params, BASE_PARAMS.iter().map(|(p, _)| *p).collect::<Vec<_>>());
    }
    let codes: Vec<&str> = BASE_PARAMS.iter().map(|(p, _)| p.code()).collect();
    assert_eq!(
        codes,
        [
            "cht", "chs", "chd", "chco", "chf", "chl", "chxt", "chxl", "chxp", "chxs", "chma",
            "chbh", "chp", "chls", "chg", "chtt", "chdl", "chdlp"
        ]
    );
}

#[test]
fn extras_follow_base() {
    let params: Vec<Param> = Shape::Map.spec().params().map(|(p, _)| p).collect();
    assert_eq!(&params[params.len() - 2..], [Param::MapRegion, Param::LabelData]);
}

#[test]
fn allow_lists() {
    assert!(Shape::Bar.spec().accepts(Attribute::BarWidth));
    assert!(!Shape::Line.spec().accepts(Attribute::BarWidth));
    assert!(!Shape::QrCode.spec().accepts(Attribute::Title));
    assert!(Shape::Map.spec().accepts(Attribute::Region));
}

#[test]
fn sequence_shapes_reject_mappings() {
    let c = chart(Shape::Line, json!({"data": {"a": 1}}));
    let err = require_sequence(&c).unwrap_err();
    assert_eq!(
        err.message(),
        "Line data should be given as an array, got a mapping"
    );
}

#[test]
fn pie_requires_mapping() {
    let c = chart(Shape::Pie, json!({"data": [1, 2]}));
    assert!(require_mapping(&c).is_err());
    assert!(mapping_values(&c).is_empty());
}

#[test]
fn qr_requires_text_and_level() {
    assert!(require_text(&chart(Shape::QrCode, json!({"data": [1]}))).is_err());
    assert!(require_text(&chart(Shape::QrCode, json!({"data": "x", "ec_level": "q"}))).is_ok());
    assert!(require_text(&chart(Shape::QrCode, json!({"data": "x", "ec_level": "Z"}))).is_err());
}

#[test]
fn map_labels_depend_on_region() {
    let usa = chart(Shape::Map, json!({"data": {"GA": 1}, "region": "usa"}));
    assert!(map_labels(&usa).is_ok());
    let world = chart(Shape::Map, json!({"data": {"GA": 1, "ZZ": 2}}));
    assert!(map_labels(&world).is_err());
}
