use serde_json::json;

use super::*;
use crate::chart::Shape;

fn chart(shape: Shape, value: serde_json::Value) -> Chart {
    let serde_json::Value::Object(map) = value else {
        panic!("expected an object");
    };
    Chart::from_map(shape, map).unwrap()
}

#[test]
fn size_needs_both_dimensions() {
    let c = chart(Shape::Line, json!({"width": 400, "height": 200}));
    assert_eq!(size(&c).as_deref(), Some("400x200"));
    let c = chart(Shape::Line, json!({"width": 400}));
    assert_eq!(size(&c), None);
}

#[test]
fn data_with_explicit_range() {
    let c = chart(
        Shape::Line,
        json!({"width": 400, "height": 200, "y_min": -20, "y_max": 10, "data": [2, 1, 3, 4, 5, 9]}),
    );
    assert_eq!(data(&c).as_deref(), Some("s:squwy6"));
}

#[test]
fn data_with_text_encoding() {
    let c = chart(
        Shape::Line,
        json!({"width": 400, "height": 200, "data": [0, 50, null, 100], "data_encoding": "text"}),
    );
    assert_eq!(data(&c).as_deref(), Some("t:0,50,-1,100"));
}

#[test]
fn series_colors_from_styled_sets() {
    let c = chart(
        Shape::Line,
        json!({"width": 400, "height": 200, "data": [
            {"values": [1, 2], "color": "552255"},
            [3, 4],
            {"values": [5, 6], "color": ["225522", "abcdef"]}
        ]}),
    );
    assert_eq!(series_colors(&c).as_deref(), Some("552255,225522|abcdef"));
}

#[test]
fn fill_and_title() {
    let c = chart(
        Shape::Line,
        json!({"background": "000000", "title": "Sales\nQ1"}),
    );
    assert_eq!(fill(&c).as_deref(), Some("bg,s,000000"));
    assert_eq!(title(&c).as_deref(), Some("Sales|Q1"));
}

#[test]
fn margins_and_legend_size() {
    let c = chart(
        Shape::Line,
        json!({"margins": {"left": 5, "right": 25, "top": 10, "bottom": 10}}),
    );
    assert_eq!(margins(&c).as_deref(), Some("5,25,10,10"));

    let c = chart(Shape::Line, json!({"legend": {"width": 50, "height": 20}}));
    assert_eq!(margins(&c).as_deref(), Some("0,0,0,0|50,20"));

    let c = chart(Shape::Line, json!({"legend": {"position": "bottom"}}));
    assert_eq!(margins(&c), None);
    assert_eq!(legend_position(&c).as_deref(), Some("b"));
}

#[test]
fn legend_labels() {
    let c = chart(
        Shape::Line,
        json!({"data": [{"values": [1], "label": "a"}, [2], {"values": [3], "label": "c"}]}),
    );
    assert_eq!(legend(&c).as_deref(), Some("a||c"));

    let c = chart(Shape::Line, json!({"data": [[1], [2]]}));
    assert_eq!(legend(&c), None);
}

#[test]
fn line_styles_only_when_not_default() {
    let c = chart(Shape::Line, json!({"data": [[1], {"values": [2]}]}));
    assert_eq!(line_styles(&c), None);

    let c = chart(
        Shape::Line,
        json!({"data": [{"values": [1], "style": "dashed", "thickness": 2}, [2]]}),
    );
    assert_eq!(line_styles(&c).as_deref(), Some("2,8,8|1.5,1,0"));
}

#[test]
fn bar_spacing_defaults() {
    let c = chart(Shape::Bar, json!({"data": [1, 2]}));
    assert_eq!(bar_spacing(&c), None);

    let c = chart(Shape::Bar, json!({"data": [1, 2], "bar_space": 4}));
    assert_eq!(bar_spacing(&c).as_deref(), Some("a,4,4"));

    let c = chart(Shape::Bar, json!({"data": [[1], [2]], "bar_width": 10}));
    assert_eq!(bar_spacing(&c).as_deref(), Some("10,8,8"));
}

#[test]
fn pie_rotation_from_twelve_o_clock() {
    let c = chart(Shape::Pie, json!({"data": {"a": 1}}));
    assert_eq!(pie_rotation(&c).as_deref(), Some("4.712"));

    let c = chart(Shape::Pie, json!({"data": {"a": 1}, "rotate": 90}));
    assert_eq!(pie_rotation(&c), None);

    let c = chart(Shape::Pie, json!({"data": {"a": 1}, "rotate": 180}));
    assert_eq!(pie_rotation(&c).as_deref(), Some("1.571"));
}

#[test]
fn pie_labels_and_colors() {
    let c = chart(
        Shape::Pie,
        json!({"data": {"Apples": 3, "Pears": 1}, "colors": ["ff0000", "00ff00"]}),
    );
    assert_eq!(pie_labels(&c).as_deref(), Some("Apples|Pears"));
    assert_eq!(pie_colors(&c).as_deref(), Some("ff0000,00ff00"));
}

#[test]
fn map_colors_default_foreground() {
    let c = chart(Shape::Map, json!({"colors": ["111111", "222222", "333333"]}));
    assert_eq!(map_colors(&c).as_deref(), Some("FFFFFF,111111,222222,333333"));

    let c = chart(
        Shape::Map,
        json!({"foreground": "BBBBBB", "colors": ["111111", "222222", "333333"]}),
    );
    assert_eq!(map_colors(&c).as_deref(), Some("BBBBBB,111111,222222,333333"));

    let c = chart(Shape::Map, json!({}));
    assert_eq!(map_colors(&c), None);
}

#[test]
fn map_region_and_codes() {
    let c = chart(
        Shape::Map,
        json!({"data": {"CA": 10, "US": 20, "AU": 30, "RU": 40, "MX": 0}}),
    );
    assert_eq!(map_region(&c).as_deref(), Some("world"));
    assert_eq!(map_codes(&c).as_deref(), Some("CAUSAURUMX"));
    assert_eq!(data(&c).as_deref(), Some("s:Pet9A"));
}

#[test]
fn qr_parameters() {
    let c = chart(Shape::QrCode, json!({"data": "some data", "encoding": "iso88591"}));
    assert_eq!(qr_text(&c).as_deref(), Some("some data"));
    assert_eq!(qr_error_correction(&c), None);
    assert_eq!(qr_encoding(&c).as_deref(), Some("ISO-8859-1"));

    let c = chart(Shape::QrCode, json!({"data": "x", "ec_level": "h"}));
    assert_eq!(qr_error_correction(&c).as_deref(), Some("H"));
    assert_eq!(qr_encoding(&c).as_deref(), Some("UTF-8"));

    let c = chart(Shape::QrCode, json!({"data": "x", "margin": 2}));
    assert_eq!(qr_error_correction(&c).as_deref(), Some("L|2"));
}
