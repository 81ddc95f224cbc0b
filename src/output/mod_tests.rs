use super::*;
use crate::layout::{layout, SignMap};
use crate::model::{Bucket, Series};

fn sample_signs() -> SignMap {
    SignMap::mirrored("Male", "Female")
}

fn sample_primitives() -> Vec<BarPrimitive> {
    let series = vec![
        Series::new(
            "Male",
            vec![Bucket::new("0-10", 40), Bucket::new("11-20", 30)],
        ),
        Series::new(
            "Female",
            vec![Bucket::new("0-10", 25), Bucket::new("11-20", 35)],
        ),
    ];
    layout(&series, &sample_signs()).unwrap()
}

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_unknown() {
    assert!("svg".parse::<OutputFormat>().is_err());
}

#[test]
fn text_formatter_produces_output() {
    let primitives = sample_primitives();
    let signs = sample_signs();
    let view = PyramidView {
        primitives: &primitives,
        signs: &signs,
        style: Style::default(),
    };
    let output = TextFormatter::new(ColorMode::Never).format(&view).unwrap();

    assert!(output.contains("0-10"));
    assert!(output.contains("11-20"));
}

#[test]
fn json_formatter_produces_valid_json() {
    let primitives = sample_primitives();
    let signs = sample_signs();
    let view = PyramidView {
        primitives: &primitives,
        signs: &signs,
        style: Style::default(),
    };
    let output = JsonFormatter::new().format(&view).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(parsed.is_object());
}

#[test]
fn default_style_matches_config_defaults() {
    let style = Style::default();
    assert_eq!(style.bar_height, 1);
    assert_eq!(style.left_color, AnsiColor::Green);
    assert_eq!(style.right_color, AnsiColor::Blue);
}
