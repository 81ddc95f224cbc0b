use crate::layout::{layout, SignMap};
use crate::model::{example, FixedSource, PyramidData};
use crate::output::{ChartFormatter, ColorMode, PyramidView, Style, TextFormatter};

#[test]
fn example_data_lays_out_and_renders() {
    let mut source = FixedSource::new(example());
    let data = PyramidData::from_source(&mut source);
    let signs = SignMap::mirrored("Male", "Female");

    let primitives = layout(data.series(), &signs).unwrap();
    assert_eq!(primitives.len(), 20);
    assert!(primitives.iter().take(10).all(|p| p.span_end >= 0));
    assert!(primitives.iter().skip(10).all(|p| p.span_end <= 0));

    let view = PyramidView {
        primitives: &primitives,
        signs: &signs,
        style: Style::default(),
    };
    let rendered = TextFormatter::new(ColorMode::Never).format(&view).unwrap();
    assert!(rendered.contains("0-10"));
    assert!(rendered.contains("91+"));
}

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(crate::EXIT_SUCCESS, crate::EXIT_CONFIG_ERROR);
}
