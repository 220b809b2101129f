use label_pdf_rust::{
    create_pdf, generate_labels, layout_label, FontMetricsProvider, FontName, LabelConfig,
    LabelError, LabelRequest, LabelResult, RecordingRenderer, StandardFontMetrics,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every character is `size` units wide and tall
struct SquareGlyphs;

impl FontMetricsProvider for SquareGlyphs {
    fn string_width(&self, text: &str, _font: FontName, font_size: f64) -> LabelResult<f64> {
        Ok(text.chars().count() as f64 * font_size)
    }
}

#[test]
fn hello_fills_width_of_wide_canvas() {
    init_logger();
    let request = LabelRequest::new("HELLO", FontName::Courier, 200.0, 100.0, 0);
    let layout = layout_label(&request, &SquareGlyphs).unwrap().unwrap();
    // fitted 39, minus the safety margin
    assert_eq!(layout.font_size, 37);
    assert_eq!(layout.lines.len(), 1);
    assert_eq!(layout.lines[0].x, (200.0 - 5.0 * 37.0) / 2.0);
    assert_eq!(layout.lines[0].y, (100.0 - 37.0) / 2.0);
}

#[test]
fn five_values_two_blank_give_three_pages_in_order() {
    init_logger();
    let config = LabelConfig { remove_duplicates: false, ..LabelConfig::default() };
    let values = ["Crate 1", "   ", "Crate 2", "\t", "Crate 3"];

    let pages = generate_labels(
        values,
        &config,
        &StandardFontMetrics::new(),
        RecordingRenderer::new(),
    )
    .unwrap();
    assert_eq!(pages.len(), 3);
    for (page, number) in pages.iter().zip(["1", "2", "3"]) {
        let texts: Vec<&str> = page.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Crate", number]);
        assert!(page[0].y > page[1].y);
    }

    let doc = create_pdf(values, &config).unwrap();
    assert_eq!(doc.page_count, 3);
}

#[test]
fn repeated_runs_are_identical() {
    init_logger();
    let config = LabelConfig::from_json(r#"{"font": "Times-Bold", "width_mm": 62, "height_mm": 29}"#)
        .unwrap();
    let values = ["Parcel 0042", "nan", "Return to sender", "Parcel 0042"];

    let run = || {
        generate_labels(
            values,
            &config,
            &StandardFontMetrics::new(),
            RecordingRenderer::new(),
        )
        .unwrap()
    };
    let first = run();
    assert_eq!(first.len(), 2);
    assert_eq!(first, run());

    assert_eq!(
        create_pdf(values, &config).unwrap().bytes,
        create_pdf(values, &config).unwrap().bytes
    );
}

#[test]
fn every_drawn_line_fits_inside_the_label() {
    init_logger();
    let config = LabelConfig::default();
    let (width, height) = config.page_size();
    let metrics = StandardFontMetrics::new();
    let values = [
        "W",
        "Mississippi",
        "A B C D E F",
        "Größe 42",
        "Price €5 ™",
        "iiiiiiiiiiiiiiiiiiiiiiiiiiii",
    ];

    let pages = generate_labels(values, &config, &metrics, RecordingRenderer::new()).unwrap();
    assert_eq!(pages.len(), values.len());
    for call in pages.iter().flatten() {
        let w = metrics.string_width(&call.text, call.font, call.font_size).unwrap();
        assert!(call.x >= 0.0 && call.x + w <= width, "{:?} overflows horizontally", call);
        assert!(call.y >= 0.0 && call.y + call.font_size <= height, "{:?} overflows vertically", call);
    }
}

#[test]
fn unsupported_font_fails_before_any_page() {
    init_logger();
    let err = LabelConfig::from_json(r#"{"font": "Comic Sans MS"}"#).unwrap_err();
    assert!(matches!(err, LabelError::InvalidFont(_)));
    assert!("Symbol".parse::<FontName>().is_err());
}
