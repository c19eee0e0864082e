use gradfield::{render_svg, FieldSampler, OrbitCamera, Quiver, QuiverConfig};

/// Trimmed contents of every `<text>` node, in document order.
fn text_bodies(svg: &str) -> Vec<String> {
    svg.split("<text")
        .skip(1)
        .filter_map(|chunk| {
            let body = chunk.split_once('>')?.1;
            let end = body.find("</text>")?;
            Some(body[..end].trim().to_string())
        })
        .collect()
}

fn default_figure(camera: &OrbitCamera) -> (Quiver, String) {
    let cfg = QuiverConfig::default();
    let samples = FieldSampler::new(cfg.clone()).sample().unwrap();
    let quiver = Quiver::build(&samples, &cfg);
    let svg = render_svg(&quiver, &cfg, camera).unwrap();
    (quiver, svg)
}

#[test]
fn svg_carries_title_labels_and_size() {
    let (_, svg) = default_figure(&OrbitCamera::default());
    assert!(svg.contains("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("width=\"1000\""));
    assert!(svg.contains("height=\"800\""));
    assert!(svg.contains("Gradient Vector Field of f(x,y,z)"));
    let texts = text_bodies(&svg);
    for label in ["X", "Y", "Z"] {
        assert!(texts.iter().any(|t| t == label), "missing axis label {label}: {texts:?}");
    }
}

#[test]
fn arrows_are_drawn_in_blue() {
    let (quiver, svg) = default_figure(&OrbitCamera::default());
    let lower = svg.to_lowercase();
    assert!(lower.contains("#0000ff"));
    // Shaft plus two barbs per arrow.
    let strokes = lower.matches("<polyline").count();
    assert!(strokes >= 3 * quiver.arrows().len(), "only {strokes} polylines");
}

#[test]
fn camera_changes_the_picture_not_the_content() {
    let (_, front) = default_figure(&OrbitCamera::default());
    let mut cam = OrbitCamera::default();
    cam.orbit(200.0, -50.0);
    cam.zoom(2.0);
    let (_, side) = default_figure(&cam);
    assert_ne!(front, side);
    assert!(side.contains("Gradient Vector Field of f(x,y,z)"));
}

#[test]
fn custom_styling_flows_through() {
    let cfg = QuiverConfig {
        color: "#ff8800".into(),
        title: "exp(xy) field".into(),
        axis_labels: ["east".into(), "north".into(), "up".into()],
        figure_size: (640, 480),
        ..QuiverConfig::default()
    };
    let samples = FieldSampler::new(cfg.clone()).sample().unwrap();
    let quiver = Quiver::build(&samples, &cfg);
    let svg = render_svg(&quiver, &cfg, &OrbitCamera::default()).unwrap();
    assert!(svg.to_lowercase().contains("#ff8800"));
    assert!(svg.contains("exp(xy) field"));
    let texts = text_bodies(&svg);
    for label in ["east", "north", "up"] {
        assert!(texts.iter().any(|t| t == label), "missing axis label {label}: {texts:?}");
    }
    assert!(svg.contains("width=\"640\""));
}
