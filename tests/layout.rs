use street_orientation::render::draw::figure_dimensions;
use street_orientation::render::FigureStyle;
use street_orientation::{compose, CircularHistogram, GridShape, OrientationError};

fn shape(n: usize) -> (usize, usize) {
    let s = GridShape::for_count(n).expect("shape");
    (s.ncols, s.nrows)
}

#[test]
fn grid_geometry_reference_cases() {
    assert_eq!(shape(5), (3, 2));
    assert_eq!(shape(9), (3, 3));
    assert_eq!(shape(10), (4, 3));
    assert_eq!(shape(1), (1, 1));
    assert_eq!(shape(3), (2, 2));
    assert_eq!(shape(16), (4, 4));
    assert_eq!(shape(17), (5, 4));
}

#[test]
fn grid_always_fits_all_places_with_less_than_a_row_spare() {
    for n in 1..500 {
        let s = GridShape::for_count(n).expect("shape");
        assert!(s.cells() >= n, "n={n}");
        assert!(s.cells() - n < s.ncols, "n={n} wastes a full row");
    }
}

#[test]
fn panels_follow_label_order_row_major() {
    let hist = CircularHistogram::build(&[10.0], 36).expect("hist");
    let places = vec![
        ("Zagreb", &hist),
        ("Austin", &hist),
        ("Melbourne", &hist),
        ("Berlin", &hist),
        ("Lagos", &hist),
    ];
    let figure = compose(places, "Cities").expect("compose");
    assert_eq!(figure.title, "Cities");
    assert_eq!(figure.shape, GridShape { nrows: 2, ncols: 3 });
    let labels: Vec<_> = figure.labels().collect();
    assert_eq!(labels, vec!["Austin", "Berlin", "Lagos", "Melbourne", "Zagreb"]);
    assert_eq!(figure.cell(0, 2).map(|p| p.label.as_str()), Some("Lagos"));
    assert_eq!(figure.cell(1, 0).map(|p| p.label.as_str()), Some("Melbourne"));
    assert!(figure.cell(1, 2).is_none());
    assert_eq!(figure.blank_cells(), 1);
    assert_eq!(figure.panels[0].title, "AUSTIN");
}

#[test]
fn composing_nothing_fails() {
    let empty: Vec<(&str, &CircularHistogram)> = Vec::new();
    assert!(matches!(
        compose(empty, "None"),
        Err(OrientationError::EmptyPlaceSet)
    ));
}

#[test]
fn repeated_label_is_rejected() {
    let north = CircularHistogram::build(&[0.0], 36).expect("hist");
    let east = CircularHistogram::build(&[90.0], 36).expect("hist");
    let places = vec![("Oslo", &north), ("Lima", &north), ("Oslo", &east)];
    match compose(places, "Twice") {
        Err(OrientationError::DuplicatePlace { label }) => assert_eq!(label, "Oslo"),
        other => panic!("expected duplicate place error, got {other:?}"),
    }
}

#[test]
fn figure_size_grows_with_grid() {
    let style = FigureStyle::default();
    let small = figure_dimensions(GridShape::for_count(1).expect("shape"), &style);
    let large = figure_dimensions(GridShape::for_count(10).expect("shape"), &style);
    assert_eq!(small, (style.panel_px, style.panel_px + style.title_band_px));
    assert_eq!(
        large,
        (4 * style.panel_px, 3 * style.panel_px + style.title_band_px)
    );
}
