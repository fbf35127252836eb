use plotbind::core::{Color, Point};
use plotbind::tessellation::{Cell, HalfPlaneTessellator, Tessellator};

fn tessellate(sites: &[Point]) -> Vec<Cell> {
    HalfPlaneTessellator
        .cells(sites, 500.0, 500.0)
        .expect("tessellation")
}

#[test]
fn two_sites_split_the_bounds_down_the_bisector() {
    let cells = tessellate(&[Point::new(100.0, 250.0), Point::new(400.0, 250.0)]);

    assert_eq!(cells.len(), 2);
    assert!(cells[0].contains(Point::new(50.0, 250.0)));
    assert!(!cells[0].contains(Point::new(450.0, 250.0)));
    assert!(cells[1].contains(Point::new(450.0, 250.0)));

    // The shared edge lies on x = 250.
    for cell in &cells {
        assert!(cell.vertices.iter().any(|v| (v.x - 250.0).abs() < 1e-9));
    }
}

#[test]
fn each_cell_contains_its_own_site() {
    let sites = [
        Point::new(50.0, 60.0),
        Point::new(400.0, 80.0),
        Point::new(250.0, 250.0),
        Point::new(120.0, 430.0),
        Point::new(480.0, 470.0),
    ];
    let cells = tessellate(&sites);

    assert_eq!(cells.len(), sites.len());
    for cell in &cells {
        assert!(cell.contains(sites[cell.site]));
    }
}

#[test]
fn cells_are_clipped_to_the_bounds() {
    let sites = [Point::new(10.0, 10.0), Point::new(490.0, 490.0)];
    for cell in tessellate(&sites) {
        for vertex in &cell.vertices {
            assert!(vertex.x >= -1e-9 && vertex.x <= 500.0 + 1e-9);
            assert!(vertex.y >= -1e-9 && vertex.y <= 500.0 + 1e-9);
        }
    }
}

#[test]
fn cells_follow_site_order() {
    let sites = [
        Point::new(400.0, 100.0),
        Point::new(100.0, 400.0),
        Point::new(250.0, 250.0),
    ];
    let cells = tessellate(&sites);
    let order: Vec<_> = cells.iter().map(|cell| cell.site).collect();
    assert_eq!(order, [0, 1, 2]);
}

#[test]
fn duplicate_sites_yield_a_degenerate_cell_for_the_later_one() {
    let sites = [
        Point::new(100.0, 100.0),
        Point::new(100.0, 100.0),
        Point::new(400.0, 400.0),
    ];
    let cells = tessellate(&sites);

    assert_eq!(cells.len(), 3);
    assert!(!cells[0].is_degenerate());
    assert!(cells[1].is_degenerate());
    assert!(cells[0].contains(Point::new(100.0, 100.0)));
}

#[test]
fn single_site_owns_the_whole_bounds() {
    let cells = tessellate(&[Point::new(250.0, 250.0)]);

    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].vertices.len(), 4);
    assert!(cells[0].contains(Point::new(1.0, 499.0)));
}

#[test]
fn degenerate_cell_produces_no_path() {
    let sites = [Point::new(100.0, 100.0), Point::new(100.0, 100.0)];
    let cells = tessellate(&sites);

    assert!(cells[1].to_path(1.0, Color::rgb(0.5, 0.5, 0.5)).is_none());
    let path = cells[0]
        .to_path(1.0, Color::rgb(0.5, 0.5, 0.5))
        .expect("path");
    assert!(path.closed);
}

#[test]
fn invalid_bounds_are_rejected() {
    let sites = [Point::new(1.0, 1.0)];
    assert!(HalfPlaneTessellator.cells(&sites, 0.0, 500.0).is_err());
    assert!(HalfPlaneTessellator.cells(&sites, 500.0, f64::NAN).is_err());
}

#[test]
fn non_finite_sites_are_rejected() {
    let sites = [Point::new(f64::NAN, 1.0)];
    assert!(HalfPlaneTessellator.cells(&sites, 500.0, 500.0).is_err());
}
