//! Trimming scenarios for hand-drawn rasters

use sigcard::rendering::{bounding_box, trim, trim_with_bounds};
use sigcard::{BoundingBox, Raster, Rgba};

fn opaque() -> Rgba {
    Rgba::new(20, 20, 20, 255)
}

#[test]
fn single_pixel_trims_to_one_by_one() {
    let mut r = Raster::new(10, 10);
    r.put_pixel(3, 4, opaque());

    assert_eq!(
        bounding_box(&r),
        Some(BoundingBox { top: 4, left: 3, right: 3, bottom: 4 })
    );
    let t = trim(&r);
    assert_eq!(t.dimensions(), (1, 1));
    assert_eq!(t.pixel(0, 0), Some(opaque()));
}

#[test]
fn fully_transparent_raster_is_returned_unchanged() {
    let r = Raster::new(5, 5);
    assert_eq!(bounding_box(&r), None);
    let (t, bounds) = trim_with_bounds(&r);
    assert!(bounds.is_none());
    assert_eq!(t.dimensions(), (5, 5));
    assert_eq!(t, r);
}

#[test]
fn diagonal_spanning_the_raster_is_kept_whole() {
    let mut r = Raster::new(4, 4);
    for i in 0..4 {
        r.put_pixel(i, i, opaque());
    }
    assert_eq!(
        bounding_box(&r),
        Some(BoundingBox { top: 0, left: 0, right: 3, bottom: 3 })
    );
    assert_eq!(trim(&r), r);
}

#[test]
fn output_pixels_are_remapped_from_the_box_origin() {
    let mut r = Raster::new(12, 7);
    let a = Rgba::new(255, 0, 0, 255);
    let b = Rgba::new(0, 255, 0, 90);
    r.put_pixel(2, 5, a);
    r.put_pixel(9, 1, b);

    let (t, bounds) = trim_with_bounds(&r);
    let bounds = bounds.unwrap();
    assert_eq!(bounds, BoundingBox { top: 1, left: 2, right: 9, bottom: 5 });
    assert_eq!(t.dimensions(), (8, 5));
    for y in 0..t.height() {
        for x in 0..t.width() {
            assert_eq!(t.pixel(x, y), r.pixel(bounds.left + x, bounds.top + y));
        }
    }
}

#[test]
fn trim_does_not_touch_its_input() {
    let mut r = Raster::new(6, 6);
    r.put_pixel(2, 2, opaque());
    let before = r.fingerprint();
    let _ = trim(&r);
    assert_eq!(r.fingerprint(), before);
}
