//! End-to-end save workflow: draw, save, decode what the card receives

use sigcard::rendering::trim;
use sigcard::{
    DrawingSurface, EncodedImage, PadConfig, PadState, Pen, Point, PointerEvent, Rgba, SaveOutcome,
    EMPTY_SIGNATURE_NOTICE,
};
use std::sync::{Arc, Mutex};

type Captured = Arc<Mutex<Vec<EncodedImage>>>;

fn pad_with_capture(config: PadConfig) -> (sigcard::SignaturePad, Captured, Arc<Mutex<Vec<String>>>) {
    let mut pad = sigcard::new_pad(config).expect("Failed to create pad");
    let saved: Captured = Arc::new(Mutex::new(Vec::new()));
    let notices = Arc::new(Mutex::new(Vec::new()));

    let s = saved.clone();
    pad.on_save(move |img| s.lock().unwrap().push(img.clone()));
    let n = notices.clone();
    pad.on_notice(move |msg| n.lock().unwrap().push(msg.to_string()));
    (pad, saved, notices)
}

#[test]
fn empty_save_is_rejected_with_notice() {
    let (mut pad, saved, notices) = pad_with_capture(PadConfig::default());

    assert!(pad.is_empty());
    assert_eq!(pad.save(), SaveOutcome::Rejected);
    assert_eq!(pad.state(), PadState::Idle);
    assert!(saved.lock().unwrap().is_empty());
    assert_eq!(notices.lock().unwrap().as_slice(), [EMPTY_SIGNATURE_NOTICE.to_string()]);
}

#[test]
fn save_after_clear_is_rejected() {
    let (mut pad, saved, _) = pad_with_capture(PadConfig::default());
    pad.handle_pointer(PointerEvent::Down(Point::new(100.0, 50.0)));
    pad.handle_pointer(PointerEvent::Up);
    pad.clear();

    assert!(pad.is_empty());
    assert_eq!(pad.save(), SaveOutcome::Rejected);
    assert_eq!(pad.state(), PadState::Drawing);
    assert!(saved.lock().unwrap().is_empty());
}

#[test]
fn saved_signature_is_the_trimmed_ink() {
    let config = PadConfig {
        width: 120,
        height: 40,
        pen: Pen { color: Rgba::new(10, 20, 200, 255), width: 3.0 },
    };
    let (mut pad, saved, notices) = pad_with_capture(config);

    pad.handle_pointer(PointerEvent::Down(Point::new(20.0, 10.0)));
    pad.handle_pointer(PointerEvent::Move(Point::new(50.0, 25.0)));
    pad.handle_pointer(PointerEvent::Move(Point::new(80.0, 12.0)));
    pad.handle_pointer(PointerEvent::Up);
    let drawn = pad.surface().export_raster().unwrap();

    assert_eq!(pad.save(), SaveOutcome::Saved);
    assert_eq!(pad.state(), PadState::Saved);
    assert!(notices.lock().unwrap().is_empty());

    let images = saved.lock().unwrap();
    assert_eq!(images.len(), 1);
    assert!(images[0].as_str().starts_with("data:image/png;base64,"));

    let decoded = images[0].decode().unwrap();
    assert_eq!(decoded, trim(&drawn));
    assert!(decoded.width() < 120 && decoded.height() < 40);
    assert!(decoded.width() > 55);
}

#[test]
fn saving_twice_delivers_once() {
    let (mut pad, saved, _) = pad_with_capture(PadConfig::default());
    pad.handle_pointer(PointerEvent::Down(Point::new(5.0, 5.0)));
    pad.handle_pointer(PointerEvent::Up);

    assert_eq!(pad.save(), SaveOutcome::Saved);
    assert_eq!(pad.save(), SaveOutcome::Ignored);
    assert_eq!(saved.lock().unwrap().len(), 1);
}

#[test]
fn cancel_hands_nothing_to_the_caller() {
    let (mut pad, saved, _) = pad_with_capture(PadConfig::default());
    let closed = Arc::new(Mutex::new(0));
    let c = closed.clone();
    pad.on_close(move || *c.lock().unwrap() += 1);

    pad.handle_pointer(PointerEvent::Down(Point::new(5.0, 5.0)));
    pad.close();

    assert_eq!(pad.state(), PadState::Cancelled);
    assert_eq!(*closed.lock().unwrap(), 1);
    assert_eq!(pad.save(), SaveOutcome::Ignored);
    assert!(saved.lock().unwrap().is_empty());
}

// Ink in a fully transparent colour still counts as a stroke; the pad saves
// the untrimmed canvas rather than refusing.
#[test]
fn transparent_ink_saves_untrimmed_canvas() {
    let config = PadConfig {
        width: 16,
        height: 8,
        pen: Pen { color: Rgba::new(0, 0, 0, 0), width: 2.0 },
    };
    let (mut pad, saved, _) = pad_with_capture(config);
    pad.handle_pointer(PointerEvent::Down(Point::new(4.0, 4.0)));
    pad.handle_pointer(PointerEvent::Up);

    assert!(!pad.is_empty());
    assert_eq!(pad.save(), SaveOutcome::Saved);
    let decoded = saved.lock().unwrap()[0].decode().unwrap();
    assert_eq!(decoded.dimensions(), (16, 8));
    assert!(decoded.is_blank());
}
