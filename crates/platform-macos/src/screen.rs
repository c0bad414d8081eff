use objc2::runtime::AnyObject;
use objc2::{class, msg_send};
use objc2_foundation::{NSPoint, NSRect};

/// A screen's visible frame in Cocoa coordinates (origin bottom-left,
/// y growing upward).
#[derive(Debug, Clone, Copy)]
pub struct ScreenFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Current mouse position in Cocoa screen coordinates, the same space
/// window frames live in.
pub fn mouse_location() -> Option<(f64, f64)> {
    let point: NSPoint = unsafe { msg_send![class!(NSEvent), mouseLocation] };
    Some((point.x, point.y))
}

/// Visible frames (menu bar and dock excluded) of all screens, main screen
/// first. Which frame contains the mouse, and what to do when none does, is
/// the caller's decision.
pub fn display_frames() -> Vec<ScreenFrame> {
    unsafe {
        let screens: *mut AnyObject = msg_send![class!(NSScreen), screens];
        if screens.is_null() {
            return Vec::new();
        }
        let count: usize = msg_send![screens, count];
        (0..count)
            .map(|index| {
                let screen: *mut AnyObject = msg_send![screens, objectAtIndex: index];
                let frame: NSRect = msg_send![screen, visibleFrame];
                ScreenFrame {
                    x: frame.origin.x,
                    y: frame.origin.y,
                    width: frame.size.width,
                    height: frame.size.height,
                }
            })
            .collect()
    }
}
