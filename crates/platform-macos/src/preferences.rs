use std::sync::{Mutex, OnceLock};

use objc2::runtime::{AnyObject, Bool};
use objc2::{class, msg_send};
use objc2_foundation::{NSPoint, NSRect, NSSize};

use crate::util::{activate_ignoring_other_apps, string_to_nsstring};

pub const PREFERENCES_MIN_WIDTH: f64 = 700.0;
pub const PREFERENCES_MIN_HEIGHT: f64 = 500.0;

const NS_WINDOW_STYLE_MASK_TITLED: u64 = 1 << 0;
const NS_WINDOW_STYLE_MASK_CLOSABLE: u64 = 1 << 1;
const NS_WINDOW_STYLE_MASK_MINIATURIZABLE: u64 = 1 << 2;
const NS_WINDOW_STYLE_MASK_RESIZABLE: u64 = 1 << 3;
const NS_BACKING_STORE_BUFFERED: u64 = 2;
const NS_COLLECTION_MOVE_TO_ACTIVE_SPACE: u64 = 1 << 1;
const NS_COLLECTION_FULL_SCREEN_NONE: u64 = 1 << 9;

// The one preferences window, created on first open and reused.
static PREFERENCES_WINDOW: OnceLock<Mutex<usize>> = OnceLock::new();

fn window_slot() -> &'static Mutex<usize> {
    PREFERENCES_WINDOW.get_or_init(|| Mutex::new(0))
}

/// Show the preferences window, creating it on first use. The window is
/// centered, made key and front, and the app is activated so it surfaces
/// even without a dock icon. The settings-editing content view is the shell
/// app's concern.
pub fn show_preferences() -> Result<(), String> {
    let mut slot = window_slot()
        .lock()
        .map_err(|_| "preferences window state poisoned".to_string())?;
    if *slot == 0 {
        *slot = create_window()? as usize;
    }
    let window = *slot as *mut AnyObject;

    activate_ignoring_other_apps();
    unsafe {
        let nil: *mut AnyObject = std::ptr::null_mut();
        let _: () = msg_send![window, center];
        let _: () = msg_send![window, makeKeyAndOrderFront: nil];
        let _: () = msg_send![window, orderFrontRegardless];
    }
    Ok(())
}

fn create_window() -> Result<*mut AnyObject, String> {
    unsafe {
        let window: *mut AnyObject = msg_send![class!(NSWindow), alloc];
        let frame = NSRect::new(
            NSPoint::new(0.0, 0.0),
            NSSize::new(PREFERENCES_MIN_WIDTH, PREFERENCES_MIN_HEIGHT),
        );
        let style = NS_WINDOW_STYLE_MASK_TITLED
            | NS_WINDOW_STYLE_MASK_CLOSABLE
            | NS_WINDOW_STYLE_MASK_MINIATURIZABLE
            | NS_WINDOW_STYLE_MASK_RESIZABLE;
        let window: *mut AnyObject = msg_send![
            window,
            initWithContentRect: frame,
            styleMask: style,
            backing: NS_BACKING_STORE_BUFFERED,
            defer: Bool::NO
        ];
        if window.is_null() {
            return Err("failed to create preferences window".to_string());
        }
        let _: () = msg_send![window, setTitle: string_to_nsstring("Preferences")];
        let _: () = msg_send![window, setTitlebarAppearsTransparent: Bool::YES];
        let _: () = msg_send![
            window,
            setContentMinSize: NSSize::new(PREFERENCES_MIN_WIDTH, PREFERENCES_MIN_HEIGHT)
        ];
        let behavior = NS_COLLECTION_MOVE_TO_ACTIVE_SPACE | NS_COLLECTION_FULL_SCREEN_NONE;
        let _: () = msg_send![window, setCollectionBehavior: behavior];
        let _: () = msg_send![window, setReleasedWhenClosed: Bool::NO];
        Ok(window)
    }
}
