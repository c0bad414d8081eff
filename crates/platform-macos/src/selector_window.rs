use std::sync::{Mutex, OnceLock};

use objc2::declare::ClassBuilder;
use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
use objc2::{class, msg_send, sel};
use objc2_foundation::{NSPoint, NSRect, NSSize};

const NS_WINDOW_STYLE_MASK_BORDERLESS: u64 = 0;
const NS_BACKING_STORE_BUFFERED: u64 = 2;
const NS_POP_UP_MENU_WINDOW_LEVEL: i64 = 101;
const NS_COLLECTION_CAN_JOIN_ALL_SPACES: u64 = 1 << 0;
const NS_COLLECTION_FULL_SCREEN_AUXILIARY: u64 = 1 << 8;

// The one selector panel, created on first need and reused for every
// presentation. 0 means not created yet.
static SELECTOR_WINDOW: OnceLock<Mutex<usize>> = OnceLock::new();
static PANEL_CLASS: OnceLock<&'static AnyClass> = OnceLock::new();

fn window_slot() -> &'static Mutex<usize> {
    SELECTOR_WINDOW.get_or_init(|| Mutex::new(0))
}

extern "C" fn can_become_key_window(_this: &AnyObject, _cmd: Sel) -> Bool {
    Bool::YES
}

// AppKit refuses key status for borderless windows; the subclass opts back
// in so key-loss stays observable.
fn panel_class() -> Result<&'static AnyClass, String> {
    if let Some(&class) = PANEL_CLASS.get() {
        return Ok(class);
    }
    let mut builder = ClassBuilder::new("BrowserinoSelectorPanel", class!(NSPanel))
        .ok_or_else(|| "selector panel class already registered".to_string())?;
    unsafe {
        builder.add_method(
            sel!(canBecomeKeyWindow),
            can_become_key_window as extern "C" fn(&AnyObject, Sel) -> Bool,
        );
    }
    Ok(PANEL_CLASS.get_or_init(|| builder.register()))
}

/// Move the selector panel to `origin` (Cocoa coordinates, bottom-left
/// origin), bring it to front and make it key. The panel is created at
/// `width` x `height` on first use and reused afterwards.
pub fn selector_show_at(x: f64, y: f64, width: f64, height: f64) -> Result<(), String> {
    let mut slot = window_slot()
        .lock()
        .map_err(|_| "selector window state poisoned".to_string())?;
    if *slot == 0 {
        *slot = create_window(width, height)? as usize;
    }
    let window = *slot as *mut AnyObject;
    unsafe {
        let _: () = msg_send![window, setFrameOrigin: NSPoint::new(x, y)];
        let nil: *mut AnyObject = std::ptr::null_mut();
        let _: () = msg_send![window, makeKeyAndOrderFront: nil];
    }
    Ok(())
}

/// Release the content view first, then close the panel. The panel object
/// itself is kept for reuse.
pub fn selector_clear_and_close() {
    let Ok(slot) = window_slot().lock() else {
        return;
    };
    if *slot == 0 {
        return;
    }
    let window = *slot as *mut AnyObject;
    unsafe {
        let nil: *mut AnyObject = std::ptr::null_mut();
        let _: () = msg_send![window, setContentView: nil];
        let _: () = msg_send![window, close];
    }
}

pub fn selector_is_key() -> bool {
    let Ok(slot) = window_slot().lock() else {
        return false;
    };
    if *slot == 0 {
        return false;
    }
    let window = *slot as *mut AnyObject;
    let is_key: Bool = unsafe { msg_send![window, isKeyWindow] };
    bool::from(is_key)
}

fn create_window(width: f64, height: f64) -> Result<*mut AnyObject, String> {
    let class = panel_class()?;
    unsafe {
        let window: *mut AnyObject = msg_send![class, alloc];
        let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, height));
        let window: *mut AnyObject = msg_send![
            window,
            initWithContentRect: frame,
            styleMask: NS_WINDOW_STYLE_MASK_BORDERLESS,
            backing: NS_BACKING_STORE_BUFFERED,
            defer: Bool::NO
        ];
        if window.is_null() {
            return Err("failed to create selector window".to_string());
        }
        let _: () = msg_send![window, setLevel: NS_POP_UP_MENU_WINDOW_LEVEL];
        let behavior =
            NS_COLLECTION_CAN_JOIN_ALL_SPACES | NS_COLLECTION_FULL_SCREEN_AUXILIARY;
        let _: () = msg_send![window, setCollectionBehavior: behavior];
        let _: () = msg_send![window, setReleasedWhenClosed: Bool::NO];
        Ok(window)
    }
}
