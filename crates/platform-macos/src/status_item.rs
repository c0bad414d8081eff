use std::sync::{Mutex, OnceLock};

use objc2::runtime::AnyObject;
use objc2::{class, msg_send, sel};

use crate::util::string_to_nsstring;

// The one status item, retained across calls. 0 means not installed.
static STATUS_ITEM: OnceLock<Mutex<usize>> = OnceLock::new();

fn status_item_slot() -> &'static Mutex<usize> {
    STATUS_ITEM.get_or_init(|| Mutex::new(0))
}

/// Install or remove the menu-bar status item. Installing twice is a no-op,
/// as is removing an absent item.
pub fn status_item_set_visible(visible: bool) -> Result<(), String> {
    let mut slot = status_item_slot()
        .lock()
        .map_err(|_| "status item state poisoned".to_string())?;

    if visible {
        if *slot == 0 {
            *slot = install_status_item()? as usize;
        }
    } else if *slot != 0 {
        let item = *slot as *mut AnyObject;
        unsafe {
            let status_bar: *mut AnyObject = msg_send![class!(NSStatusBar), systemStatusBar];
            let _: () = msg_send![status_bar, removeStatusItem: item];
            let _: () = msg_send![item, release];
        }
        *slot = 0;
    }
    Ok(())
}

fn install_status_item() -> Result<*mut AnyObject, String> {
    const NS_VARIABLE_STATUS_ITEM_LENGTH: f64 = -1.0;

    unsafe {
        let status_bar: *mut AnyObject = msg_send![class!(NSStatusBar), systemStatusBar];
        if status_bar.is_null() {
            return Err("failed to access NSStatusBar".to_string());
        }
        let item: *mut AnyObject =
            msg_send![status_bar, statusItemWithLength: NS_VARIABLE_STATUS_ITEM_LENGTH];
        if item.is_null() {
            return Err("failed to create status item".to_string());
        }
        let item: *mut AnyObject = msg_send![item, retain];

        let button: *mut AnyObject = msg_send![item, button];
        if !button.is_null() {
            let _: () = msg_send![button, setTitle: string_to_nsstring("🌐")];
        }

        let _: () = msg_send![item, setMenu: build_menu()?];
        Ok(item)
    }
}

/// "Preferences…" goes down the responder chain; the shell app implements
/// `showPreferencesWindow:`. "Quit" goes straight to NSApp. No key
/// equivalents on either.
fn build_menu() -> Result<*mut AnyObject, String> {
    unsafe {
        let menu: *mut AnyObject = msg_send![class!(NSMenu), new];
        if menu.is_null() {
            return Err("failed to create status menu".to_string());
        }

        let empty = string_to_nsstring("");

        let preferences: *mut AnyObject = msg_send![class!(NSMenuItem), alloc];
        let preferences: *mut AnyObject = msg_send![
            preferences,
            initWithTitle: string_to_nsstring("Preferences…"),
            action: sel!(showPreferencesWindow:),
            keyEquivalent: empty
        ];
        let _: () = msg_send![menu, addItem: preferences];

        let separator: *mut AnyObject = msg_send![class!(NSMenuItem), separatorItem];
        let _: () = msg_send![menu, addItem: separator];

        let quit: *mut AnyObject = msg_send![class!(NSMenuItem), alloc];
        let quit: *mut AnyObject = msg_send![
            quit,
            initWithTitle: string_to_nsstring("Quit"),
            action: sel!(terminate:),
            keyEquivalent: empty
        ];
        let app: *mut AnyObject = msg_send![class!(NSApplication), sharedApplication];
        let _: () = msg_send![quit, setTarget: app];
        let _: () = msg_send![menu, addItem: quit];

        Ok(menu)
    }
}
