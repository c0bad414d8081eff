use std::ffi::CString;

use objc2::runtime::{AnyObject, Bool};
use objc2::{class, msg_send};

pub fn string_to_nsstring(value: &str) -> *mut AnyObject {
    let cstring = CString::new(value).unwrap_or_default();
    unsafe { msg_send![class!(NSString), stringWithUTF8String: cstring.as_ptr()] }
}

const NS_ACTIVATION_POLICY_ACCESSORY: i64 = 1;

/// Keep the process an accessory app: no dock icon or app-switcher entry,
/// whether or not the status item is installed.
pub fn set_accessory_activation_policy() {
    unsafe {
        let app: *mut AnyObject = msg_send![class!(NSApplication), sharedApplication];
        if !app.is_null() {
            let _: Bool = msg_send![app, setActivationPolicy: NS_ACTIVATION_POLICY_ACCESSORY];
        }
    }
}

/// Bring this process to the front even though it has no dock presence.
pub fn activate_ignoring_other_apps() {
    unsafe {
        let app: *mut AnyObject = msg_send![class!(NSApplication), sharedApplication];
        if !app.is_null() {
            let _: () = msg_send![app, activateIgnoringOtherApps: Bool::YES];
        }
    }
}
