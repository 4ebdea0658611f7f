mod common;

use common::FakeSysfs;
use joynode::config::ResolverConfig;
use joynode::enumeration::{JoystickBackend, SysfsSource};
use joynode::report::PathDisplay;
use joynode::resolver::{DeviceNodeResolver, ResolveError, Resolution, SysfsTree};
use std::path::{Path, PathBuf};

#[test]
fn test_event_and_js_on_same_device_resolve() {
    let sysfs = FakeSysfs::new();
    let pad = sysfs.add_device("usb1/1-2/1-2:1.0/input12");
    sysfs.add_interface(&pad, "event5");
    sysfs.add_interface(&pad, "js0");

    let resolver = DeviceNodeResolver::sysfs(sysfs.config());
    let resolution = resolver.resolve_path("/dev/input/event5");

    assert!(resolution.is_found());
    assert_eq!(
        resolution,
        Resolution::Found {
            device_node: PathBuf::from("/dev/input/js0"),
            index: Some(0),
        }
    );
}

#[test]
fn test_no_js_for_the_device() {
    let sysfs = FakeSysfs::new();
    let pad = sysfs.add_device("usb1/1-2/1-2:1.0/input12");
    let other = sysfs.add_device("usb1/1-3/1-3:1.0/input13");
    sysfs.add_interface(&pad, "event5");
    sysfs.add_interface(&other, "event6");
    sysfs.add_interface(&other, "js0");

    let resolver = DeviceNodeResolver::sysfs(sysfs.config());

    assert!(matches!(
        resolver.try_resolve("/dev/input/event5"),
        Err(ResolveError::NoMatch(_))
    ));
    let resolution = resolver.resolve_path("/dev/input/event5");
    assert_eq!(resolution, Resolution::NotFound);
    assert!(!resolution.is_found());
}

#[test]
fn test_dangling_js_entry_is_skipped() {
    let sysfs = FakeSysfs::new();
    let pad = sysfs.add_device("usb1/1-2/1-2:1.0/input12");
    sysfs.add_dangling_interface("js0");
    sysfs.add_interface(&pad, "event5");
    sysfs.add_interface(&pad, "js1");

    let resolver = DeviceNodeResolver::sysfs(sysfs.config());

    assert_eq!(
        resolver.resolve_path("/dev/input/event5").device_node(),
        Some(Path::new("/dev/input/js1"))
    );
}

#[test]
fn test_each_pad_finds_its_own_js() {
    let sysfs = FakeSysfs::new();
    let first = sysfs.add_device("usb1/1-2/1-2:1.0/input12");
    let second = sysfs.add_device("usb1/1-3/1-3:1.0/input13");
    sysfs.add_interface(&first, "event5");
    sysfs.add_interface(&first, "js1");
    sysfs.add_interface(&second, "event9");
    sysfs.add_interface(&second, "js0");

    let resolver = DeviceNodeResolver::sysfs(sysfs.config());

    assert_eq!(resolver.resolve_path("event5").joystick_index(), Some(1));
    assert_eq!(resolver.resolve_path("event9").joystick_index(), Some(0));
}

#[test]
fn test_missing_event_entry() {
    let sysfs = FakeSysfs::new();
    let pad = sysfs.add_device("usb1/1-2/1-2:1.0/input12");
    sysfs.add_interface(&pad, "js0");

    let resolver = DeviceNodeResolver::sysfs(sysfs.config());

    assert!(matches!(
        resolver.try_resolve("/dev/input/event5"),
        Err(ResolveError::Canonicalize { .. })
    ));
}

#[test]
fn test_missing_device_tree_degrades_to_not_found() {
    let config = ResolverConfig {
        device_tree_root: PathBuf::from("/nonexistent/joynode/class/input"),
        ..ResolverConfig::default()
    };
    let resolver = DeviceNodeResolver::sysfs(config);

    assert_eq!(resolver.resolve_path("/dev/input/event0"), Resolution::NotFound);
}

#[test]
fn test_enumeration_feeds_the_fallback_policy() {
    let sysfs = FakeSysfs::new();

    let pad = sysfs.add_device("usb1/1-2/1-2:1.0/input12");
    sysfs.describe_device(
        &pad,
        "Microsoft X-Box 360 pad",
        ["0003", "045e", "028e", "0114"],
        "3003f",
    );
    sysfs.add_interface(&pad, "event5");
    sysfs.add_interface(&pad, "js0");

    // Joystick-like, but without a js interface
    let tablet = sysfs.add_device("usb1/1-4/1-4:1.0/input20");
    sysfs.describe_device(&tablet, "Wacom Intuos", ["0003", "056a", "0374", "0110"], "d000003");
    sysfs.add_interface(&tablet, "event7");

    let keyboard = sysfs.add_device("platform/i8042/serio0/input3");
    sysfs.describe_device(
        &keyboard,
        "AT Translated Set 2 keyboard",
        ["0011", "0001", "0001", "ab41"],
        "0",
    );
    sysfs.add_interface(&keyboard, "event2");

    let mut source = SysfsSource::new(SysfsTree, sysfs.config());
    let joysticks = source.joysticks().unwrap();
    assert_eq!(joysticks.len(), 2);

    let resolver = DeviceNodeResolver::sysfs(sysfs.config());
    let displays: Vec<String> = joysticks
        .iter()
        .map(|info| {
            PathDisplay::compose(info.path.as_deref(), |raw| resolver.resolve_path(raw))
                .to_string()
        })
        .collect();

    assert_eq!(
        displays,
        vec![
            "/dev/input/js0 (/dev/input/event5)".to_string(),
            "/dev/input/event7".to_string(),
        ]
    );
}
