//! Files compiled into the bundler binary.

/// C source of the `smbcmp.exe` launcher.
pub const LAUNCHER_C: &str = include_str!("../../resources/launcher.c");

/// License files placed at the bundle root, as `(file name, contents)`.
pub const LICENSES: [(&str, &str); 3] = [
    ("LICENSE.txt", include_str!("../../resources/LICENSE.txt")),
    (
        "LICENSE.python.txt",
        include_str!("../../resources/LICENSE.python.txt"),
    ),
    (
        "LICENSE.wireshark.txt",
        include_str!("../../resources/LICENSE.wireshark.txt"),
    ),
];
