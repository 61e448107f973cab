//! Windows bundle phases.
//!
//! Run in this order by the [`Bundler`](crate::bundler::Bundler):
//!
//! 1. [`wireshark`] - unpack the installer, copy the tshark allow-list
//! 2. [`python`] - unpack the embedded runtime, drop its `._pth` file
//! 3. [`pip`] - install pip, then `windows-curses` and `wxpython`
//! 4. [`smbcmp`] - copy the smbcmp sources
//! 5. [`launcher`] - cross-compile `smbcmp.exe`
//! 6. [`finalize`] - licenses and `conf.ini`

pub mod finalize;
pub mod launcher;
pub mod pip;
pub mod python;
pub mod smbcmp;
pub mod wireshark;
