//! tshark extraction from a Wireshark installer.
//!
//! The installer is unpacked into a scratch directory with the extractor
//! matching its format, then the allow-listed files are copied to
//! `<out>/tshark`. The scratch directory is removed on every exit path.

use crate::bundler::{
    Error, Result, Tool, Toolchain,
    settings::{AllowEntry, InstallerKind, Settings},
    utils::{fs, listing, process},
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Extracts the installer and copies the tshark files into the bundle.
///
/// Returns the names of the copied files.
pub async fn extract_tshark(settings: &Settings, tools: &Toolchain) -> Result<Vec<String>> {
    log::info!("extracting wireshark");

    let scratch = tempfile::Builder::new()
        .prefix("smbcmp-ws-")
        .tempdir()
        .map_err(|e| Error::GenericError(format!("creating scratch directory: {}", e)))?;

    let payload = unpack_installer(
        settings.installer_kind(),
        settings.installer(),
        tools,
        scratch.path(),
    )
    .await?;

    let tshark_dir = settings.tshark_dir();
    fs::create_dir_all(&tshark_dir).await?;
    let copied = copy_allowed(&payload, &tshark_dir, &settings.tshark_files()).await?;

    if let Err(e) = scratch.close() {
        log::warn!("failed to remove scratch directory: {}", e);
    }
    Ok(copied)
}

/// Unpacks `installer` into `scratch` and returns the directory holding the
/// Wireshark program files.
pub async fn unpack_installer(
    kind: InstallerKind,
    installer: &Path,
    tools: &Toolchain,
    scratch: &Path,
) -> Result<PathBuf> {
    let extractor = tools.path(Tool::extractor(kind))?;
    process::run(extractor, extractor_args(kind, installer, scratch), None).await?;

    Ok(match kind {
        InstallerKind::Msi => scratch.join("Program Files").join("Wireshark"),
        InstallerKind::Exe => scratch.to_path_buf(),
    })
}

/// Command line of the extractor for `kind`.
pub fn extractor_args(kind: InstallerKind, installer: &Path, scratch: &Path) -> Vec<OsString> {
    match kind {
        InstallerKind::Msi => vec![
            "-C".into(),
            scratch.as_os_str().to_owned(),
            installer.as_os_str().to_owned(),
        ],
        InstallerKind::Exe => {
            let mut out = OsString::from("-o");
            out.push(scratch);
            vec![
                "x".into(),
                "-aoa".into(),
                out,
                installer.as_os_str().to_owned(),
            ]
        }
    }
}

/// Copies the first file of `src_dir` matching each entry into `dest_dir`.
///
/// The directory is listed once and every entry is resolved before the first
/// copy. Optional entries without a match are skipped; a required entry
/// without a match fails with [`Error::PatternNotFound`] and nothing is
/// copied.
pub async fn copy_allowed(
    src_dir: &Path,
    dest_dir: &Path,
    entries: &[AllowEntry],
) -> Result<Vec<String>> {
    let names = listing::list_dir(src_dir).await?;
    let selected = select(&names, entries)?;

    for name in &selected {
        log::info!("copying {}", name);
        fs::copy_file(&src_dir.join(name), &dest_dir.join(name)).await?;
    }

    Ok(selected)
}

/// Resolves each entry against `names`, in entry order.
fn select(names: &[String], entries: &[AllowEntry]) -> Result<Vec<String>> {
    let mut selected = Vec::new();

    for entry in entries {
        match listing::find_first(names, &entry.regex()?) {
            Some(name) => selected.push(name.to_string()),
            None if entry.optional => {
                log::debug!("optional file {} not present", entry.pattern);
            }
            None => return Err(Error::PatternNotFound(entry.pattern.clone())),
        }
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::settings::allow_list;

    fn populate(dir: &Path, names: &[&str]) {
        for name in names {
            std::fs::write(dir.join(name), name).unwrap();
        }
    }

    #[tokio::test]
    async fn copies_matches_and_skips_optional() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        populate(src.path(), &["tshark.exe", "wireshark.exe", "libglib-2.0-0.dll"]);

        let entries = allow_list::parse("tshark\\.exe\n(lib)?glib-.+\\.dll\n?wka\n");
        let copied = copy_allowed(src.path(), dest.path(), &entries).await.unwrap();

        assert_eq!(copied, ["tshark.exe", "libglib-2.0-0.dll"]);
        assert!(dest.path().join("tshark.exe").is_file());
        assert!(!dest.path().join("wireshark.exe").exists());
        assert!(!dest.path().join("wka").exists());
    }

    #[tokio::test]
    async fn missing_required_pattern_fails() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        populate(src.path(), &["tshark.exe"]);

        let entries = allow_list::parse("tshark\\.exe\nmanuf\n");
        let err = copy_allowed(src.path(), dest.path(), &entries)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "cannot find file manuf");
        assert!(!dest.path().join("tshark.exe").exists());
    }

    #[test]
    fn select_keeps_entry_order() {
        let names = ["manuf", "libwireshark.dll", "tshark.exe"].map(String::from);
        let entries = allow_list::parse("tshark\\.exe\n?wka\n(lib)?wireshark\\.dll\n");

        assert_eq!(
            select(&names, &entries).unwrap(),
            ["tshark.exe", "libwireshark.dll"]
        );
    }

    #[test]
    fn msi_and_exe_use_their_extractors() {
        let installer = Path::new("/in/ws.msi");
        let scratch = Path::new("/tmp/smbcmp-ws-1");

        assert_eq!(
            extractor_args(InstallerKind::Msi, installer, scratch),
            ["-C", "/tmp/smbcmp-ws-1", "/in/ws.msi"]
        );
        assert_eq!(
            extractor_args(InstallerKind::Exe, installer, scratch),
            ["x", "-aoa", "-o/tmp/smbcmp-ws-1", "/in/ws.msi"]
        );
    }
}
