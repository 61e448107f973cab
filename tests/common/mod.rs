//! Fixture environment for CLI tests.
//!
//! External tools are replaced by shell scripts that mimic just enough of
//! their behavior and append every invocation to a log file.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Files a real Wireshark installer payload contains for each required
/// allow-list entry, plus some that must not be bundled.
pub const PAYLOAD: &[&str] = &[
    "AUTHORS-SHORT",
    "cares.dll",
    "cfilters",
    "colorfilters",
    "comerr64.dll",
    "console.lua",
    "COPYING.txt",
    "dfilters",
    "dtd_gen.lua",
    "enterprises.tsv",
    "libglib-2.0-0.dll",
    "libgmodule-2.0-0.dll",
    "init.lua",
    "k5sprt64.dll",
    "krb5_64.dll",
    "bcg729.dll",
    "libffi-6.dll",
    "libgcc_s_seh-1.dll",
    "libgcrypt-20.dll",
    "libgmp-10.dll",
    "libgnutls-30.dll",
    "libgpg-error-0.dll",
    "libhogweed-4.dll",
    "libintl-8.dll",
    "libmaxminddb-0.dll",
    "libnettle-6.dll",
    "nghttp2.dll",
    "libp11-kit-0.dll",
    "libsbc-1.dll",
    "libsmi-2.dll",
    "libsnappy-1.dll",
    "libspandsp-2.dll",
    "libssh.dll",
    "libtasn1-6.dll",
    "libwinpthread-1.dll",
    "libwireshark.dll",
    "libwiretap.dll",
    "libwsutil.dll",
    "libxml2-2.dll",
    "lua52.dll",
    "lz4.dll",
    "manuf",
    "services",
    "tshark.exe",
    "zlib1.dll",
    // not on the allow-list
    "Wireshark.exe",
    "Qt5Core.dll",
];

pub const SMBCMP_FILES: &[&str] = &[
    "LICENSE",
    "smbcmp/common.py",
    "smbcmp/__init__.py",
    "scripts/smbcmp",
    "scripts/smbcmp-gui",
    "README.md",
];

const FAKE_7Z: &str = r#"#!/bin/sh
echo "7z $*" >> "$FAKE_LOG"
for a in "$@"; do
  case "$a" in -o*) out="${a#-o}" ;; esac
done
mkdir -p "$out" && cp -R "$FAKE_TREE"/. "$out"/
"#;

const FAKE_MSIEXTRACT: &str = r#"#!/bin/sh
echo "msiextract $*" >> "$FAKE_LOG"
dest="$2/Program Files/Wireshark"
mkdir -p "$dest" && cp -R "$FAKE_TREE"/. "$dest"/
"#;

const FAKE_WINE: &str = r#"#!/bin/sh
echo "wine $* @ $(pwd)" >> "$FAKE_LOG"
if [ -n "$FAKE_WINE_FAIL" ]; then
  exit 1
fi
if [ "$1" = "python/python.exe" ]; then
  mkdir -p python/Scripts && printf 'MZ' > python/Scripts/pip.exe
fi
exit 0
"#;

const FAKE_CC: &str = r#"#!/bin/sh
echo "cc $*" >> "$FAKE_LOG"
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then
    printf 'MZ' > "$2"
  fi
  shift
done
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub bin: PathBuf,
    pub tree: PathBuf,
    pub smbcmp: PathBuf,
    pub python_zip: PathBuf,
    pub get_pip: PathBuf,
    pub log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();

        let bin = root.join("bin");
        fs::create_dir_all(&bin).expect("create bin dir");
        script(&bin.join("7z"), FAKE_7Z);
        script(&bin.join("msiextract"), FAKE_MSIEXTRACT);
        script(&bin.join("wine"), FAKE_WINE);
        script(&bin.join("x86_64-w64-mingw32-gcc"), FAKE_CC);

        let tree = root.join("payload");
        fs::create_dir_all(&tree).expect("create payload dir");
        for name in PAYLOAD {
            fs::write(tree.join(name), name).expect("write payload file");
        }

        let smbcmp = root.join("smbcmp-src");
        for file in SMBCMP_FILES {
            let path = smbcmp.join(file);
            fs::create_dir_all(path.parent().unwrap()).expect("create source dir");
            fs::write(&path, file).expect("write source file");
        }

        let python_zip = root.join("python-3.8.1-embed-amd64.zip");
        write_python_zip(&python_zip);

        let get_pip = root.join("get-pip.py");
        fs::write(&get_pip, "# bootstrap\n").expect("write get-pip");

        fs::write(root.join("Wireshark-win64.exe"), "installer").expect("write exe");
        fs::write(root.join("Wireshark-win64.msi"), "installer").expect("write msi");

        Self {
            _tmp: tmp,
            log: root.join("tools.log"),
            root,
            bin,
            tree,
            smbcmp,
            python_zip,
            get_pip,
        }
    }

    /// Bundler command with the fake tools first on `PATH` and no overrides.
    pub fn cmd(&self) -> Command {
        let system_path = std::env::var("PATH").unwrap_or_else(|_| "/usr/bin:/bin".into());
        let mut cmd = cargo_bin_cmd!("smbcmp_win_bundle");
        cmd.env("PATH", format!("{}:{}", self.bin.display(), system_path))
            .env("FAKE_LOG", &self.log)
            .env("FAKE_TREE", &self.tree)
            .env_remove("WINE")
            .env_remove("CC")
            .env_remove("7Z")
            .env_remove("MSIEXTRACT")
            .env_remove("SMBCMP_PIP_BOOTSTRAP")
            .env_remove("FAKE_WINE_FAIL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Bundle command for `installer` (file name under the root) into `out`.
    pub fn bundle(&self, installer: &str, out: &Path) -> Command {
        let mut cmd = self.cmd();
        cmd.arg(self.root.join(installer))
            .arg(&self.python_zip)
            .arg(&self.smbcmp)
            .arg(out)
            .arg("--pip-bootstrap")
            .arg(&self.get_pip);
        cmd
    }

    pub fn out(&self) -> PathBuf {
        self.root.join("dist/smbcmp")
    }

    pub fn tool_log(&self) -> String {
        fs::read_to_string(&self.log).unwrap_or_default()
    }
}

fn script(path: &Path, body: &str) {
    fs::write(path, body).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod script");
}

fn write_python_zip(path: &Path) {
    let file = fs::File::create(path).expect("create zip");
    let mut zip = zip::ZipWriter::new(file);
    for (name, contents) in [
        ("python.exe", "MZ"),
        ("python38.dll", "MZ"),
        ("python38.zip", "PK"),
        ("python38._pth", "python38.zip\n.\n"),
    ] {
        zip.start_file(name, zip::write::SimpleFileOptions::default())
            .expect("start zip entry");
        zip.write_all(contents.as_bytes()).expect("write zip entry");
    }
    zip.finish().expect("finish zip");
}
