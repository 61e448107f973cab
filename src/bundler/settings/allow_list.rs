//! Allow-lists selecting which files end up in the bundle.
//!
//! Lists are written one entry per line. For the tshark list each entry is a
//! regular expression matched against the start of a file name; a leading `?`
//! marks the entry optional. The smbcmp list holds literal relative paths.

use crate::bundler::Result;
use regex::Regex;

/// Files taken from the Wireshark installer payload.
pub const TSHARK_FILES: &str = r"
AUTHORS-SHORT
?(lib)?brotlicommon\.dll
?(lib)?brotlidec\.dll
(lib)?cares\.dll
cfilters
colorfilters
(lib)?comerr(32|64)\.dll
console\.lua
COPYING\.txt
dfilters
dtd_gen\.lua
enterprises\.tsv
(lib)?glib-.+\.dll
(lib)?gmodule-.+\.dll
?(lib)?gthread-.+\.dll
init\.lua
(lib)?k5sprt(32|64)\.dll
(lib)?krb5_(32|64)\.dll
(lib)?bcg\d+\.dll
?(lib)?charset\.dll
(lib)?ffi-.*\.dll
(lib)?gcc_s_.+\.dll
(lib)?gcrypt-.+\.dll
(lib)?gmp-.+\.dll
(lib)?gnutls-.+\.dll
(lib)?gpg-error-.*\.dll
(lib)?hogweed-.+\.dll
?(lib)?iconv\.dll
(lib)?intl.*\.dll
(lib)?maxminddb-.*\.dll
(lib)?nettle-.+\.dll
(lib)?nghttp2.*\.dll
(lib)?p11-kit-.*\.dll
(lib)?sbc-.+\.dll
(lib)?smi-.+\.dll
(lib)?snappy-.+\.dll
(lib)?spandsp-.+\.dll
(lib)?ssh\.dll
(lib)?tasn1-.+\.dll
(lib)?winpthread-.*\.dll
(lib)?wireshark\.dll
(lib)?wiretap\.dll
(lib)?wsutil\.dll
(lib)?xml2.*\.dll
(lib)?lua52\.dll
(lib)?lz4\.dll
?(lib)?lzma\.dll
manuf
?(lib)?pcre\.dll
?services
?smi_modules
tshark\.exe
?wka
(lib)?zlib1\.dll
";

/// Files taken from the smbcmp source tree, relative to its root.
pub const SMBCMP_FILES: &str = "
LICENSE
smbcmp/common.py
smbcmp/__init__.py
scripts/smbcmp
scripts/smbcmp-gui
README.md
";

/// One line of an allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowEntry {
    /// Pattern or path, without the optional marker.
    pub pattern: String,
    /// Absence of a match is not an error.
    pub optional: bool,
}

impl AllowEntry {
    /// Compiles the pattern so that it must match at the start of a name.
    pub fn regex(&self) -> Result<Regex> {
        Ok(Regex::new(&format!("^(?:{})", self.pattern))?)
    }
}

/// Splits an allow-list into entries, skipping blank lines.
pub fn parse(list: &str) -> Vec<AllowEntry> {
    list.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.strip_prefix('?') {
            Some(pattern) => AllowEntry {
                pattern: pattern.to_string(),
                optional: true,
            },
            None => AllowEntry {
                pattern: line.to_string(),
                optional: false,
            },
        })
        .collect()
}

/// Paths of the smbcmp allow-list.
pub fn smbcmp_files() -> Vec<String> {
    parse(SMBCMP_FILES).into_iter().map(|e| e.pattern).collect()
}
