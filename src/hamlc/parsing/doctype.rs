//! Doctype shortcuts
//!
//! `!!!` lines expand to a full document type declaration. The key after the marker picks the
//! declaration; a bare `!!!` means `default`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static DOCTYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("5", "<!DOCTYPE html>"),
        ("xml", "<?xml version=\"1.0\" encoding=\"utf-8\" ?>"),
        (
            "default",
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">",
        ),
        (
            "strict",
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">",
        ),
        (
            "frameset",
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Frameset//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd\">",
        ),
        (
            "1.1",
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">",
        ),
        (
            "basic",
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML Basic 1.1//EN\" \"http://www.w3.org/TR/xhtml-basic/xhtml-basic11.dtd\">",
        ),
        (
            "mobile",
            "<!DOCTYPE html PUBLIC \"-//WAPFORUM//DTD XHTML Mobile 1.2//EN\" \"http://www.openmobilealliance.org/tech/DTD/xhtml-mobile12.dtd\">",
        ),
    ])
});

/// The key named on a `!!!` line, `default` when none is given.
pub fn doctype_key(line: &str) -> &str {
    let key = line.trim_start_matches('!').trim();
    if key.is_empty() {
        "default"
    } else {
        key
    }
}

/// Look up the declaration for a `!!!` line.
pub fn doctype_declaration(line: &str) -> Option<&'static str> {
    DOCTYPES.get(doctype_key(line)).copied()
}
