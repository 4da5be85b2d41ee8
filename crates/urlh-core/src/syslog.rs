//! Error records for the host system log.
//!
//! Validation and launch failures are reported here in addition to the
//! returned error, since the handler usually runs without a visible terminal.

use std::cell::RefCell;

/// Sink for error-severity system log records.
pub trait SystemLog {
    fn error(&self, message: &str);
}

/// System logger backed by `syslog(3)` (facility `LOG_USER`).
///
/// The connection is opened on construction and closed on drop.
pub struct Syslog {
    /// openlog(3) keeps a pointer to this; it must outlive the connection.
    #[cfg(unix)]
    _ident: std::ffi::CString,
}

#[cfg(unix)]
impl Syslog {
    /// Opens the system log with the file name of `program` as ident.
    pub fn open(program: &str) -> Self {
        let ident = std::path::Path::new(program)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(program);
        let ident = to_cstring(ident);
        unsafe { libc::openlog(ident.as_ptr(), libc::LOG_PID, libc::LOG_USER) };
        Self { _ident: ident }
    }
}

#[cfg(unix)]
impl SystemLog for Syslog {
    fn error(&self, message: &str) {
        let message = to_cstring(message);
        unsafe {
            libc::syslog(
                libc::LOG_ERR,
                b"%s\0".as_ptr() as *const libc::c_char,
                message.as_ptr(),
            )
        };
    }
}

#[cfg(unix)]
impl Drop for Syslog {
    fn drop(&mut self) {
        unsafe { libc::closelog() };
    }
}

/// Escapes interior NULs so the message is never silently dropped.
#[cfg(unix)]
fn to_cstring(s: &str) -> std::ffi::CString {
    std::ffi::CString::new(s.replace('\0', "\\0")).unwrap_or_default()
}

#[cfg(not(unix))]
impl Syslog {
    pub fn open(_program: &str) -> Self {
        Self {}
    }
}

#[cfg(not(unix))]
impl SystemLog for Syslog {
    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Keeps records in memory instead of sending them anywhere.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: RefCell<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records written so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl SystemLog for MemoryLog {
    fn error(&self, message: &str) {
        self.records.borrow_mut().push(message.to_string());
    }
}
