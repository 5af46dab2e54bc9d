use std::{env, ffi::OsString, path::PathBuf};

const BOOK_ENV_VAR: &str = "CONTACTS_BOOK";
const DEFAULT_BOOK_FILE: &str = "addressbook.db";

/// Where the address book lives: the `--book` flag, then `$CONTACTS_BOOK`,
/// then `addressbook.db` in the working directory.
pub(crate) fn book_path(flag: Option<PathBuf>) -> PathBuf {
    resolve_book_path(flag, env::var_os(BOOK_ENV_VAR))
}

fn resolve_book_path(flag: Option<PathBuf>, from_env: Option<OsString>) -> PathBuf {
    flag.or_else(|| {
        from_env
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_FILE))
}
