use std::{ffi::OsString, fs::{self, File, OpenOptions}, io::{self, Write}, path::{Path, PathBuf}};

use crate::constants::*;

pub fn full_file_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}{}", name, CSV_EXTENSION))
}

pub fn public_file_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}{}{}", name, PUBLIC_SUFFIX, CSV_EXTENSION))
}

/// `<file>-failed_verification` next to `full`.
pub fn failed_file_path(full: &Path) -> PathBuf {
    let mut name = OsString::from(full.as_os_str());
    name.push(FAILED_SUFFIX);
    PathBuf::from(name)
}

/// Writes `contents`, replacing any existing file, readable by the owner only.
pub fn write_private_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
    // set on the handle so an existing file is tightened as well, before any content lands
    set_secure_file_permissions(&file, path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

pub fn set_secure_file_permissions(file: &File, path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = path;
        file.set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
    }
    #[cfg(windows)]
    {
        let _ = file;
        tracing::warn!(path = %path.display(), "file permissions not set on Windows, ensure this file is protected");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let dir = Path::new("out");
        assert_eq!(full_file_path(dir, "my-keys"), Path::new("out/my-keys.csv"));
        assert_eq!(public_file_path(dir, "my-keys"), Path::new("out/my-keys-public_addresses_only.csv"));
        assert_eq!(failed_file_path(&full_file_path(dir, "my-keys")), Path::new("out/my-keys.csv-failed_verification"));
    }

    #[test]
    fn test_private_file_tightens_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("k.csv");
        fs::write(&path, "first, and longer").unwrap();
        write_private_file(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, FILE_MODE);
        }
    }
}
