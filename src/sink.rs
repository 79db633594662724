use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::entity::Record;
use crate::{Error, Result};

/// Deletes a previous run's output so the new run starts from an empty file.
/// A file that isn't there is fine, anything else is [`Error::OutputReset`].
pub fn reset_output(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::OutputReset {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Appends one page worth of records to `path`, header first if this is page 1.
///
/// The file is opened and closed on every call. Failing to open it returns
/// [`Error::OutputOpen`], which the driver treats as fatal.
pub fn append_page(path: &Path, header: &[&str], page: usize, records: &[Record]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;

    // Writer owns the file, dropping it closes the file on every path out of here.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    if page == 1 {
        writer.write_record(header)?;
    }
    for record in records {
        writer.write_record(&record.fields)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> Record {
        Record {
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn header_only_on_first_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provinces.csv");
        let header = ["Kode", "Nama"];

        append_page(&path, &header, 1, &[record(&["11", "ACEH"])]).unwrap();
        append_page(&path, &header, 2, &[record(&["12", "SUMATERA UTARA"])]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Kode,Nama\n11,ACEH\n12,SUMATERA UTARA\n");
    }

    #[test]
    fn empty_first_page_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("villages.csv");

        append_page(&path, &["Kode", "Nama", "Kecamatan"], 1, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Kode,Nama,Kecamatan\n");
    }

    #[test]
    fn fields_needing_quotes_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.csv");

        append_page(&path, &["Kode", "Nama", "Provinsi"], 2, &[record(&["1", "A, B", "say \"hi\""])])
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1,\"A, B\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn reset_removes_file_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("districts.csv");

        reset_output(&path).unwrap();
        fs::write(&path, "stale").unwrap();
        reset_output(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn reset_failure_is_output_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.csv");
        fs::create_dir(&path).unwrap();

        let err = reset_output(&path).unwrap_err();
        assert!(matches!(err, Error::OutputReset { .. }));
    }

    #[test]
    fn open_failure_is_output_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("provinces.csv");

        let err = append_page(&path, &["Kode", "Nama"], 1, &[]).unwrap_err();
        assert!(matches!(err, Error::OutputOpen { .. }));
    }
}
