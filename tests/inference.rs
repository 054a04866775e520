use anyhow::Result;
use csvcolumns::{ColumnData, ErrorKind, LoadError, load};
use std::fs;
use std::path::PathBuf;

fn fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn inference_matches_first_line_width() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = fixture(&tmp, "data.csv", "1,2.5,x,4\n5,6.5,y,8\n")?;

    let columns = load(&file, None, 1024, false)?;
    assert_eq!(columns.len(), 4);
    // Line 1 was probed for types but still loaded as data.
    assert_eq!(columns.integers(0).unwrap(), &[1, 5]);
    assert_eq!(columns.doubles(1).unwrap(), &[2.5, 6.5]);
    assert_eq!(
        columns.texts(2).unwrap(),
        &["x".to_string(), "y".to_string()]
    );
    assert_eq!(columns.integers(3).unwrap(), &[4, 8]);
    Ok(())
}

#[test]
fn inference_probes_integer_before_double() -> Result<()> {
    // "3" parses as both; the integer probe wins.
    let tmp = tempfile::tempdir()?;
    let file = fixture(&tmp, "data.csv", "3,3.0\n4,4.5\n")?;

    let columns = load(&file, None, 1024, false)?;
    assert!(columns.integers(0).is_some());
    assert!(columns.doubles(1).is_some());
    Ok(())
}

#[test]
fn inference_is_idempotent() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = fixture(&tmp, "data.csv", "id,score,tag\n1,0.5,a\n2,0.7,b\n")?;

    let first = load(&file, None, 1024, true)?;
    let second = load(&file, None, 1024, true)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn inference_never_produces_ignore() -> Result<()> {
    // A literal "." field infers as text, not as an ignored column; every
    // inferred column is emitted.
    let tmp = tempfile::tempdir()?;
    let file = fixture(&tmp, "data.csv", "1,.,x\n2,.,y\n")?;

    let columns = load(&file, None, 1024, false)?;
    assert_eq!(columns.len(), 3);
    assert_eq!(
        columns.texts(1).unwrap(),
        &[".".to_string(), ".".to_string()]
    );
    Ok(())
}

#[test]
fn numeric_header_text_is_accepted_as_a_name() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = fixture(&tmp, "data.csv", "2024,total\n1,2\n")?;

    let columns = load(&file, None, 1024, true)?;
    assert_eq!(
        columns.names().unwrap(),
        &["2024".to_string(), "total".to_string()]
    );
    assert_eq!(columns.integers(0).unwrap(), &[1]);
    Ok(())
}

#[test]
fn name_count_equals_emitted_columns() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = fixture(&tmp, "data.csv", "a,b,c,d\n1,2,3,4\n")?;

    let columns = load(&file, Some(".i.i"), 1024, true)?;
    assert_eq!(columns.len(), 2);
    assert_eq!(
        columns.names().unwrap(),
        &["b".to_string(), "d".to_string()]
    );
    Ok(())
}

#[test]
fn header_only_file_needs_a_sample_line() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = fixture(&tmp, "data.csv", "a,b\n")?;

    let err = load(&file, None, 1024, true).unwrap_err();
    assert!(matches!(err, LoadError::MissingSampleLine { .. }));

    // With an explicit signature the same file is fine: zero data rows.
    let columns = load(&file, Some("ii"), 1024, true)?;
    assert_eq!(columns.column(0), Some(&ColumnData::Integer(vec![])));
    assert_eq!(columns.column(1), Some(&ColumnData::Integer(vec![])));
    Ok(())
}

#[test]
fn mismatched_sample_line_is_fatal() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = fixture(&tmp, "data.csv", "a,b\n1,2,3\n")?;

    let err = load(&file, None, 1024, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(matches!(
        err,
        LoadError::SampleWidthMismatch {
            header: 2,
            sample: 3,
            ..
        }
    ));
    Ok(())
}

#[test]
fn empty_file_is_fatal() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let file = fixture(&tmp, "data.csv", "")?;

    let err = load(&file, None, 1024, false).unwrap_err();
    assert!(matches!(err, LoadError::MissingFirstLine { .. }));
    Ok(())
}
