use roster_beam::io::csv::write_csv_vec;
use roster_beam::testing::read_table;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
struct Record {
    id: u32,
    name: String,
}

#[test]
fn write_then_read_with_headers() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("test_out.csv");
    let data = vec![
        Record {
            id: 1,
            name: "A".into(),
        },
        Record {
            id: 2,
            name: "B, with comma".into(),
        },
    ];

    assert_eq!(write_csv_vec(&path, true, &data)?, 2);
    let contents = fs::read_to_string(&path)?;
    assert!(contents.starts_with("id,name\n"));
    assert!(contents.contains("\"B, with comma\""));

    let back: Vec<Record> = read_table(&path)?;
    assert_eq!(back, data);
    Ok(())
}

#[test]
fn write_creates_parent_dirs_and_tolerates_existing_ones() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("sub").join("dir").join("out.csv");
    let data = vec![Record {
        id: 1,
        name: "test".into(),
    }];
    write_csv_vec(&path, true, &data)?;
    write_csv_vec(&path, true, &data)?;
    assert!(path.exists());
    Ok(())
}

#[test]
fn read_parse_error_names_the_record() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("bad.csv");
    fs::write(&path, "id,name\nbad,Alice\n")?;

    let result: anyhow::Result<Vec<Record>> = read_table(&path);
    let err_msg = format!("{:?}", result.unwrap_err());
    assert!(err_msg.contains("row 1 of"));
    Ok(())
}
