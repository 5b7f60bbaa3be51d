use roster_beam::io::archive::{archive_path_for, Archiver, ZipArchiver};
use roster_beam::io::tree::{log_tree, trace_line, EntryKind, TreeWalk};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

fn build_tree(root: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(root.join("b_dir").join("inner"))?;
    fs::create_dir_all(root.join("a_dir"))?;
    fs::write(root.join("z.csv"), "x\n")?;
    fs::write(root.join("a_dir").join("one.csv"), "1\n")?;
    fs::write(root.join("b_dir").join("inner").join("deep.csv"), "d\n")?;
    fs::write(root.join("b_dir").join("mid.csv"), "m\n")?;
    Ok(())
}

#[test]
fn walk_is_sorted_depth_first() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let root = tmp.path().join("out");
    build_tree(&root)?;

    let lines: Vec<String> = TreeWalk::new(&root)?
        .map(|e| e.map(|e| trace_line(&e)))
        .collect::<Result<_, _>>()?;
    assert_eq!(
        lines,
        vec![
            "[DIR] a_dir",
            "\t[FILE] one.csv",
            "[DIR] b_dir",
            "\t[DIR] inner",
            "\t\t[FILE] deep.csv",
            "\t[FILE] mid.csv",
            "[FILE] z.csv",
        ]
    );
    assert_eq!(log_tree(&root)?, 7);
    Ok(())
}

#[test]
fn archive_matches_trace_and_leaves_tree_intact() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let root = tmp.path().join("out");
    build_tree(&root)?;

    let traced: BTreeSet<String> = TreeWalk::new(&root)?
        .map(|e| e.map(|e| e.archive_name()))
        .collect::<Result<_, _>>()?;

    let zip_path = ZipArchiver::new().bundle(&root)?;
    assert_eq!(zip_path, archive_path_for(&root, "zip")?);
    assert_eq!(zip_path, tmp.path().join("out.zip"));

    let mut archive = zip::ZipArchive::new(fs::File::open(&zip_path)?)?;
    let names: BTreeSet<String> = archive.file_names().map(str::to_string).collect();
    assert_eq!(names, traced);
    assert!(names.contains("b_dir/inner/deep.csv"));
    assert!(names.contains("b_dir/inner/"));

    let mut deep = String::new();
    std::io::Read::read_to_string(&mut archive.by_name("b_dir/inner/deep.csv")?, &mut deep)?;
    assert_eq!(deep, "d\n");

    // source tree untouched
    let after: Vec<_> = TreeWalk::new(&root)?.collect::<Result<_, _>>()?;
    assert_eq!(after.len(), 7);
    assert!(after.iter().any(|e| e.kind == EntryKind::Dir && e.name() == "inner"));
    Ok(())
}

#[test]
fn missing_root_is_an_archive_error() {
    let tmp = tempfile::tempdir().unwrap();
    let result = ZipArchiver::stored().bundle(&tmp.path().join("absent"));
    assert!(matches!(result, Err(roster_beam::ArchiveError::Io { .. })));
}

#[cfg(unix)]
#[test]
fn symlinked_dirs_are_listed_as_files_and_not_followed() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let root = tmp.path().join("out");
    build_tree(&root)?;
    std::os::unix::fs::symlink(root.join("b_dir"), root.join("c_link"))?;

    let entries: Vec<_> = TreeWalk::new(&root)?.collect::<Result<_, _>>()?;
    let link = entries
        .iter()
        .find(|e| e.name() == "c_link")
        .ok_or_else(|| anyhow::anyhow!("link not traced"))?;
    assert_eq!(link.kind, EntryKind::File);
    assert_eq!(link.depth, 0);
    assert_eq!(entries.len(), 8);
    Ok(())
}
